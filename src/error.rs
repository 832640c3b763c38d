//! Error taxonomy shared by every model type and by the transport layer.
//!
//! The core only ever raises value-kind and not-found-kind errors. The
//! `Api*` variants belong to the HTTP collaborator; they live here so that
//! callers can match on one error type regardless of where a failure began.

use thiserror::Error;

/// Result type for model construction and access.
pub type Result<T> = std::result::Result<T, BggError>;

/// Broad classification of a [`BggError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid or missing input supplied by the caller.
    Value,
    /// Requested item absent from a collection or remote source.
    NotFound,
    /// Network timeout while talking to the remote API.
    ApiTimeout,
    /// The remote API reported an error.
    Api,
}

#[derive(Debug, Error)]
pub enum BggError {
    #[error("invalid value: {0}")]
    Value(String),

    #[error("missing {field} of {entity}")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("invalid {field} of {entity}: {reason}")]
    InvalidField {
        entity: &'static str,
        field: &'static str,
        reason: String,
    },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("API timeout: {0}")]
    ApiTimeout(String),

    #[error("API error: {0}")]
    Api(String),

    /// The request should be retried. Counts as an [`ErrorKind::Api`] error.
    #[error("API error, retry later: {0}")]
    ApiRetry(String),
}

impl BggError {
    pub fn value(message: impl Into<String>) -> Self {
        Self::Value(message.into())
    }
    pub fn missing_field(entity: &'static str, field: &'static str) -> Self {
        Self::MissingField { entity, field }
    }
    pub fn invalid_field(entity: &'static str, field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            entity,
            field,
            reason: reason.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
    pub fn api_timeout(message: impl Into<String>) -> Self {
        Self::ApiTimeout(message.into())
    }
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api(message.into())
    }
    pub fn api_retry(message: impl Into<String>) -> Self {
        Self::ApiRetry(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Value(_) | Self::MissingField { .. } | Self::InvalidField { .. } => {
                ErrorKind::Value
            }
            Self::NotFound(_) | Self::IndexOutOfRange { .. } => ErrorKind::NotFound,
            Self::ApiTimeout(_) => ErrorKind::ApiTimeout,
            Self::Api(_) | Self::ApiRetry(_) => ErrorKind::Api,
        }
    }

    /// Returns true for `Api` and its retryable specialization.
    pub fn is_api_error(&self) -> bool {
        self.kind() == ErrorKind::Api
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ApiRetry(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_entity_and_field() {
        let err = BggError::missing_field("HotItem", "rank");
        assert_eq!(err.to_string(), "missing rank of HotItem");
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_invalid_field_is_value_kind() {
        let err = BggError::invalid_field("HotItem", "rank", "expected integer");
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(err.to_string().contains("expected integer"));
    }

    #[test]
    fn test_index_out_of_range_is_not_found_kind() {
        let err = BggError::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("index 3"));
    }

    #[test]
    fn test_retry_error_is_an_api_error() {
        let err = BggError::api_retry("try again");
        assert!(err.is_api_error());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_plain_api_error_is_not_retryable() {
        let err = BggError::api("boom");
        assert!(err.is_api_error());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_timeout_is_not_an_api_error() {
        let err = BggError::api_timeout("slow");
        assert_eq!(err.kind(), ErrorKind::ApiTimeout);
        assert!(!err.is_api_error());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_not_found_helper() {
        let err = BggError::not_found("game 42");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "not found: game 42");
    }
}
