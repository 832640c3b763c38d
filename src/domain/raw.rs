//! Raw field mappings and typed field extraction.
//!
//! The HTTP layer hands the model a parsed response as a string-keyed tree
//! ([`RawData`]). [`Fields`] reads individual keys out of it with a fixed
//! policy:
//!
//! - a missing key and a key holding `null` are both treated as absent
//! - absent optional fields decode to `None`, never to a default value
//! - absent required fields are [`BggError::MissingField`]
//! - present fields of the wrong shape are [`BggError::InvalidField`]
//!
//! Numeric fields accept either JSON numbers or decimal strings, because
//! XML-derived payloads carry every number as text. An empty or blank string
//! in a numeric field counts as absent.

use crate::error::{BggError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_with::{DisplayFromStr, PickFirst, Same};
use std::fmt::Display;
use std::str::FromStr;

/// A parsed response object: string keys mapped to arbitrary JSON values.
pub type RawData = serde_json::Map<String, Value>;

/// Typed read access to the keys of one raw mapping.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a> {
    entity: &'static str,
    data: &'a RawData,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(entity: &'static str, data: &'a RawData) -> Self {
        Self { entity, data }
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a Value> {
        self.data.get(key).filter(|value| !value.is_null())
    }

    pub(crate) fn require(&self, key: &'static str) -> Result<&'a Value> {
        self.get(key)
            .ok_or_else(|| BggError::missing_field(self.entity, key))
    }

    pub(crate) fn text(&self, key: &'static str) -> Result<Option<String>> {
        self.get(key)
            .map(|value| match value {
                Value::String(s) => Ok(s.clone()),
                other => Err(BggError::invalid_field(
                    self.entity,
                    key,
                    format!("expected a string, got {other}"),
                )),
            })
            .transpose()
    }

    pub(crate) fn number<T>(&self, key: &'static str) -> Result<Option<T>>
    where
        T: DeserializeOwned + FromStr,
        T::Err: Display,
    {
        self.numeric(key)
            .map(|value| self.decode_number(key, value))
            .transpose()
    }

    pub(crate) fn required_number<T>(&self, key: &'static str) -> Result<T>
    where
        T: DeserializeOwned + FromStr,
        T::Err: Display,
    {
        let value = self
            .numeric(key)
            .ok_or_else(|| BggError::missing_field(self.entity, key))?;
        self.decode_number(key, value)
    }

    pub(crate) fn decode<T: DeserializeOwned>(&self, key: &'static str) -> Result<Option<T>> {
        self.get(key)
            .map(|value| {
                T::deserialize(value)
                    .map_err(|e| BggError::invalid_field(self.entity, key, e.to_string()))
            })
            .transpose()
    }

    fn numeric(&self, key: &str) -> Option<&'a Value> {
        self.get(key).filter(|value| !is_blank(value))
    }

    fn decode_number<T>(&self, key: &'static str, value: &Value) -> Result<T>
    where
        T: DeserializeOwned + FromStr,
        T::Err: Display,
    {
        lenient_number(value)
            .map_err(|e| BggError::invalid_field(self.entity, key, e.to_string()))
    }
}

fn is_blank(value: &Value) -> bool {
    value.as_str().is_some_and(|s| s.trim().is_empty())
}

/// Decodes a JSON number or a decimal string into `T`.
pub(crate) fn lenient_number<T>(value: &Value) -> std::result::Result<T, serde_json::Error>
where
    T: DeserializeOwned + FromStr,
    T::Err: Display,
{
    serde_with::As::<PickFirst<(Same, DisplayFromStr)>>::deserialize(value)
}

/// Unwraps a JSON value that must be an object.
pub(crate) fn into_object(entity: &'static str, value: Value) -> Result<RawData> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(BggError::value(format!(
            "{entity} data must be a mapping, got {other}"
        ))),
    }
}
