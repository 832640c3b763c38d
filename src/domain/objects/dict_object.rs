//! Read-only wrapper over a raw mapping for objects without identity.

use crate::domain::raw::{RawData, into_object, lenient_number};
use crate::error::{BggError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A value object backed by a raw field mapping.
///
/// Reads never fail for missing keys: they return `None`. Use
/// [`DictObject::require`] when a key has to be there. The wrapped mapping is
/// never handed out mutably; [`DictObject::to_data`] returns a copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DictObject {
    data: RawData,
}

impl DictObject {
    pub fn new(data: RawData) -> Self {
        Self { data }
    }

    /// Returns the value stored under `key`, treating `null` as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key).filter(|value| !value.is_null())
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Reads an integer stored either as a number or as decimal text.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|value| lenient_number(value).ok())
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`BggError::Value`] if the key is missing or `null`.
    pub fn require(&self, key: &str) -> Result<&Value> {
        self.get(key)
            .ok_or_else(|| BggError::value(format!("missing required key '{key}'")))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrowed, read-only view of the underlying mapping.
    pub fn as_map(&self) -> &RawData {
        &self.data
    }

    /// Returns a copy of the underlying mapping for export.
    pub fn to_data(&self) -> RawData {
        self.data.clone()
    }

    pub fn into_data(self) -> RawData {
        self.data
    }
}

impl From<RawData> for DictObject {
    fn from(data: RawData) -> Self {
        Self::new(data)
    }
}

impl TryFrom<Value> for DictObject {
    type Error = BggError;

    fn try_from(value: Value) -> Result<Self> {
        into_object("DictObject", value).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> DictObject {
        DictObject::try_from(json!({
            "name": "Azul",
            "year": 2017,
            "publisher": null,
        }))
        .unwrap()
    }

    #[test]
    fn test_get_present_keys() {
        let object = sample();

        assert_eq!(object.get_str("name"), Some("Azul"));
        assert_eq!(object.get_i64("year"), Some(2017));
    }

    #[test]
    fn test_missing_and_null_keys_are_absent() {
        let object = sample();

        assert!(object.get("designer").is_none());
        assert!(object.get("publisher").is_none());
        assert!(!object.contains_key("publisher"));
    }

    #[test]
    fn test_require_missing_key_is_value_error() {
        let object = sample();
        let err = object.require("designer").unwrap_err();

        assert!(matches!(err, BggError::Value(_)));
        assert!(err.to_string().contains("designer"));
    }

    #[test]
    fn test_typed_getter_with_wrong_type_is_absent() {
        let object = sample();
        assert!(object.get_i64("name").is_none());
    }

    #[test]
    fn test_get_i64_from_decimal_text() {
        let object = DictObject::try_from(json!({ "minplayers": "2", "maxplayers": " " })).unwrap();

        assert_eq!(object.get_i64("minplayers"), Some(2));
        assert_eq!(object.get_i64("maxplayers"), None);
    }

    #[test]
    fn test_to_data_is_a_copy() {
        let object = sample();
        let mut exported = object.to_data();
        exported.insert("name".to_string(), json!("Changed"));

        assert_eq!(object.get_str("name"), Some("Azul"));
    }

    #[test]
    fn test_try_from_non_mapping_fails() {
        let result = DictObject::try_from(json!("not a mapping"));
        assert!(matches!(result, Err(BggError::Value(_))));
    }

    #[test]
    fn test_serializes_as_plain_mapping() {
        let object = sample();
        let value = serde_json::to_value(&object).unwrap();

        assert_eq!(value["name"], json!("Azul"));
        assert_eq!(value["year"], json!(2017));
    }

    #[test]
    fn test_len_counts_all_keys() {
        let object = sample();
        assert_eq!(object.len(), 3);
        assert!(!object.is_empty());
        assert!(DictObject::default().is_empty());
    }
}
