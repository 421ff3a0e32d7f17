//! Records and JSON decoding
//!
//! A [`Record`] is an ordered map from field name to raw string value.
//! Decoding is strict about shape and lenient about content: the root must
//! be a JSON object and every value a string (or `null`, meaning absent),
//! but field content is left to the [`Validator`](crate::validator::Validator).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Failure to turn input text into a [`Record`].
///
/// Always distinct from field-level violations: a decode error means no
/// field was checked.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is not well-formed JSON.
    #[error("malformed JSON input: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The input is JSON but its root is not an object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject {
        /// JSON type of the root value.
        found: &'static str,
    },

    /// A field holds something other than a string or `null`.
    #[error("field '{field}' must be a string, found {found}")]
    NonStringField {
        /// Offending field name.
        field: String,
        /// JSON type of its value.
        found: &'static str,
    },
}

/// Returns the JSON type name of a value, for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// An ordered mapping from field name to raw string value.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::record::Record;
///
/// let record = Record::from_json(r#"{"type":"4","category_id":null}"#).unwrap();
/// assert_eq!(record.get("type"), Some("4"));
/// assert_eq!(record.get("category_id"), None);
/// assert_eq!(record.value_or_empty("category_id"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a record from JSON text.
    pub fn from_json(input: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    /// Decodes a record from raw bytes.
    ///
    /// Invalid UTF-8 is reported as [`DecodeError::Malformed`].
    pub fn from_slice(input: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(input)?;
        Self::from_value(value)
    }

    /// Builds a record from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(DecodeError::NotAnObject {
                    found: json_type_name(&other),
                });
            }
        };

        let mut fields = IndexMap::with_capacity(object.len());
        for (name, value) in object {
            match value {
                Value::String(s) => {
                    fields.insert(name, s);
                }
                Value::Null => {}
                other => {
                    return Err(DecodeError::NonStringField {
                        field: name,
                        found: json_type_name(&other),
                    });
                }
            }
        }
        Ok(Self { fields })
    }

    /// Sets a field, returning the previous value if any.
    ///
    /// A new field is appended; an existing field keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(name.into(), value.into())
    }

    /// Removes a field, preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.fields.shift_remove(name)
    }

    /// Returns the raw value of a field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns the value of a field, or `""` when it is absent.
    #[must_use]
    pub fn value_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// Returns true if the field is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of present fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over field names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Converts to a JSON object, preserving field order.
    pub fn to_json_value(&self) -> Value {
        let object: Map<String, Value> = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Value::Object(object)
    }

    /// Encodes the record as compact JSON text.
    pub fn to_json(&self) -> String {
        self.to_json_value().to_string()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const SAMPLE: &str = r#"{"type":"4","location_id":"111","category_id":"","c_keyword":"qwerty","b_keyword":"samsung"}"#;

    #[test]
    fn decodes_sample_in_order() {
        let record = Record::from_json(SAMPLE).unwrap();
        assert_eq!(
            record.names().collect::<Vec<_>>(),
            ["type", "location_id", "category_id", "c_keyword", "b_keyword"]
        );
        assert_eq!(record.get("category_id"), Some(""));
    }

    #[test]
    fn encodes_back_to_same_text() {
        let record = Record::from_json(SAMPLE).unwrap();
        assert_eq!(record.to_json(), SAMPLE);
    }

    #[test]
    fn null_means_absent() {
        let record = Record::from_json(r#"{"a":null,"b":"x"}"#).unwrap();
        assert!(!record.contains("a"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn malformed_input() {
        let err = Record::from_json("{not json").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn from_slice_matches_from_json() {
        let record = Record::from_slice(SAMPLE.as_bytes()).unwrap();
        assert_eq!(record, Record::from_json(SAMPLE).unwrap());
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let err = Record::from_slice(b"{\"a\":\"\xff\"}").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn root_must_be_object() {
        let err = Record::from_json("[1,2]").unwrap_err();
        assert!(matches!(err, DecodeError::NotAnObject { found: "array" }));
        assert_eq!(err.to_string(), "expected a JSON object, found array");
    }

    #[test]
    fn values_must_be_strings() {
        let err = Record::from_value(json!({"type": 4})).unwrap_err();
        match err {
            DecodeError::NonStringField { field, found } => {
                assert_eq!(field, "type");
                assert_eq!(found, "number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn insert_and_remove_keep_order() {
        let mut record: Record = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        record.insert("b", "20");
        record.remove("a");
        assert_eq!(record.iter().collect::<Vec<_>>(), [("b", "20"), ("c", "3")]);
    }

    #[test]
    fn serde_round_trip_through_map() {
        let record: Record = [("x", "1")].into_iter().collect();
        assert_eq!(serde_json::to_value(&record).unwrap(), json!({"x": "1"}));
    }
}
