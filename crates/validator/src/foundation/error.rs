//! Error types for validation failures
//!
//! Two layers:
//!
//! - [`ValidationError`] is what a single rule returns. Codes and messages
//!   use `Cow<'static, str>` so static rule errors do not allocate.
//! - [`FieldError`] is a [`ValidationError`] pinned to a record field. A
//!   failed validation carries a non-empty, ordered [`FieldErrors`] list that
//!   encodes to a JSON array of descriptors.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured error returned by a single rule.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "String is too short")
///     .with_param("min", "5")
///     .with_param("actual", "3");
/// assert_eq!(error.param("min"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Machine-readable reason, e.g. "required", "invalid_format", "unknown_value".
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Ordered message parameters, e.g. `[("min", "5"), ("actual", "3")]`.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the message, keeping code and params.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    pub fn required() -> Self {
        Self::new("required", "This field is required")
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }

    /// Creates an "unknown_value" error listing the accepted values.
    pub fn unknown_value(allowed: &[String]) -> Self {
        Self::new(
            "unknown_value",
            format!("Value must be one of: {}", allowed.join(", ")),
        )
        .with_param("allowed", allowed.join(","))
    }

    /// Creates an "unknown_field" error.
    pub fn unknown_field() -> Self {
        Self::new("unknown_field", "Field is not declared")
    }

    /// Creates a "custom" error with a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

// ============================================================================
// FIELD ERROR
// ============================================================================

/// A single named-field violation.
///
/// Serializes to `{"field": .., "code": .., "message": .., "params": {..}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the field that failed.
    pub field: String,
    /// Violation reason code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Message parameters, in the order the rule reported them.
    #[serde(default)]
    pub params: IndexMap<String, String>,
}

impl FieldError {
    /// Pins a rule error to a field.
    pub fn new(field: impl Into<String>, error: ValidationError) -> Self {
        Self {
            field: field.into(),
            code: error.code.into_owned(),
            message: error.message.into_owned(),
            params: error
                .params
                .into_iter()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    /// Creates a "required" error for `field`.
    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, ValidationError::required())
    }

    /// Creates an "unknown_field" error for `field`.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::new(field, ValidationError::unknown_field())
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Converts to a JSON object.
    pub fn to_json_value(&self) -> Value {
        let params: Map<String, Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();

        let mut object = Map::new();
        object.insert("field".into(), Value::String(self.field.clone()));
        object.insert("code".into(), Value::String(self.code.clone()));
        object.insert("message".into(), Value::String(self.message.clone()));
        object.insert("params".into(), Value::Object(params));
        Value::Object(object)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.field, self.code, self.message)
    }
}

impl std::error::Error for FieldError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered list of field errors.
///
/// `Display` writes the JSON array encoding, so the text of a failed
/// validation can be parsed back with any JSON reader.
///
/// ```
/// use fieldcheck_validator::foundation::{FieldError, FieldErrors};
///
/// let errors: FieldErrors = vec![FieldError::required("category_id")].into();
/// let parsed: serde_json::Value = serde_json::from_str(&errors.to_string()).unwrap();
/// assert_eq!(parsed[0]["field"], "category_id");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Iterates over the errors reported for one field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// Returns true if any error names `field`.
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Iterates over the errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Consumes the collection and returns the inner Vec.
    #[must_use]
    pub fn into_vec(self) -> Vec<FieldError> {
        self.errors
    }

    /// Converts to a JSON array.
    pub fn to_json_value(&self) -> Value {
        Value::Array(self.errors.iter().map(FieldError::to_json_value).collect())
    }

    /// Encodes the collection as a compact JSON array string.
    pub fn to_json(&self) -> String {
        self.to_json_value().to_string()
    }

    /// Parses a JSON array of field error descriptors.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }
}

impl From<Vec<FieldError>> for FieldErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl std::error::Error for FieldErrors {}

// ============================================================================
// TESTS
// ============================================================================
