//! The record validator
//!
//! [`Validator::validate`] walks the schema's fields in declared order,
//! checks every field and every rule without stopping at the first failure,
//! and returns either the normalized record or the full list of field errors.

use thiserror::Error;
use tracing::{debug, trace};

use crate::foundation::{FieldError, FieldErrors, check_all};
use crate::record::{DecodeError, Record};
use crate::schema::{Schema, SchemaDef, SchemaError, UnknownFields};

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of validating a [`Record`].
///
/// `Invalid` always holds at least one error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The record passed; holds the normalized record.
    Valid(Record),
    /// The record failed; holds every violation in report order.
    Invalid(FieldErrors),
}

impl ValidationOutcome {
    /// Returns true for [`ValidationOutcome::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The normalized record, if validation passed.
    #[must_use]
    pub fn record(&self) -> Option<&Record> {
        match self {
            Self::Valid(record) => Some(record),
            Self::Invalid(_) => None,
        }
    }

    /// The field errors, if validation failed.
    #[must_use]
    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Converts to a standard `Result`.
    pub fn into_result(self) -> Result<Record, FieldErrors> {
        match self {
            Self::Valid(record) => Ok(record),
            Self::Invalid(errors) => Err(errors),
        }
    }
}

impl From<ValidationOutcome> for Result<Record, FieldErrors> {
    fn from(outcome: ValidationOutcome) -> Self {
        outcome.into_result()
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Failure of [`Validator::validate_json`].
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The input could not be decoded into a record; no field was checked.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// One or more fields violated the schema.
    ///
    /// Displays as the JSON array of field errors.
    #[error("{0}")]
    ValidationFailed(FieldErrors),
}

impl ValidateError {
    /// The field errors, if this is a validation failure.
    #[must_use]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::ValidationFailed(errors) => Some(errors),
            Self::Decode(_) => None,
        }
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates records against a [`Schema`].
///
/// Immutable and `Send + Sync`; share one instance by reference.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// let schema = Schema::builder()
///     .field(FieldSpec::required("category_id").rule(min_length(1)))
///     .build()
///     .unwrap();
/// let validator = Validator::new(schema);
///
/// let record = Record::from_json(r#"{"category_id":"  7 "}"#).unwrap();
/// let outcome = validator.validate(&record);
/// assert_eq!(outcome.record().unwrap().get("category_id"), Some("7"));
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    schema: Schema,
}

impl Validator {
    /// Creates a validator for `schema`.
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// Compiles a schema definition and creates a validator for it.
    pub fn from_def(def: &SchemaDef) -> Result<Self, SchemaError> {
        Ok(Self::new(def.compile()?))
    }

    /// The schema this validator checks.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validates a record.
    ///
    /// Declared fields are checked in order, then undeclared fields are
    /// handled per [`UnknownFields`]. The returned record lists declared
    /// fields first, with trimmed values where the field asks for it.
    #[tracing::instrument(level = "debug", skip_all, fields(fields = record.len()))]
    pub fn validate(&self, record: &Record) -> ValidationOutcome {
        let mut errors = FieldErrors::new();
        let mut normalized = Record::new();

        for spec in self.schema.fields() {
            let name = spec.name();
            let value = record.get(name).map(|raw| spec.normalize(raw));

            match value {
                None | Some("") if spec.is_required() => {
                    trace!(field = name, "required field is empty");
                    errors.add(FieldError::required(name));
                }
                None => {}
                Some(value) => {
                    if !value.is_empty() {
                        for error in check_all(value, spec.rules()) {
                            trace!(field = name, code = %error.code, "rule failed");
                            errors.add(FieldError::new(name, error));
                        }
                    }
                    normalized.insert(name, value);
                }
            }
        }

        for (name, value) in record.iter() {
            if self.schema.is_declared(name) {
                continue;
            }
            match self.schema.unknown_fields() {
                UnknownFields::Allow => {
                    normalized.insert(name, value);
                }
                UnknownFields::Strip => trace!(field = name, "stripping undeclared field"),
                UnknownFields::Reject => errors.add(FieldError::unknown_field(name)),
            }
        }

        if errors.is_empty() {
            debug!("record is valid");
            ValidationOutcome::Valid(normalized)
        } else {
            debug!(errors = errors.len(), "record is invalid");
            ValidationOutcome::Invalid(errors)
        }
    }

    /// Decodes JSON text and validates the resulting record.
    ///
    /// Decode errors are returned before any field is checked.
    pub fn validate_json(&self, input: &str) -> Result<Record, ValidateError> {
        let record = Record::from_json(input)?;
        self.validate(&record)
            .into_result()
            .map_err(ValidateError::ValidationFailed)
    }

    /// Returns true if the record passes.
    #[must_use]
    pub fn is_valid(&self, record: &Record) -> bool {
        self.validate(record).is_valid()
    }
}
