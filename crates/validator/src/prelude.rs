//! Prelude module for convenient imports.
//!
//! `use fieldcheck_validator::prelude::*;` brings in the traits, error
//! types, schema builders, the validator, and every built-in rule.

pub use crate::foundation::{
    FieldError, FieldErrors, Rule, Validate, ValidateExt, ValidationError,
};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

pub use crate::combinators::{WithMessage, with_message};

pub use crate::record::{DecodeError, Record};

pub use crate::schema::{
    FieldDef, FieldSpec, Presence, RuleDef, Schema, SchemaBuilder, SchemaDef, SchemaError,
    UnknownFields,
};

pub use crate::validator::{ValidateError, ValidationOutcome, Validator};
