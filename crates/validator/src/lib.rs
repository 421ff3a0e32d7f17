//! # fieldcheck-validator
//!
//! Validates flat records of named string fields against a declared schema.
//!
//! ## Quick Start
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let schema = Schema::builder()
//!     .field(FieldSpec::required("location_id").rule(digits()).rule(max_length(2)))
//!     .field(FieldSpec::optional("c_keyword").rule(min_length(1)))
//!     .build()
//!     .unwrap();
//! let validator = Validator::new(schema);
//!
//! let record = validator.validate_json(r#"{"location_id":"11"}"#).unwrap();
//! assert_eq!(record.get("location_id"), Some("11"));
//!
//! let err = validator.validate_json(r#"{"location_id":""}"#).unwrap_err();
//! let errors: serde_json::Value = serde_json::from_str(&err.to_string()).unwrap();
//! assert!(errors.is_array());
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait and error types
//! - [`validators`]: built-in string rules (length, pattern, choice)
//! - [`combinators`]: rule wrappers such as [`WithMessage`](combinators::WithMessage)
//! - [`record`]: the ordered [`Record`](record::Record) and JSON decoding
//! - [`schema`]: field declarations, presence and unknown-field policy
//! - [`validator`]: the [`Validator`](validator::Validator) and its outcome

// Rules return `ValidationError` by value.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod record;
pub mod schema;
pub mod validator;
pub mod validators;
