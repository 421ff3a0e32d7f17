//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Rule errors**: [`ValidationError`], produced by a single rule
//! - **Field errors**: [`FieldError`], [`FieldErrors`], produced by the
//!   [`Validator`](crate::validator::Validator) when a rule fails on a named field
//!
//! A rule knows nothing about the field it checks. The validator attaches the
//! field name when it turns a [`ValidationError`] into a [`FieldError`]:
//!
//! ```
//! use fieldcheck_validator::foundation::{FieldError, Validate};
//! use fieldcheck_validator::validators::min_length;
//!
//! let err = min_length(3).validate("ab").unwrap_err();
//! let field_err = FieldError::new("c_keyword", err);
//! assert_eq!(field_err.field, "c_keyword");
//! assert_eq!(field_err.code, "min_length");
//! assert_eq!(field_err.param("min"), Some("3"));
//! ```

pub mod error;
pub mod traits;

pub use error::{FieldError, FieldErrors, ValidationError};
pub use traits::{Rule, Validate, ValidateExt};

/// Runs every rule against `value` and returns all failures in rule order.
///
/// Unlike chaining with `?`, this never stops at the first failing rule.
///
/// ```
/// use fieldcheck_validator::foundation::{Rule, check_all};
/// use fieldcheck_validator::validators::{exact_length, matches_regex};
/// use std::sync::Arc;
///
/// let rules: Vec<Rule> = vec![
///     Arc::new(exact_length(1)),
///     Arc::new(matches_regex("^[012]$").unwrap()),
/// ];
/// let errors = check_all("42", &rules);
/// assert_eq!(errors.len(), 2);
/// ```
pub fn check_all(value: &str, rules: &[Rule]) -> Vec<ValidationError> {
    rules
        .iter()
        .filter_map(|rule| rule.validate(value).err())
        .collect()
}
