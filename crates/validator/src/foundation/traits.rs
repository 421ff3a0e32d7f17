//! Core traits for the validation system

use std::sync::Arc;

use crate::combinators::WithMessage;
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all rules implement.
///
/// Generic over the input type; record fields are checked with rules whose
/// `Input` is `str`.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::invalid_format("no spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("samsung").is_ok());
/// assert!(NoSpaces.validate("sam sung").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

/// A shareable rule over a field's string value.
pub type Rule = Arc<dyn Validate<Input = str> + Send + Sync>;

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension methods available on every [`Validate`] implementation.
pub trait ValidateExt: Validate + Sized {
    /// Replaces the error message, keeping the code and params.
    ///
    /// ```
    /// use fieldcheck_validator::prelude::*;
    ///
    /// let rule = min_length(1).with_message("Must not be blank");
    /// let err = rule.validate("").unwrap_err();
    /// assert_eq!(err.code, "min_length");
    /// assert_eq!(err.message, "Must not be blank");
    /// ```
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Erases the concrete type into a shareable [`Rule`].
    fn into_rule(self) -> Rule
    where
        Self: Validate<Input = str> + Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}
