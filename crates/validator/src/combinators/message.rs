//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the error message of a rule.
///
/// The code and params of the original error are kept, so callers that
/// branch on the code still see the built-in reason.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::combinators::WithMessage;
/// use fieldcheck_validator::foundation::Validate;
/// use fieldcheck_validator::validators::exact_length;
///
/// let rule = WithMessage::new(exact_length(1), "Must be a single character");
/// let err = rule.validate("12").unwrap_err();
/// assert_eq!(err.code, "exact_length");
/// assert_eq!(err.message, "Must be a single character");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: String,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner
            .validate(input)
            .map_err(|original| original.with_message(Cow::Owned(self.message.clone())))
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{matches_regex, min_length};

    #[test]
    fn passes_through_success() {
        let rule = with_message(min_length(1), "Required");
        assert!(rule.validate("x").is_ok());
    }

    #[test]
    fn replaces_message_only() {
        let rule = with_message(matches_regex("^[1-9]$").unwrap(), "Value must be 1 to 9");
        let err = rule.validate("0").unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.message, "Value must be 1 to 9");
        assert_eq!(err.param("pattern"), Some("^[1-9]$"));
    }

    #[test]
    fn accessors() {
        let rule = WithMessage::new(min_length(2), "custom");
        assert_eq!(rule.message(), "custom");
        assert_eq!(rule.inner().min, 2);
    }
}
