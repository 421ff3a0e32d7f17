//! Enumerated-set membership

use crate::foundation::{Validate, ValidationError};

/// Validates that a string is one of a fixed set of values.
///
/// Comparison is exact; normalization such as trimming happens before the
/// rule runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf {
    /// Accepted values, in declaration order.
    pub values: Vec<String>,
}

impl OneOf {
    /// Creates a membership rule from any list of string-like values.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validate for OneOf {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.values.iter().any(|v| v == input) {
            Ok(())
        } else {
            Err(ValidationError::unknown_value(&self.values).with_param("actual", input.to_owned()))
        }
    }
}

/// Creates a [`OneOf`] rule.
pub fn one_of<I, S>(values: I) -> OneOf
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OneOf::new(values)
}
