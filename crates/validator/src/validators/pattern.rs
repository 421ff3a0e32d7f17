//! String pattern validators

use crate::foundation::ValidationError;

// ============================================================================
// REGEX
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// The pattern is not anchored implicitly; write `^...$` to match the
    /// whole value.
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("regex")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

// ============================================================================
// DIGITS
// ============================================================================

crate::validator! {
    /// Validates that a string contains only ASCII digits.
    ///
    /// Suited to numeric identifiers such as `location_id`. Emptiness is
    /// left to the field's presence setting.
    pub Digits for str;
    rule(input) { input.bytes().all(|b| b.is_ascii_digit()) }
    error(input) { ValidationError::invalid_format("digits") }
    fn digits();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_regex() {
        let rule = matches_regex(r"^[012]$").unwrap();
        assert!(rule.validate("0").is_ok());
        assert!(rule.validate("2").is_ok());
        assert!(rule.validate("4").is_err());
        assert!(rule.validate("01").is_err());
    }

    #[test]
    fn test_regex_error_carries_pattern() {
        let err = matches_regex(r"^[1-9]$").unwrap().validate("0").unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.param("expected"), Some("regex"));
        assert_eq!(err.param("pattern"), Some("^[1-9]$"));
    }

    #[test]
    fn test_regex_invalid_pattern() {
        assert!(matches_regex("([").is_err());
    }

    #[test]
    fn test_digits() {
        assert!(digits().validate("111").is_ok());
        assert!(digits().validate("").is_ok());
        assert!(digits().validate("11a").is_err());
        assert!(digits().validate("١٢").is_err());
        assert!(digits().validate("-1").is_err());
    }
}
