//! Declarative schema definitions
//!
//! [`SchemaDef`] is the serde form of a [`Schema`], meant for config files:
//!
//! ```toml
//! unknown_fields = "reject"
//!
//! [[field]]
//! name = "location_id"
//! required = true
//! rules = [
//!   { kind = "length_range", min = 1, max = 2 },
//!   { kind = "digits", message = "Only digits are allowed" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::combinators::WithMessage;
use crate::foundation::{Rule, Validate, ValidateExt};
use crate::schema::{FieldSpec, Presence, Schema, SchemaError, UnknownFields};
use crate::validators::{
    Digits, ExactLength, LengthRange, MatchesRegex, MaxLength, MinLength, NotEmpty, OneOf,
};

/// Serde form of a [`Schema`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaDef {
    /// Policy for undeclared record fields.
    #[serde(default)]
    pub unknown_fields: UnknownFields,

    /// Field declarations in evaluation order.
    #[serde(default, rename = "field", alias = "fields")]
    pub fields: Vec<FieldDef>,
}

/// Serde form of a [`FieldSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDef {
    /// Field name as it appears in the record.
    pub name: String,

    /// Whether an absent or empty value is an error.
    #[serde(default)]
    pub required: bool,

    /// Strip surrounding whitespace before checking.
    #[serde(default = "default_trim")]
    pub trim: bool,

    /// Rules in evaluation order.
    #[serde(default)]
    pub rules: Vec<RuleDef>,
}

fn default_trim() -> bool {
    true
}

/// Serde form of a built-in rule, tagged by `kind`.
///
/// Every variant accepts an optional `message` replacing the default text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleDef {
    /// See [`NotEmpty`].
    NotEmpty {
        /// Custom message.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// See [`MinLength`].
    MinLength {
        /// Minimum length in chars.
        min: usize,
        /// Custom message.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// See [`MaxLength`].
    MaxLength {
        /// Maximum length in chars.
        max: usize,
        /// Custom message.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// See [`ExactLength`].
    ExactLength {
        /// Required length in chars.
        length: usize,
        /// Custom message.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// See [`LengthRange`].
    LengthRange {
        /// Minimum length in chars.
        min: usize,
        /// Maximum length in chars.
        max: usize,
        /// Custom message.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// See [`MatchesRegex`].
    Pattern {
        /// Regular expression; anchor it to match the whole value.
        regex: String,
        /// Custom message.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// See [`OneOf`].
    OneOf {
        /// Accepted values.
        values: Vec<String>,
        /// Custom message.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// See [`Digits`].
    Digits {
        /// Custom message.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl RuleDef {
    /// The custom message, if one is set.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::NotEmpty { message }
            | Self::MinLength { message, .. }
            | Self::MaxLength { message, .. }
            | Self::ExactLength { message, .. }
            | Self::LengthRange { message, .. }
            | Self::Pattern { message, .. }
            | Self::OneOf { message, .. }
            | Self::Digits { message } => message.as_deref(),
        }
    }

    /// Compiles the definition into a rule for `field`.
    pub fn compile(&self, field: &str) -> Result<Rule, SchemaError> {
        let message = self.message();
        match self {
            Self::NotEmpty { .. } => Ok(erase(NotEmpty, message)),
            Self::MinLength { min, .. } => Ok(erase(MinLength::new(*min), message)),
            Self::MaxLength { max, .. } => Ok(erase(MaxLength::new(*max), message)),
            Self::ExactLength { length, .. } => Ok(erase(ExactLength::new(*length), message)),
            Self::LengthRange { min, max, .. } => {
                let rule = LengthRange::new(*min, *max).map_err(|_| SchemaError::InvalidRange {
                    field: field.to_owned(),
                    min: *min,
                    max: *max,
                })?;
                Ok(erase(rule, message))
            }
            Self::Pattern { regex, .. } => {
                let rule =
                    MatchesRegex::new(regex).map_err(|source| SchemaError::InvalidPattern {
                        field: field.to_owned(),
                        pattern: regex.clone(),
                        source,
                    })?;
                Ok(erase(rule, message))
            }
            Self::OneOf { values, .. } => {
                if values.is_empty() {
                    return Err(SchemaError::EmptyChoices {
                        field: field.to_owned(),
                    });
                }
                Ok(erase(OneOf::new(values.iter().cloned()), message))
            }
            Self::Digits { .. } => Ok(erase(Digits, message)),
        }
    }
}

fn erase<V>(rule: V, message: Option<&str>) -> Rule
where
    V: Validate<Input = str> + Send + Sync + 'static,
{
    match message {
        Some(message) => WithMessage::new(rule, message).into_rule(),
        None => rule.into_rule(),
    }
}

impl FieldDef {
    /// Compiles the definition into a [`FieldSpec`].
    pub fn compile(&self) -> Result<FieldSpec, SchemaError> {
        let presence = if self.required {
            Presence::Required
        } else {
            Presence::Optional
        };

        self.rules.iter().try_fold(
            FieldSpec::new(self.name.clone(), presence).trim(self.trim),
            |spec, rule| Ok(spec.boxed_rule(rule.compile(&self.name)?)),
        )
    }
}

impl SchemaDef {
    /// Parses a definition from JSON text.
    pub fn from_json_str(input: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parses a definition from TOML text.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(input: &str) -> Result<Self, SchemaError> {
        Ok(toml::from_str(input)?)
    }

    /// Compiles every field and builds the [`Schema`].
    pub fn compile(&self) -> Result<Schema, SchemaError> {
        let mut builder = Schema::builder().unknown_fields(self.unknown_fields);
        for field in &self.fields {
            builder = builder.field(field.compile()?);
        }
        builder.build()
    }
}
