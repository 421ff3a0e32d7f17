//! Field declarations
//!
//! A [`Schema`] is the ordered list of fields a [`Validator`] checks, each
//! with a [`Presence`], a trim flag, and its rules. Schemas are built in code
//! with [`Schema::builder`] or compiled from a [`SchemaDef`] loaded from TOML
//! or JSON.
//!
//! [`Validator`]: crate::validator::Validator

mod def;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foundation::{Rule, Validate};

pub use def::{FieldDef, RuleDef, SchemaDef};

// ============================================================================
// ERRORS
// ============================================================================

/// A schema that cannot be built.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two fields share a name.
    #[error("field '{name}' is declared more than once")]
    DuplicateField {
        /// Repeated field name.
        name: String,
    },

    /// A field has an empty name.
    #[error("field names must not be empty")]
    EmptyFieldName,

    /// A pattern rule does not compile.
    #[error("field '{field}': invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Field the rule belongs to.
        field: String,
        /// Pattern as written.
        pattern: String,
        /// Regex compiler error.
        #[source]
        source: regex::Error,
    },

    /// A length range with `min > max`.
    #[error("field '{field}': length range min {min} exceeds max {max}")]
    InvalidRange {
        /// Field the rule belongs to.
        field: String,
        /// Lower bound.
        min: usize,
        /// Upper bound.
        max: usize,
    },

    /// A `one_of` rule without values.
    #[error("field '{field}': one_of needs at least one value")]
    EmptyChoices {
        /// Field the rule belongs to.
        field: String,
    },

    /// A JSON schema document could not be parsed.
    #[error("invalid JSON schema definition: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML schema document could not be parsed.
    #[cfg(feature = "toml")]
    #[error("invalid TOML schema definition: {0}")]
    Toml(#[from] toml::de::Error),
}

// ============================================================================
// POLICIES
// ============================================================================

/// Whether a field must carry a non-empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Absent or empty values fail with a single `required` error.
    Required,
    /// Absent or empty values pass without running rules.
    #[default]
    Optional,
}

/// What to do with record fields the schema does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFields {
    /// Keep them in the normalized record, after the declared fields.
    #[default]
    Allow,
    /// Drop them from the normalized record.
    Strip,
    /// Report each one as an `unknown_field` error.
    Reject,
}

// ============================================================================
// FIELD SPEC
// ============================================================================

/// Declaration of one field.
///
/// ```
/// use fieldcheck_validator::schema::{FieldSpec, Presence};
/// use fieldcheck_validator::validators::{digits, length_range};
///
/// let spec = FieldSpec::required("location_id")
///     .rule(length_range(1, 2).unwrap())
///     .rule(digits());
/// assert_eq!(spec.presence(), Presence::Required);
/// assert_eq!(spec.rules().len(), 2);
/// ```
#[derive(Clone)]
pub struct FieldSpec {
    name: String,
    presence: Presence,
    trim: bool,
    rules: Vec<Rule>,
}

impl FieldSpec {
    /// Declares a field with the given presence. Trimming is on.
    pub fn new(name: impl Into<String>, presence: Presence) -> Self {
        Self {
            name: name.into(),
            presence,
            trim: true,
            rules: Vec::new(),
        }
    }

    /// Declares a required field.
    pub fn required(name: impl Into<String>) -> Self {
        Self::new(name, Presence::Required)
    }

    /// Declares an optional field.
    pub fn optional(name: impl Into<String>) -> Self {
        Self::new(name, Presence::Optional)
    }

    /// Appends a rule. Rules run in the order they are added.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<V>(mut self, rule: V) -> Self
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        self.rules.push(std::sync::Arc::new(rule));
        self
    }

    /// Appends an already type-erased rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn boxed_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets whether surrounding whitespace is stripped before rules run.
    #[must_use = "builder methods must be chained or built"]
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field presence.
    #[must_use]
    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// Returns true for [`Presence::Required`].
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }

    /// Returns true if values are trimmed before checking.
    #[must_use]
    pub fn trims(&self) -> bool {
        self.trim
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Applies the field's normalization to a raw value.
    #[must_use]
    pub fn normalize<'a>(&self, raw: &'a str) -> &'a str {
        if self.trim { raw.trim() } else { raw }
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("presence", &self.presence)
            .field("trim", &self.trim)
            .field("rules", &self.rules.len())
            .finish()
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// Ordered field declarations plus the unknown-field policy.
///
/// Immutable once built; field names are unique.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
    unknown_fields: UnknownFields,
}

impl Schema {
    /// Starts a new schema.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Declared fields in order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a field declaration by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns true if `name` is declared.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Policy for undeclared fields.
    #[must_use]
    pub fn unknown_fields(&self) -> UnknownFields {
        self.unknown_fields
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder for [`Schema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldSpec>,
    unknown_fields: UnknownFields,
}

impl SchemaBuilder {
    /// Appends a field declaration.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Sets the unknown-field policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn unknown_fields(mut self, policy: UnknownFields) -> Self {
        self.unknown_fields = policy;
        self
    }

    /// Checks field names and builds the schema.
    pub fn build(self) -> Result<Schema, SchemaError> {
        let mut seen = HashSet::with_capacity(self.fields.len());
        for spec in &self.fields {
            if spec.name.is_empty() {
                return Err(SchemaError::EmptyFieldName);
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    name: spec.name.clone(),
                });
            }
        }

        Ok(Schema {
            fields: self.fields,
            unknown_fields: self.unknown_fields,
        })
    }
}
