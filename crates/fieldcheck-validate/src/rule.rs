//! Field rule model.
//!
//! A [`FieldRule`] describes the constraints for one named top-level field.
//! Rules are built with a consuming builder and can also be loaded from JSON.
//!
//! ```rust
//! use fieldcheck_validate::FieldRule;
//!
//! let rule = FieldRule::string("username")
//!     .required()
//!     .length(3, 20)
//!     .pattern("^[a-zA-Z0-9_]+$");
//! assert_eq!(rule.field, "username");
//! ```

use crate::error::RuleSetError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;

/// The JSON type a field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Number,
    Integer,
    Boolean,
    Array,
}

impl FieldKind {
    /// Config name of the kind, as written in rule JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::Array => "array",
        }
    }

    /// Name used in wrong-type messages. Integer fields report `number`.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Integer => FieldKind::Number.as_str(),
            kind => kind.as_str(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How enum members are compared with the field value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumMatch {
    /// Compare canonical text, so `1` matches `"1"`
    #[default]
    Textual,
    /// Compare JSON values, numbers by numeric value
    Strict,
}

impl EnumMatch {
    fn is_default(&self) -> bool {
        *self == EnumMatch::Textual
    }
}

/// Regex pattern, compiled on first use.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern {
    source: String,
    #[serde(skip)]
    compiled: OnceLock<Option<Regex>>,
}

impl Pattern {
    /// Create a pattern from regex source text.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            compiled: OnceLock::new(),
        }
    }

    /// The pattern source text.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The compiled regex, or `None` when the source does not compile.
    pub fn regex(&self) -> Option<&Regex> {
        self.compiled
            .get_or_init(|| Regex::new(&self.source).ok())
            .as_ref()
    }

    /// Compile the source, returning the regex error on failure.
    pub fn compile(&self) -> Result<Regex, regex::Error> {
        Regex::new(&self.source)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Constraints for one named field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Top-level field name
    pub field: String,
    /// Expected JSON type
    pub kind: FieldKind,
    /// Whether absence is a violation
    #[serde(default)]
    pub required: bool,
    /// Minimum value (inclusive), numbers only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Maximum value (inclusive), numbers only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Minimum length in characters (inclusive), strings only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Maximum length in characters (inclusive), strings only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Regex the string must match, strings only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,
    /// Allowed values; empty means unconstrained
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub allowed: Vec<Value>,
    /// Comparison used for `allowed`
    #[serde(default, skip_serializing_if = "EnumMatch::is_default")]
    pub enum_match: EnumMatch,
    /// Free-text note, not used in evaluation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldRule {
    /// Create an optional rule with no constraints beyond the kind.
    pub fn new(field: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            field: field.into(),
            kind,
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            pattern: None,
            allowed: Vec::new(),
            enum_match: EnumMatch::Textual,
            description: None,
        }
    }

    pub fn string(field: impl Into<String>) -> Self {
        Self::new(field, FieldKind::String)
    }

    pub fn number(field: impl Into<String>) -> Self {
        Self::new(field, FieldKind::Number)
    }

    pub fn integer(field: impl Into<String>) -> Self {
        Self::new(field, FieldKind::Integer)
    }

    pub fn boolean(field: impl Into<String>) -> Self {
        Self::new(field, FieldKind::Boolean)
    }

    pub fn array(field: impl Into<String>) -> Self {
        Self::new(field, FieldKind::Array)
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the field as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set both numeric bounds.
    pub fn range(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set both length bounds.
    pub fn length(self, min: usize, max: usize) -> Self {
        self.min_length(min).max_length(max)
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(Pattern::new(pattern));
        self
    }

    /// Restrict the value to the given members.
    pub fn one_of<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.allowed = values.into_iter().map(Into::into).collect();
        self
    }

    /// Compare enum members without crossing JSON types.
    pub fn strict_enum(mut self) -> Self {
        self.enum_match = EnumMatch::Strict;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Verify the rule's pattern compiles.
    pub fn check(&self) -> Result<(), RuleSetError> {
        if let Some(pattern) = &self.pattern {
            pattern
                .compile()
                .map_err(|source| RuleSetError::InvalidPattern {
                    field: self.field.clone(),
                    pattern: pattern.as_str().to_string(),
                    source,
                })?;
        }
        Ok(())
    }
}
