//! Violation, report and rule-set error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Reason a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// A required field is absent
    Required,
    /// The value has the wrong JSON type
    Type,
    /// String shorter than `min_length`
    MinLength,
    /// String longer than `max_length`
    MaxLength,
    /// String does not match the rule's pattern
    Pattern,
    /// Number has a fractional part where an integer is expected
    Integer,
    /// Number below `min`
    Min,
    /// Number above `max`
    Max,
    /// Value is not a member of the allowed list
    Enum,
    /// Value is not an array
    Array,
    /// The document could not be decoded
    Parse,
}

impl ViolationCode {
    /// Stable string form of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationCode::Required => "required",
            ViolationCode::Type => "type",
            ViolationCode::MinLength => "min_length",
            ViolationCode::MaxLength => "max_length",
            ViolationCode::Pattern => "pattern",
            ViolationCode::Integer => "integer",
            ViolationCode::Min => "min",
            ViolationCode::Max => "max",
            ViolationCode::Enum => "enum",
            ViolationCode::Array => "array",
            ViolationCode::Parse => "parse",
        }
    }
}

impl fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One diagnostic tied to a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// The field that failed. Empty for document-level parse failures.
    pub field: String,
    /// Why it failed
    pub code: ViolationCode,
    /// Human-readable message
    pub message: String,
}

impl Violation {
    /// Create a new violation.
    pub fn new(
        field: impl Into<String>,
        code: ViolationCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }

    /// Document-level parse failure.
    pub fn parse(detail: impl fmt::Display) -> Self {
        Self::new("", ViolationCode::Parse, format!("Invalid JSON: {detail}"))
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of one validation call.
///
/// Serializes to the structured error envelope:
///
/// ```json
/// {
///   "error": {
///     "type": "validation_error",
///     "message": "Validation failed",
///     "fields": [{"field": "age", "code": "min", "message": "Field 'age' must be >= 18"}]
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Violations in rule order
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Create an empty (valid) report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report holding only a parse failure.
    pub fn parse_failure(detail: impl fmt::Display) -> Self {
        Self {
            violations: vec![Violation::parse(detail)],
        }
    }

    /// Record a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Whether the document passed every rule.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Check if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violation messages in order.
    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }

    /// Violations recorded against one field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.field == field)
    }

    /// Whether a violation with this field and code was recorded.
    pub fn has(&self, field: &str, code: ViolationCode) -> bool {
        self.for_field(field).any(|v| v.code == code)
    }

    /// Convert to Result - Ok if valid, Err otherwise.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: {} violation(s)", self.violations.len())
    }
}

impl std::error::Error for ValidationReport {}

#[derive(Serialize, Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    error_type: String,
    message: String,
    fields: Vec<Violation>,
}

#[derive(Serialize, Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

impl Serialize for ValidationReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let wrapper = ErrorWrapper {
            error: ErrorBody {
                error_type: "validation_error".to_string(),
                message: "Validation failed".to_string(),
                fields: self.violations.clone(),
            },
        };
        wrapper.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ValidationReport {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wrapper = ErrorWrapper::deserialize(deserializer)?;
        Ok(Self {
            violations: wrapper.error.fields,
        })
    }
}

/// Errors raised while loading or checking a rule set.
#[derive(Debug, Error)]
pub enum RuleSetError {
    #[error("Rule set parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid pattern for field '{field}': {pattern}")]
    InvalidPattern {
        field: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
