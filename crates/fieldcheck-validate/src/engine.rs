//! Validation engine.
//!
//! Walks a parsed document against a [`RuleRegistry`] and collects
//! violations in rule order. Each field is checked independently: a
//! disqualifying condition (missing required field, wrong type) stops the
//! remaining checks for that field only.

use crate::error::{ValidationReport, Violation, ViolationCode};
use crate::registry::RuleRegistry;
use crate::rule::{EnumMatch, FieldKind, FieldRule};
use crate::value::{as_f64, format_number, render_list, strict_eq, textual_eq};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Validate JSON text against a registry.
///
/// Text that does not decode to a JSON object yields a report with exactly
/// one [`ViolationCode::Parse`] violation and no field checks.
///
/// ```rust
/// use fieldcheck_validate::{validate, FieldRule, RuleRegistry};
///
/// let registry = RuleRegistry::new().with_rule(FieldRule::array("methods").required());
/// assert!(validate(&registry, r#"{"methods": []}"#).is_valid());
/// ```
pub fn validate(registry: &RuleRegistry, text: &str) -> ValidationReport {
    match serde_json::from_str::<Map<String, Value>>(text) {
        Ok(document) => validate_document(registry, &document),
        Err(err) => {
            tracing::debug!(error = %err, "document failed to parse");
            ValidationReport::parse_failure(err)
        }
    }
}

/// Validate an already-decoded value. Non-objects are a parse failure.
pub fn validate_value(registry: &RuleRegistry, value: &Value) -> ValidationReport {
    match value {
        Value::Object(document) => validate_document(registry, document),
        _ => ValidationReport::parse_failure("expected a JSON object at the top level"),
    }
}

/// Run every rule against a top-level object.
pub fn validate_document(
    registry: &RuleRegistry,
    document: &Map<String, Value>,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    for rule in registry.rules() {
        check_field(rule, document.get(&rule.field), &mut report);
    }

    tracing::debug!(
        rules = registry.len(),
        violations = report.len(),
        valid = report.is_valid(),
        "document validated"
    );
    report
}

fn emit(report: &mut ValidationReport, rule: &FieldRule, code: ViolationCode, message: String) {
    tracing::trace!(field = %rule.field, code = %code, "violation");
    report.push(Violation::new(rule.field.clone(), code, message));
}

fn check_field(rule: &FieldRule, value: Option<&Value>, report: &mut ValidationReport) {
    let name = &rule.field;
    let Some(value) = value else {
        if rule.required {
            emit(
                report,
                rule,
                ViolationCode::Required,
                format!("Field '{name}' is required"),
            );
        }
        return;
    };

    let type_ok = match rule.kind {
        FieldKind::String => check_string(rule, value, report),
        FieldKind::Number | FieldKind::Integer => check_number(rule, value, report),
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::Array => value.is_array(),
    };

    if !type_ok {
        let (code, message) = match rule.kind {
            FieldKind::Array => (ViolationCode::Array, format!("Field '{name}' must be an array")),
            kind => (
                ViolationCode::Type,
                format!("Field '{name}' must be a {}", kind.type_name()),
            ),
        };
        emit(report, rule, code, message);
        return;
    }

    check_enum(rule, value, report);
}

/// Length and pattern checks. Returns `false` when the value is not a string.
fn check_string(rule: &FieldRule, value: &Value, report: &mut ValidationReport) -> bool {
    let Some(s) = value.as_str() else {
        return false;
    };
    let name = &rule.field;
    let len = s.chars().count();

    if let Some(min) = rule.min_length {
        if len < min {
            emit(
                report,
                rule,
                ViolationCode::MinLength,
                format!("Field '{name}' must have at least {min} characters"),
            );
        }
    }

    if let Some(max) = rule.max_length {
        if len > max {
            emit(
                report,
                rule,
                ViolationCode::MaxLength,
                format!("Field '{name}' must have at most {max} characters"),
            );
        }
    }

    if let Some(pattern) = &rule.pattern {
        let matched = match pattern.regex() {
            Some(regex) => regex.is_match(s),
            None => {
                tracing::warn!(field = %name, pattern = %pattern, "pattern does not compile");
                false
            }
        };
        if !matched {
            emit(
                report,
                rule,
                ViolationCode::Pattern,
                format!("Field '{name}' must match pattern {pattern}"),
            );
        }
    }

    true
}

/// Integer and range checks. Returns `false` when the value is not numeric.
fn check_number(rule: &FieldRule, value: &Value, report: &mut ValidationReport) -> bool {
    let Some(n) = as_f64(value) else {
        return false;
    };
    let name = &rule.field;

    if rule.kind == FieldKind::Integer && n.fract() != 0.0 {
        emit(
            report,
            rule,
            ViolationCode::Integer,
            format!("Field '{name}' must be an integer"),
        );
    }

    if let Some(min) = rule.min {
        if n < min {
            emit(
                report,
                rule,
                ViolationCode::Min,
                format!("Field '{name}' must be >= {}", format_number(min)),
            );
        }
    }

    if let Some(max) = rule.max {
        if n > max {
            emit(
                report,
                rule,
                ViolationCode::Max,
                format!("Field '{name}' must be <= {}", format_number(max)),
            );
        }
    }

    true
}

fn check_enum(rule: &FieldRule, value: &Value, report: &mut ValidationReport) {
    if rule.allowed.is_empty() {
        return;
    }

    let eq: fn(&Value, &Value) -> bool = match rule.enum_match {
        EnumMatch::Textual => textual_eq,
        EnumMatch::Strict => strict_eq,
    };
    if !rule.allowed.iter().any(|member| eq(value, member)) {
        emit(
            report,
            rule,
            ViolationCode::Enum,
            format!(
                "Field '{}' must be one of {}",
                rule.field,
                render_list(&rule.allowed)
            ),
        );
    }
}

/// Validator bound to a frozen rule set.
///
/// The registry is shared behind an [`Arc`], so clones are cheap and the
/// validator can be used from several threads at once.
///
/// ```rust
/// use fieldcheck_validate::{FieldRule, RuleRegistry, Validator};
///
/// let validator = Validator::new(
///     RuleRegistry::new().with_rule(FieldRule::string("endpoint").required().pattern("^https?://.*")),
/// );
/// let report = validator.validate(r#"{"endpoint": "invalid-url"}"#);
/// assert_eq!(report.messages(), vec!["Field 'endpoint' must match pattern ^https?://.*"]);
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    registry: Arc<RuleRegistry>,
}

impl Validator {
    /// Freeze a registry into a validator.
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Use an already shared registry.
    pub fn from_shared(registry: Arc<RuleRegistry>) -> Self {
        Self { registry }
    }

    /// The rule set this validator evaluates.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// See [`validate`].
    pub fn validate(&self, text: &str) -> ValidationReport {
        validate(&self.registry, text)
    }

    /// See [`validate_value`].
    pub fn validate_value(&self, value: &Value) -> ValidationReport {
        validate_value(&self.registry, value)
    }

    /// See [`validate_document`].
    pub fn validate_document(&self, document: &Map<String, Value>) -> ValidationReport {
        validate_document(&self.registry, document)
    }
}

impl From<RuleRegistry> for Validator {
    fn from(registry: RuleRegistry) -> Self {
        Self::new(registry)
    }
}
