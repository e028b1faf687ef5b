//! Insertion-ordered rule registry.

use crate::error::RuleSetError;
use crate::rule::FieldRule;
use std::collections::HashMap;

/// Collection of field rules forming one validation context.
///
/// Rules are kept in insertion order, which is also the order violations are
/// reported in. Adding a rule for a name that already exists replaces it in
/// place.
///
/// ## Example
///
/// ```rust
/// use fieldcheck_validate::{FieldRule, RuleRegistry};
///
/// let mut registry = RuleRegistry::new();
/// registry.add_rule(FieldRule::string("name").required());
/// registry.add_rule(FieldRule::integer("age").min(0.0));
///
/// assert_eq!(registry.field_names(), vec!["name", "age"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<FieldRule>,
    index: HashMap<String, usize>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, replacing any rule for the same field.
    pub fn add_rule(&mut self, rule: FieldRule) {
        match self.index.get(&rule.field) {
            Some(&pos) => {
                tracing::debug!(
                    field = %rule.field,
                    kind = %rule.kind,
                    "replacing existing rule"
                );
                self.rules[pos] = rule;
            }
            None => {
                self.index.insert(rule.field.clone(), self.rules.len());
                self.rules.push(rule);
            }
        }
    }

    /// Builder-style [`add_rule`](Self::add_rule).
    pub fn with_rule(mut self, rule: FieldRule) -> Self {
        self.add_rule(rule);
        self
    }

    /// Remove the rule for a field, keeping the order of the rest.
    pub fn remove(&mut self, field: &str) -> Option<FieldRule> {
        let pos = self.index.remove(field)?;
        let rule = self.rules.remove(pos);
        for idx in self.index.values_mut() {
            if *idx > pos {
                *idx -= 1;
            }
        }
        Some(rule)
    }

    /// All rules in insertion order.
    pub fn rules(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.iter()
    }

    /// Get the rule for a field.
    pub fn get(&self, field: &str) -> Option<&FieldRule> {
        self.index.get(field).map(|&pos| &self.rules[pos])
    }

    pub fn contains(&self, field: &str) -> bool {
        self.index.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.field.as_str()).collect()
    }

    /// Verify every rule's pattern compiles.
    pub fn check(&self) -> Result<(), RuleSetError> {
        self.rules.iter().try_for_each(FieldRule::check)
    }

    /// Load a rule set from a JSON array of rule objects.
    ///
    /// ```rust
    /// use fieldcheck_validate::RuleRegistry;
    ///
    /// let registry = RuleRegistry::from_json(
    ///     r#"[{"field": "endpoint", "kind": "string", "required": true, "pattern": "^https?://.*"}]"#,
    /// ).unwrap();
    /// assert!(registry.contains("endpoint"));
    /// ```
    pub fn from_json(text: &str) -> Result<Self, RuleSetError> {
        let rules: Vec<FieldRule> = serde_json::from_str(text)?;
        let registry: Self = rules.into_iter().collect();
        registry.check()?;
        Ok(registry)
    }

    /// Write the rule set as a JSON array.
    pub fn to_json(&self) -> Result<String, RuleSetError> {
        Ok(serde_json::to_string_pretty(&self.rules)?)
    }
}

impl FromIterator<FieldRule> for RuleRegistry {
    fn from_iter<I: IntoIterator<Item = FieldRule>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl Extend<FieldRule> for RuleRegistry {
    fn extend<I: IntoIterator<Item = FieldRule>>(&mut self, iter: I) {
        for rule in iter {
            self.add_rule(rule);
        }
    }
}
