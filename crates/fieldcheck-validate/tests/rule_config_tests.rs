//! Tests for loading rule sets from JSON configuration.

use fieldcheck_validate::prelude::*;
use fieldcheck_validate::EnumMatch;

const RULES: &str = r#"[
    {"field": "username", "kind": "string", "required": true, "min_length": 3, "max_length": 20,
     "pattern": "^[a-zA-Z0-9_]+$", "description": "Login name"},
    {"field": "age", "kind": "integer", "required": true, "min": 18, "max": 120},
    {"field": "tier", "kind": "integer", "enum": [1, 2, 3], "enum_match": "strict"},
    {"field": "newsletter", "kind": "boolean"},
    {"field": "roles", "kind": "array", "required": true}
]"#;

#[test]
fn loads_rules_in_file_order() {
    let registry = RuleRegistry::from_json(RULES).unwrap();

    assert_eq!(
        registry.field_names(),
        vec!["username", "age", "tier", "newsletter", "roles"]
    );

    let username = registry.get("username").unwrap();
    assert_eq!(username.kind, FieldKind::String);
    assert_eq!(username.min_length, Some(3));
    assert_eq!(username.description.as_deref(), Some("Login name"));

    let tier = registry.get("tier").unwrap();
    assert_eq!(tier.enum_match, EnumMatch::Strict);
    assert!(!tier.required);
}

#[test]
fn loaded_rules_validate_documents() {
    let validator = Validator::new(RuleRegistry::from_json(RULES).unwrap());

    let ok = validator.validate(
        r#"{"username": "ann_1", "age": 40, "tier": 2, "roles": ["admin"]}"#,
    );
    assert!(ok.is_valid(), "{:?}", ok.messages());

    let bad = validator.validate(
        r#"{"username": "ann", "age": 40, "tier": "2", "newsletter": "yes"}"#,
    );
    assert_eq!(
        bad.messages(),
        vec![
            "Field 'tier' must be a number",
            "Field 'newsletter' must be a boolean",
            "Field 'roles' is required",
        ]
    );
}

#[test]
fn strict_enum_from_config_rejects_other_numbers() {
    let registry = RuleRegistry::from_json(RULES).unwrap();
    let report = validate(
        &registry,
        r#"{"username": "ann", "age": 40, "tier": 4, "roles": []}"#,
    );
    assert_eq!(report.messages(), vec!["Field 'tier' must be one of [1 2 3]"]);
}

#[test]
fn duplicate_fields_last_one_wins() {
    let registry = RuleRegistry::from_json(
        r#"[
            {"field": "code", "kind": "string"},
            {"field": "other", "kind": "boolean"},
            {"field": "code", "kind": "integer", "required": true}
        ]"#,
    )
    .unwrap();

    assert_eq!(registry.field_names(), vec!["code", "other"]);
    assert_eq!(registry.get("code").unwrap().kind, FieldKind::Integer);
}

#[test]
fn invalid_pattern_is_rejected_at_load() {
    let err =
        RuleRegistry::from_json(r#"[{"field": "zip", "kind": "string", "pattern": "[0-9"}]"#)
            .unwrap_err();

    assert!(matches!(err, RuleSetError::InvalidPattern { ref field, .. } if field == "zip"));
    assert!(err.to_string().contains("zip"));
}

#[test]
fn unknown_kind_is_a_parse_error() {
    let err = RuleRegistry::from_json(r#"[{"field": "meta", "kind": "object"}]"#).unwrap_err();
    assert!(matches!(err, RuleSetError::Parse(_)));
}

#[test]
fn writes_back_loadable_json() {
    let registry = RuleRegistry::from_json(RULES).unwrap();
    let text = registry.to_json().unwrap();
    let reloaded = RuleRegistry::from_json(&text).unwrap();

    assert_eq!(reloaded.field_names(), registry.field_names());
    for rule in registry.rules() {
        assert_eq!(reloaded.get(&rule.field), Some(rule));
    }
}
