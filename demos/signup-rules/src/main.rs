//! Signup rules demo for fieldcheck
//!
//! Run with: cargo run -p signup-rules
//! Set RUST_LOG=fieldcheck_validate=trace to see per-violation events.

use fieldcheck_validate::prelude::*;
use tracing_subscriber::EnvFilter;

/// Product catalog rules, loaded the way a service would load them from disk.
const PRODUCT_RULES: &str = r#"[
    {"field": "id", "kind": "integer", "required": true, "description": "Catalog id"},
    {"field": "name", "kind": "string", "required": true, "min_length": 1, "max_length": 200},
    {"field": "price", "kind": "number", "required": true, "min": 0.01, "max": 999999.99},
    {"field": "stock", "kind": "integer", "required": true, "min": 0},
    {"field": "category", "kind": "string", "required": true,
     "enum": ["Electronics", "Clothing", "Food", "Books", "Sports"]}
]"#;

fn user_rules() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry.add_rule(
        FieldRule::string("username")
            .required()
            .length(3, 20)
            .pattern("^[a-zA-Z0-9_]+$"),
    );
    registry.add_rule(
        FieldRule::string("email")
            .required()
            .pattern(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"),
    );
    registry.add_rule(FieldRule::integer("age").required().range(18.0, 120.0));
    registry.add_rule(FieldRule::string("password").required().length(8, 100));
    registry.add_rule(
        FieldRule::string("country").one_of(["USA", "Canada", "Mexico", "UK", "Germany", "France"]),
    );
    registry
}

fn api_rules() -> RuleRegistry {
    RuleRegistry::new()
        .with_rule(FieldRule::string("endpoint").required().pattern("^https?://.*"))
        .with_rule(FieldRule::array("methods").required())
}

fn print_report(title: &str, report: &ValidationReport) {
    println!("== {title}");
    if report.is_valid() {
        println!("   valid");
    }
    for violation in &report.violations {
        println!("   [{}] {}", violation.code, violation.message);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let users = Validator::new(user_rules());
    let products = Validator::new(RuleRegistry::from_json(PRODUCT_RULES)?);
    let apis = Validator::new(api_rules());
    tracing::info!(
        users = users.registry().len(),
        products = products.registry().len(),
        apis = apis.registry().len(),
        "rule sets loaded"
    );

    print_report(
        "valid user",
        &users.validate(
            r#"{"username":"john_doe","email":"john@example.com","age":25,"password":"SecurePass123","country":"USA"}"#,
        ),
    );
    print_report(
        "invalid user",
        &users.validate(r#"{"username":"jo","email":"invalid-email","age":15,"password":"short"}"#),
    );
    print_report(
        "invalid product",
        &products.validate(r#"{"price":-10,"stock":-5,"category":"InvalidCategory"}"#),
    );
    print_report(
        "invalid endpoint",
        &apis.validate(r#"{"endpoint":"invalid-url","methods":["GET"]}"#),
    );
    print_report(
        "empty methods",
        &apis.validate(r#"{"endpoint":"https://api.example.com","methods":[]}"#),
    );

    let malformed = users.validate(r#"{"username": }"#);
    print_report("malformed json", &malformed);
    println!("{}", serde_json::to_string_pretty(&malformed)?);

    Ok(())
}
