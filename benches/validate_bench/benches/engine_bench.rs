//! Validation engine benchmarks
//!
//! Measures parse-and-validate cost for small and wide documents.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fieldcheck_validate::{validate, validate_value, FieldRule, RuleRegistry};
use serde_json::{Map, Value};

fn user_rules() -> RuleRegistry {
    RuleRegistry::new()
        .with_rule(
            FieldRule::string("username")
                .required()
                .length(3, 20)
                .pattern("^[a-zA-Z0-9_]+$"),
        )
        .with_rule(
            FieldRule::string("email")
                .required()
                .pattern(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"),
        )
        .with_rule(FieldRule::integer("age").required().range(18.0, 120.0))
        .with_rule(FieldRule::string("password").required().length(8, 100))
        .with_rule(FieldRule::string("country").one_of(["USA", "Canada", "Mexico", "UK"]))
}

/// Benchmark a typical signup document
fn bench_user_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("user_document");
    let registry = user_rules();

    let valid = r#"{"username":"john_doe","email":"john@example.com","age":25,"password":"SecurePass123","country":"USA"}"#;
    let invalid = r#"{"username":"jo","email":"invalid-email","age":15,"password":"short"}"#;

    group.bench_function("valid", |b| {
        b.iter(|| validate(black_box(&registry), black_box(valid)))
    });

    group.bench_function("invalid", |b| {
        b.iter(|| validate(black_box(&registry), black_box(invalid)))
    });

    group.bench_function("malformed", |b| {
        b.iter(|| validate(black_box(&registry), black_box(r#"{"username": }"#)))
    });

    group.finish();
}

/// Benchmark rule sets of growing width against pre-parsed documents
fn bench_wide_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_registry");

    for width in [10usize, 100, 1000] {
        let registry: RuleRegistry = (0..width)
            .map(|i| FieldRule::integer(format!("f{i}")).required().range(0.0, 1000.0))
            .collect();
        let document: Map<String, Value> = (0..width)
            .map(|i| (format!("f{i}"), Value::from(i as u64)))
            .collect();
        let document = Value::Object(document);

        group.bench_with_input(BenchmarkId::from_parameter(width), &document, |b, doc| {
            b.iter(|| validate_value(black_box(&registry), black_box(doc)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_user_document, bench_wide_registry);
criterion_main!(benches);
