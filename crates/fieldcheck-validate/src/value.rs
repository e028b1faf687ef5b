//! Helpers over decoded JSON values: numeric coercion and canonical text.

use serde_json::Value;

/// Coerce a JSON value to `f64`.
///
/// Every numeric representation `serde_json` produces (unsigned, signed and
/// floating) is accepted. Strings, booleans, null, arrays and objects yield
/// `None`.
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Render a value in its canonical textual form.
///
/// Strings render without quotes and numbers render through `f64`, so `25`,
/// `25.0` and `"25"` all render as `25`.
pub fn canonical_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(_) => as_f64(value)
            .map(format_number)
            .unwrap_or_else(|| value.to_string()),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Format a bound or coerced number the way messages show it.
///
/// Uses `f64` `Display`, which never switches to exponent notation: `1e-7`
/// renders as `0.0000001` and `1e21` as `1000000000000000000000`.
pub fn format_number(n: f64) -> String {
    n.to_string()
}

/// Equality by canonical text. Allows `1` to match `"1"`.
pub fn textual_eq(a: &Value, b: &Value) -> bool {
    canonical_text(a) == canonical_text(b)
}

/// Type-preserving equality. Numbers compare by value, everything else by
/// JSON equality.
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(_), Value::Number(_)) => as_f64(a) == as_f64(b),
        _ => a == b,
    }
}

/// Render a list of values as `[a b c]`.
pub fn render_list(values: &[Value]) -> String {
    let parts: Vec<String> = values.iter().map(canonical_text).collect();
    format!("[{}]", parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_every_number_repr() {
        assert_eq!(as_f64(&json!(25)), Some(25.0));
        assert_eq!(as_f64(&json!(-5)), Some(-5.0));
        assert_eq!(as_f64(&json!(0.01)), Some(0.01));
        assert_eq!(as_f64(&json!(u64::MAX)), Some(u64::MAX as f64));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(as_f64(&json!("25")), None);
        assert_eq!(as_f64(&json!(true)), None);
        assert_eq!(as_f64(&Value::Null), None);
        assert_eq!(as_f64(&json!([1])), None);
        assert_eq!(as_f64(&json!({"a": 1})), None);
    }

    #[test]
    fn canonical_text_forms() {
        assert_eq!(canonical_text(&json!("USA")), "USA");
        assert_eq!(canonical_text(&json!(25)), "25");
        assert_eq!(canonical_text(&json!(25.0)), "25");
        assert_eq!(canonical_text(&json!(1.5)), "1.5");
        assert_eq!(canonical_text(&json!(false)), "false");
        assert_eq!(canonical_text(&Value::Null), "null");
        assert_eq!(canonical_text(&json!([1, "a"])), r#"[1,"a"]"#);
    }

    #[test]
    fn textual_eq_crosses_types() {
        assert!(textual_eq(&json!(1), &json!("1")));
        assert!(textual_eq(&json!(true), &json!("true")));
        assert!(!textual_eq(&json!(1), &json!("01")));
    }

    #[test]
    fn strict_eq_keeps_types() {
        assert!(strict_eq(&json!(1), &json!(1.0)));
        assert!(!strict_eq(&json!(1), &json!("1")));
        assert!(strict_eq(&json!("USA"), &json!("USA")));
    }

    #[test]
    fn extreme_numbers_render_in_full() {
        assert_eq!(format_number(18.0), "18");
        assert_eq!(format_number(0.01), "0.01");
        assert_eq!(format_number(1e-7), "0.0000001");
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }

    #[test]
    fn list_rendering() {
        let list = vec![json!("USA"), json!("Canada"), json!(3)];
        assert_eq!(render_list(&list), "[USA Canada 3]");
        assert_eq!(render_list(&[]), "[]");
    }
}
