//! # fieldcheck validation
//!
//! Rule-based validation of JSON documents. A [`RuleRegistry`] holds one
//! [`FieldRule`] per top-level field; the engine checks a document against
//! every rule and returns a [`ValidationReport`] with the violations in rule
//! order.
//!
//! ## Example
//!
//! ```rust
//! use fieldcheck_validate::prelude::*;
//!
//! let mut registry = RuleRegistry::new();
//! registry.add_rule(
//!     FieldRule::string("username")
//!         .required()
//!         .length(3, 20)
//!         .pattern("^[a-zA-Z0-9_]+$"),
//! );
//! registry.add_rule(FieldRule::integer("age").required().range(18.0, 120.0));
//!
//! let report = validate(&registry, r#"{"username": "jo", "age": 15}"#);
//! assert!(!report.is_valid());
//! assert_eq!(
//!     report.messages(),
//!     vec![
//!         "Field 'username' must have at least 3 characters",
//!         "Field 'age' must be >= 18",
//!     ]
//! );
//! ```
//!
//! ## Rules
//!
//! - `string` - `min_length`, `max_length`, `pattern`
//! - `number` / `integer` - `min`, `max`; integers also reject fractions
//! - `boolean` - type only
//! - `array` - type only, elements are not inspected
//! - any kind - `required`, `one_of` (enum)
//!
//! ## Error Format
//!
//! A [`ValidationReport`] serializes as:
//!
//! ```json
//! {
//!   "error": {
//!     "type": "validation_error",
//!     "message": "Validation failed",
//!     "fields": [
//!       {"field": "age", "code": "min", "message": "Field 'age' must be >= 18"}
//!     ]
//!   }
//! }
//! ```

mod engine;
mod error;
mod registry;
mod rule;
pub mod value;


pub use engine::{validate, validate_document, validate_value, Validator};
pub use error::{RuleSetError, ValidationReport, Violation, ViolationCode};
pub use registry::RuleRegistry;
pub use rule::{EnumMatch, FieldKind, FieldRule, Pattern};

/// Prelude module for validation
pub mod prelude {
    pub use crate::engine::{validate, validate_document, validate_value, Validator};
    pub use crate::error::{RuleSetError, ValidationReport, Violation, ViolationCode};
    pub use crate::registry::RuleRegistry;
    pub use crate::rule::{EnumMatch, FieldKind, FieldRule};
}
