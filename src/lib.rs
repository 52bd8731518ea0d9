//! Declarative, rule-based field validation
//!
//! An input record (a decoded JSON request body) is checked against an
//! ordered list of field specifications. Each specification names the
//! rule tokens to apply (`"required"`, `"min:3"`, `"max:200"`,
//! `"email"`), every failing rule records a human-readable message, and
//! the caller turns the accumulated list into a 400-class response
//! body.
//!
//! # Examples
//!
//! ## Validating a request body
//!
//! ```
//! use fieldcheck::{FieldSpec, Validator};
//! use serde_json::json;
//!
//! let body = json!({ "name": "Jo", "email": "user@example.com" });
//!
//! let mut validator = Validator::default()
//!     .with_data(body.as_object().unwrap().clone())
//!     .with_rules(vec![
//!         FieldSpec::new("name", &["required", "min:3", "max:200"]),
//!         FieldSpec::new("email", &["required", "email"]),
//!     ]);
//!
//! assert!(validator.fails().unwrap());
//! let errors = validator.errors();
//! assert_eq!(errors[0].field, "name");
//! assert_eq!(errors[0].error, "The field name must have at least 3 chars");
//! ```
//!
//! ## Partial updates
//!
//! Optional fields absent from the input are skipped entirely, so an
//! update payload is only checked for the fields it actually carries:
//!
//! ```
//! use fieldcheck::{FieldSpec, Validator};
//! use serde_json::Map;
//!
//! let mut validator = Validator::default()
//!     .with_data(Map::new())
//!     .with_rules(vec![FieldSpec::new("city", &["min:3", "max:200"])]);
//!
//! assert!(!validator.fails().unwrap());
//! assert!(validator.errors().is_empty());
//! ```
//!
//! ## Custom rules
//!
//! New rule variants are registered by name; the orchestration never
//! changes:
//!
//! ```
//! use fieldcheck::{FieldSpec, Rule, RuleRegistry, Validator};
//! use serde_json::{Value, json};
//!
//! struct StateCode;
//!
//! impl Rule for StateCode {
//!     fn configure(&mut self, _param: Option<&str>) {}
//!
//!     fn is_valid(&self, value: Option<&Value>) -> bool {
//!         matches!(value, Some(Value::String(s)) if s.len() == 2)
//!     }
//!
//!     fn message(&self, field_name: &str) -> String {
//!         format!("The field {field_name} must be a two-letter state code")
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "state_code"
//!     }
//! }
//!
//! let mut registry = RuleRegistry::new();
//! registry.register("state_code", || Box::new(StateCode));
//!
//! let body = json!({ "state": "XYZ" });
//! let mut validator = Validator::default()
//!     .with_registry(registry)
//!     .with_data(body.as_object().unwrap().clone())
//!     .with_rules(vec![FieldSpec::new("state", &["required", "state_code"])]);
//!
//! assert!(validator.fails().unwrap());
//! ```

mod errors;
mod registry;
mod rules;
mod traits;
mod validators;

pub use errors::{Result, RuleSetError, ValidationError, ValidationErrors};
pub use registry::{RULE_EMAIL, RULE_MAX, RULE_MIN, RULE_REQUIRED, RuleRegistry};
pub use rules::{FieldSpec, Validator};
pub use traits::Rule;
pub use validators::{EmailRule, MaxRule, MinRule, RequiredRule};
