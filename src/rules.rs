// Field specifications and the validator

use crate::errors::{Result, ValidationError};
use crate::registry::{RULE_REQUIRED, RuleRegistry};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Binds a field name to the ordered list of rule tokens to apply.
///
/// Tokens are `"name"` or `"name:param"`; declaration order determines
/// the order failures are reported in. The serialized form uses the
/// same shape callers declare in JSON (`fieldName` / `rules`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub field_name: String,
    pub rules: Vec<String>,
}

impl FieldSpec {
    /// Create a field specification from rule tokens
    pub fn new(field_name: impl Into<String>, rules: &[&str]) -> Self {
        Self {
            field_name: field_name.into(),
            rules: rules.iter().map(|rule| rule.to_string()).collect(),
        }
    }
}

/// Evaluates field specifications against an input record and
/// accumulates every failure.
///
/// A field whose rule list has no `required` token and whose key is
/// absent from the record is skipped entirely, so partial-update
/// payloads are not penalized for leaving optional fields out. A
/// `required` field is always evaluated; its absence is exactly the
/// failure [`RequiredRule`](crate::RequiredRule) reports.
///
/// The error accumulator is reset at the start of every
/// [`fails`](Self::fails) call, so one instance serves one logical
/// validation at a time.
pub struct Validator {
    data: Map<String, Value>,
    fields: Vec<FieldSpec>,
    registry: RuleRegistry,
    errors: Vec<ValidationError>,
}

impl Validator {
    /// Create a validator over an input record and field specifications
    pub fn new(data: Map<String, Value>, fields: Vec<FieldSpec>) -> Self {
        Self {
            data,
            fields,
            registry: RuleRegistry::new(),
            errors: Vec::new(),
        }
    }

    /// Replace the input record
    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    /// Replace the field specifications
    pub fn with_rules(mut self, fields: Vec<FieldSpec>) -> Self {
        self.fields = fields;
        self
    }

    /// Replace the rule registry, e.g. to add custom rule variants
    pub fn with_registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Run a full evaluation pass and report whether anything failed.
    ///
    /// Every failing rule on every field is collected; evaluation never
    /// stops at the first failure. An unrecognized rule name aborts
    /// with [`RuleSetError::UnknownRule`](crate::RuleSetError) instead
    /// of being recorded as a validation failure.
    pub fn fails(&mut self) -> Result<bool> {
        self.errors.clear();

        if let Err(err) = self.run_pass() {
            // a fatal abort must not leave a half-built error list behind
            self.errors.clear();
            return Err(err);
        }

        debug!(
            fields = self.fields.len(),
            errors = self.errors.len(),
            "validation pass finished"
        );
        Ok(!self.errors.is_empty())
    }

    fn run_pass(&mut self) -> Result<()> {
        for field in &self.fields {
            let value = self.data.get(&field.field_name);

            let has_required = field
                .rules
                .iter()
                .any(|token| split_token(token).0 == RULE_REQUIRED);
            if value.is_none() && !has_required {
                // optional field left out of the input: skip all its rules
                continue;
            }

            for token in &field.rules {
                let (name, param) = split_token(token);
                let mut rule = self.registry.resolve(name)?;
                rule.configure(param);

                if !rule.is_valid(value) {
                    trace!(field = %field.field_name, rule = name, "rule failed");
                    self.errors.push(ValidationError::new(
                        &field.field_name,
                        rule.message(&field.field_name),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Owned copy of the last evaluation's failures, in field order
    /// then rule order within each field.
    pub fn errors(&self) -> Vec<ValidationError> {
        self.errors.clone()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(Map::new(), Vec::new())
    }
}

/// Split a rule token into its name and optional raw parameter.
fn split_token(token: &str) -> (&str, Option<&str>) {
    match token.split_once(':') {
        Some((name, param)) => (name, Some(param)),
        None => (token, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RuleSetError;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().expect("test record").clone()
    }

    #[test]
    fn test_single_required_rule() {
        let mut validator = Validator::new(
            record(json!({ "value": "" })),
            vec![FieldSpec::new("value", &["required"])],
        );

        assert!(validator.fails().unwrap());
        let errors = validator.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "value");
        assert_eq!(errors[0].error, "The field value is required");
    }

    #[test]
    fn test_single_email_rule() {
        let mut validator = Validator::new(
            record(json!({ "value": "" })),
            vec![FieldSpec::new("value", &["email"])],
        );

        assert!(validator.fails().unwrap());
        let errors = validator.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].error,
            "The field value must be a valid email address"
        );
    }

    #[test]
    fn test_single_min_rule_receives_its_parameter() {
        let mut validator = Validator::new(
            record(json!({ "value": "" })),
            vec![FieldSpec::new("value", &["min:10"])],
        );

        assert!(validator.fails().unwrap());
        let errors = validator.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].error,
            "The field value must have at least 10 chars"
        );
    }

    #[test]
    fn test_single_max_rule_receives_its_parameter() {
        let mut validator = Validator::new(
            record(json!({ "value": "#".repeat(11) })),
            vec![FieldSpec::new("value", &["max:10"])],
        );

        assert!(validator.fails().unwrap());
        let errors = validator.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error, "The field value must have up to 10 chars");
    }

    #[test]
    fn test_combined_rules_collect_all_errors_in_order() {
        // value is 23 chars and not an email: max and email fail,
        // min and required pass
        let mut validator = Validator::new(
            record(json!({ "value": "some-awesome-real-value" })),
            vec![FieldSpec::new(
                "value",
                &["max:10", "min:5", "required", "email"],
            )],
        );

        assert!(validator.fails().unwrap());
        let errors = validator.errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "value");
        assert_eq!(errors[0].error, "The field value must have up to 10 chars");
        assert_eq!(errors[1].field, "value");
        assert_eq!(
            errors[1].error,
            "The field value must be a valid email address"
        );
    }

    #[test]
    fn test_errors_follow_declaration_order_when_every_rule_fails() {
        use crate::traits::Rule;

        struct NeverValid(&'static str);

        impl Rule for NeverValid {
            fn configure(&mut self, _param: Option<&str>) {}

            fn is_valid(&self, _value: Option<&Value>) -> bool {
                false
            }

            fn message(&self, field_name: &str) -> String {
                format!("{} rejected {field_name}", self.0)
            }

            fn name(&self) -> &'static str {
                self.0
            }
        }

        let mut registry = RuleRegistry::empty();
        for name in ["max", "min", "required", "email"] {
            registry.register(name, move || Box::new(NeverValid(name)));
        }

        let mut validator = Validator::new(
            record(json!({ "value": "some-awesome-real-value" })),
            vec![FieldSpec::new(
                "value",
                &["max:10", "min:5", "required", "email"],
            )],
        )
        .with_registry(registry);

        assert!(validator.fails().unwrap());
        let errors = validator.errors();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0].error, "max rejected value");
        assert_eq!(errors[1].error, "min rejected value");
        assert_eq!(errors[2].error, "required rejected value");
        assert_eq!(errors[3].error, "email rejected value");
    }

    #[test]
    fn test_passing_rules_record_nothing() {
        let mut validator = Validator::new(
            record(json!({ "value": "real@email.com" })),
            vec![FieldSpec::new(
                "value",
                &["max:100", "min:5", "required", "email"],
            )],
        );

        assert!(!validator.fails().unwrap());
        assert!(validator.errors().is_empty());
    }

    #[test]
    fn test_optional_absent_field_is_skipped() {
        let mut validator = Validator::new(
            Map::new(),
            vec![FieldSpec::new("x", &["min:3"])],
        );

        assert!(!validator.fails().unwrap());
        assert!(validator.errors().is_empty());
    }

    #[test]
    fn test_required_field_is_checked_even_when_absent() {
        let mut validator = Validator::new(
            Map::new(),
            vec![FieldSpec::new("x", &["required", "min:3"])],
        );

        assert!(validator.fails().unwrap());
        let errors = validator.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "x");
        assert_eq!(errors[0].error, "The field x is required");
    }

    #[test]
    fn test_unknown_rule_name_aborts_the_pass() {
        let mut validator = Validator::new(
            record(json!({ "value": "x" })),
            vec![FieldSpec::new("value", &["uuid"])],
        );

        let err = validator.fails().unwrap_err();
        assert_eq!(err, RuleSetError::UnknownRule("uuid".to_string()));
        assert!(validator.errors().is_empty());
    }

    #[test]
    fn test_fatal_abort_discards_earlier_failures() {
        // name fails required before the unknown token is reached
        let mut validator = Validator::new(
            record(json!({ "name": "" })),
            vec![
                FieldSpec::new("name", &["required"]),
                FieldSpec::new("role", &["one_of"]),
            ],
        );

        let err = validator.fails().unwrap_err();
        assert_eq!(err, RuleSetError::UnknownRule("one_of".to_string()));
        assert!(validator.errors().is_empty());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let mut validator = Validator::new(
            record(json!({ "value": "tiny" })),
            vec![FieldSpec::new("value", &["required", "min:10"])],
        );

        let first = validator.fails().unwrap();
        let first_errors = validator.errors();
        let second = validator.fails().unwrap();
        let second_errors = validator.errors();

        assert_eq!(first, second);
        assert_eq!(first_errors, second_errors);
        assert_eq!(first_errors.len(), 1);
    }

    #[test]
    fn test_errors_returns_a_defensive_copy() {
        let mut validator = Validator::new(
            record(json!({ "value": "" })),
            vec![FieldSpec::new("value", &["required"])],
        );

        assert!(validator.fails().unwrap());
        let mut copy = validator.errors();
        copy.clear();
        assert_eq!(validator.errors().len(), 1);
    }

    #[test]
    fn test_with_data_and_with_rules_reconfigure() {
        let mut validator = Validator::default()
            .with_data(record(json!({ "email": "nope" })))
            .with_rules(vec![FieldSpec::new("email", &["required", "email"])]);

        assert!(validator.fails().unwrap());

        let mut validator = validator
            .with_data(record(json!({ "email": "user@example.com" })));
        assert!(!validator.fails().unwrap());
    }

    #[test]
    fn test_field_spec_json_round_trip() {
        let spec = FieldSpec::new("postalCode", &["required", "min:8", "max:8"]);

        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            json,
            json!({ "fieldName": "postalCode", "rules": ["required", "min:8", "max:8"] })
        );

        let parsed: FieldSpec = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, spec);
    }
}
