// Validation traits

use serde_json::Value;

/// A single, named validation check over one field's value.
///
/// Implementations hold at most one configured reference parameter
/// (e.g. a numeric bound) and no other state, so a fresh instance is
/// built per rule-token evaluation and nothing leaks across fields or
/// passes.
///
/// The value is an `Option` because a field may be absent from the
/// input record entirely; `None` is the "missing" sentinel that
/// [`RequiredRule`](crate::RequiredRule) rejects.
pub trait Rule {
    /// Apply the raw parameter from a `name:param` token.
    ///
    /// `None` must leave the rule at its default, permissive
    /// configuration.
    fn configure(&mut self, param: Option<&str>);

    /// Check the field's value against this rule.
    fn is_valid(&self, value: Option<&Value>) -> bool;

    /// Human-readable failure message for the given field name.
    fn message(&self, field_name: &str) -> String;

    /// The rule-name token this rule answers to.
    fn name(&self) -> &'static str;
}
