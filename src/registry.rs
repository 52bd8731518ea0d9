// Rule registry

use crate::errors::{Result, RuleSetError};
use crate::traits::Rule;
use crate::validators::{EmailRule, MaxRule, MinRule, RequiredRule};
use std::collections::HashMap;

pub const RULE_REQUIRED: &str = "required";
pub const RULE_MIN: &str = "min";
pub const RULE_MAX: &str = "max";
pub const RULE_EMAIL: &str = "email";

type RuleFactory = Box<dyn Fn() -> Box<dyn Rule> + Send + Sync>;

/// Maps rule-name tokens to factories producing fresh rule instances.
///
/// Each resolution builds a new instance, so configured bounds never
/// leak between rule-token evaluations. New variants are added with
/// [`register`](Self::register); the validator's orchestration never
/// needs to change.
pub struct RuleRegistry {
    factories: HashMap<String, RuleFactory>,
}

impl RuleRegistry {
    /// Create a registry with the built-in rules
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(RULE_REQUIRED, || Box::new(RequiredRule));
        registry.register(RULE_MIN, || Box::new(MinRule::default()));
        registry.register(RULE_MAX, || Box::new(MaxRule::default()));
        registry.register(RULE_EMAIL, || Box::new(EmailRule));
        registry
    }

    /// Create a registry with no rules at all
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a factory for a rule-name token, replacing any previous
    /// registration under the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn Rule> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Build a fresh rule instance for a name token.
    pub fn resolve(&self, name: &str) -> Result<Box<dyn Rule>> {
        match self.factories.get(name) {
            Some(factory) => Ok(factory()),
            None => Err(RuleSetError::UnknownRule(name.to_string())),
        }
    }

    /// Check whether a rule name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
