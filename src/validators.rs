// Built-in validation rules

use crate::registry::{RULE_EMAIL, RULE_MAX, RULE_MIN, RULE_REQUIRED};
use crate::traits::Rule;
use serde_json::Value;

/// Stringified form of a value, used for presence and email checks.
fn stringified(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Numeric coercion for non-string values: null coerces to zero,
/// booleans to 0/1, anything non-numeric to NaN (which fails every
/// bound comparison).
fn numeric(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Null => 0.0,
        _ => f64::NAN,
    }
}

/// Field must be present and non-empty.
///
/// Rejects a missing key, JSON null, and the empty string. Takes no
/// parameter.
#[derive(Debug, Default)]
pub struct RequiredRule;

impl Rule for RequiredRule {
    fn configure(&mut self, _param: Option<&str>) {}

    fn is_valid(&self, value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => false,
            Some(v) => !stringified(v).is_empty(),
        }
    }

    fn message(&self, field_name: &str) -> String {
        format!("The field {field_name} is required")
    }

    fn name(&self) -> &'static str {
        RULE_REQUIRED
    }
}

/// Lower-bound rule: string length or numeric value must be at least
/// the configured bound.
///
/// The bound is kept as the raw token parameter and coerced to a number
/// at comparison time; unconfigured it is negative infinity, so the
/// rule passes everything. An unparsable bound compares as NaN and
/// fails every value.
#[derive(Debug, Default)]
pub struct MinRule {
    bound: Option<String>,
}

impl MinRule {
    fn limit(&self) -> f64 {
        match &self.bound {
            Some(raw) => raw.parse().unwrap_or(f64::NAN),
            None => f64::NEG_INFINITY,
        }
    }
}

impl Rule for MinRule {
    fn configure(&mut self, param: Option<&str>) {
        if let Some(param) = param {
            self.bound = Some(param.to_string());
        }
    }

    fn is_valid(&self, value: Option<&Value>) -> bool {
        match value {
            // absence is required's concern, not a bound violation
            None => true,
            Some(Value::String(s)) => s.len() as f64 >= self.limit(),
            Some(other) => numeric(other) >= self.limit(),
        }
    }

    fn message(&self, field_name: &str) -> String {
        let bound = self.bound.as_deref().unwrap_or("-inf");
        format!("The field {field_name} must have at least {bound} chars")
    }

    fn name(&self) -> &'static str {
        RULE_MIN
    }
}

/// Upper-bound counterpart of [`MinRule`]; unconfigured it is positive
/// infinity.
#[derive(Debug, Default)]
pub struct MaxRule {
    bound: Option<String>,
}

impl MaxRule {
    fn limit(&self) -> f64 {
        match &self.bound {
            Some(raw) => raw.parse().unwrap_or(f64::NAN),
            None => f64::INFINITY,
        }
    }
}

impl Rule for MaxRule {
    fn configure(&mut self, param: Option<&str>) {
        if let Some(param) = param {
            self.bound = Some(param.to_string());
        }
    }

    fn is_valid(&self, value: Option<&Value>) -> bool {
        match value {
            None => true,
            Some(Value::String(s)) => s.len() as f64 <= self.limit(),
            Some(other) => numeric(other) <= self.limit(),
        }
    }

    fn message(&self, field_name: &str) -> String {
        let bound = self.bound.as_deref().unwrap_or("inf");
        format!("The field {field_name} must have up to {bound} chars")
    }

    fn name(&self) -> &'static str {
        RULE_MAX
    }
}

/// Structural email check: `local@site.term` with all three parts
/// non-empty.
///
/// Only the segments up to the second `@` (and second `.` within the
/// domain) are inspected; anything beyond them is ignored. This is a
/// deliberately weak shape check, not RFC 5321 parsing.
#[derive(Debug, Default)]
pub struct EmailRule;

impl Rule for EmailRule {
    fn configure(&mut self, _param: Option<&str>) {}

    fn is_valid(&self, value: Option<&Value>) -> bool {
        let text = match value {
            Some(v) => stringified(v),
            None => return false,
        };

        let mut parts = text.split('@');
        let local = parts.next().unwrap_or_default();
        let domain = match parts.next() {
            Some(domain) => domain,
            None => return false,
        };
        if local.is_empty() || domain.is_empty() {
            return false;
        }

        let mut segments = domain.split('.');
        let site = segments.next().unwrap_or_default();
        let term = match segments.next() {
            Some(term) => term,
            None => return false,
        };
        !site.is_empty() && !term.is_empty()
    }

    fn message(&self, field_name: &str) -> String {
        format!("The field {field_name} must be a valid email address")
    }

    fn name(&self) -> &'static str {
        RULE_EMAIL
    }
}
