//! Read-only view over schema-free JSON records.
//!
//! User objects and token claims come from a backend whose shape has drifted
//! over time: fields may be absent, renamed, or carry Portuguese synonyms.
//! `Record` gives defensive, never-failing access to such payloads. Missing
//! or wrongly-typed fields fall back to the caller's default.

use serde_json::Value;

/// Borrowed view of an open (schema-free) JSON record.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a>(&'a Value);

impl<'a> Record<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    /// The underlying JSON value.
    pub fn value(&self) -> &'a Value {
        self.0
    }

    /// Whether the record is a JSON object (the only shape with fields).
    pub fn is_object(&self) -> bool {
        self.0.is_object()
    }

    /// Raw field lookup; `None` for missing fields and non-object records.
    pub fn field(&self, key: &str) -> Option<&'a Value> {
        self.0.get(key)
    }

    /// First field among `keys` that is present and non-null.
    pub fn first_of(&self, keys: &[&str]) -> Option<&'a Value> {
        keys.iter()
            .filter_map(|k| self.field(k))
            .find(|v| !v.is_null())
    }

    /// String field with a default for missing/non-string values.
    /// Numbers are rendered so loosely-typed ids survive.
    pub fn str_or(&self, key: &str, default: &str) -> String {
        match self.field(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => default.to_string(),
        }
    }

    /// Numeric field with a default; numeric strings are accepted too.
    pub fn num_or(&self, key: &str, default: f64) -> f64 {
        match self.field(key) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
            _ => default,
        }
    }

    /// Boolean field with a default for anything that is not a JSON bool.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        match self.field(key) {
            Some(Value::Bool(b)) => *b,
            _ => default,
        }
    }
}
