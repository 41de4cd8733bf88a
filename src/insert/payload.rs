//! Candidate record payload
//!
//! The five interpreted fields are held as raw JSON so completeness can be
//! judged on what the caller actually sent, not on what deserialized.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::{parse_id, Customer};

/// A new-record payload as submitted by a caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsertPayload {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub first_name: Value,
    #[serde(default)]
    pub last_name: Value,
    #[serde(default)]
    pub city: Value,
    #[serde(default)]
    pub company: Value,

    /// Uninterpreted attributes, kept on accept
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InsertPayload {
    /// Payload with all five fields set from text
    pub fn new(
        id: impl Into<Value>,
        first_name: &str,
        last_name: &str,
        city: &str,
        company: &str,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: Value::from(first_name),
            last_name: Value::from(last_name),
            city: Value::from(city),
            company: Value::from(company),
            extra: Map::new(),
        }
    }

    /// True when every required field is present and truthy.
    ///
    /// Null, `false`, `0` and `""` are falsy; every other value, including
    /// non-text values, objects and arrays, passes and is left for the
    /// later rules to judge.
    pub fn is_complete(&self) -> bool {
        [
            &self.id,
            &self.first_name,
            &self.last_name,
            &self.city,
            &self.company,
        ]
        .into_iter()
        .all(is_truthy)
    }

    /// Integer id as used for store lookups.
    ///
    /// Numbers are truncated toward zero. Any other value is rendered to
    /// text and parsed as an integer prefix, so `"12ab"` and `["7"]` yield
    /// an id while `true` or an object do not.
    pub fn parsed_id(&self) -> Option<i64> {
        match &self.id {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                    .map(|f| f.trunc() as i64)
            }),
            other => parse_id(&display_text(other)),
        }
    }

    /// Payload city, if it is text
    pub fn city(&self) -> Option<&str> {
        self.city.as_str()
    }

    /// Payload company, if it is text
    pub fn company(&self) -> Option<&str> {
        self.company.as_str()
    }

    /// Convert into a stored record.
    ///
    /// Returns `None` unless the payload is complete and its id parses.
    pub fn into_customer(self) -> Option<Customer> {
        if !self.is_complete() {
            return None;
        }
        let id = self.parsed_id()?;

        Some(Customer {
            id,
            first_name: display_text(&self.first_name),
            last_name: display_text(&self.last_name),
            city: display_text(&self.city),
            company: display_text(&self.company),
            extra: self.extra,
        })
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of a payload value: strings as-is, arrays joined with
/// commas, objects as an opaque marker that never parses as an id
fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}
