//! Customer record type

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single customer entry held by the record store.
///
/// `city` and `company` are immutable once a record with a given `id`
/// exists. Attributes beyond the five interpreted ones are carried in
/// `extra` and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub company: String,

    /// Uninterpreted attributes
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Customer {
    /// Create a customer with no extra attributes
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        city: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            city: city.into(),
            company: company.into(),
            extra: Map::new(),
        }
    }

    /// Attach an uninterpreted attribute
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Parse a caller-supplied identifier using integer-prefix semantics.
///
/// Leading whitespace is skipped, one optional sign is accepted, and the
/// longest run of decimal digits that follows is the value. `"12abc"`
/// yields 12. Text with no leading digits, or digits that overflow `i64`,
/// yields `None`, which never matches a stored record.
pub fn parse_id(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let sign_len = match trimmed.as_bytes().first() {
        Some(b'-') | Some(b'+') => 1,
        _ => 0,
    };

    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }

    trimmed[..sign_len + digits].parse().ok()
}
