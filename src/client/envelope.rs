//! Response envelope handling.
//!
//! Every MealDB response wraps its payload in a single top-level key, `meals`
//! or `categories`. A `null` (or absent) value there means nothing matched.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::error::{MealDbError, Result};

/// The top-level key a response carries its payload under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    Meals,
    Categories,
}

impl Envelope {
    pub fn key(self) -> &'static str {
        match self {
            Envelope::Meals => "meals",
            Envelope::Categories => "categories",
        }
    }
}

/// Decode a raw response body, unwrapping the payload held under `envelope`.
///
/// An empty body or a missing/`null` envelope value yields
/// [`MealDbError::NoResults`]. Malformed JSON yields [`MealDbError::Json`]
/// carrying the parser's message.
///
/// A whitespace-only body also counts as empty. This departs from a strict
/// zero-length check, which would hand such a body to the parser and report
/// its error instead.
pub fn decode<T: DeserializeOwned>(body: &str, envelope: Envelope) -> Result<T> {
    if body.trim().is_empty() {
        return Err(MealDbError::NoResults);
    }

    let mut json: Value = serde_json::from_str(body)?;

    let payload = match json.get_mut(envelope.key()).map(Value::take) {
        None | Some(Value::Null) => return Err(MealDbError::NoResults),
        Some(payload) => payload,
    };

    Ok(serde_json::from_value(payload)?)
}
