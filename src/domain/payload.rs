//! Classification of `api_data` payloads.
//!
//! The payload attached to an `api_data` frame is untyped JSON. It is
//! classified exactly once, at the decode boundary: an array becomes
//! [`ApiPayload::Items`] holding each element's plain string form, and
//! anything else becomes [`ApiPayload::UnexpectedShape`] carrying the
//! received JSON type name. Downstream code never re-inspects raw JSON.

use serde_json::Value;

/// Result of classifying an `api_data` payload.
///
/// An unexpected shape is a presentation error, not a fault: the view
/// reports it inline and the client keeps processing subsequent events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiPayload {
    /// Ordered list of displayable items.
    Items(Vec<String>),

    /// Payload was not an array.
    UnexpectedShape {
        /// JSON type name of the received value (`"object"`, `"number"`,
        /// `"string"`, `"boolean"`, `"null"`).
        type_name: String,
    },
}

impl ApiPayload {
    /// Classifies a raw payload value.
    ///
    /// Array elements are converted in order via [`display_string`]; no
    /// filtering, sorting, deduplication, or length limit is applied.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self::Items(items.iter().map(display_string).collect()),
            other => Self::UnexpectedShape {
                type_name: json_type_name(other).to_string(),
            },
        }
    }
}

/// Plain string form of a JSON value.
///
/// Strings render bare, without surrounding quotes; every other value
/// renders as its JSON text.
#[must_use]
pub fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JSON type name used in unexpected-shape reports.
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
