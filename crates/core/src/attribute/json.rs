//! JSON ↔ [`AttributeValue`] mapping.
//!
//! Pure functions used at the HTTP boundary. JSON `null` has no attribute
//! form and is rejected; binary values have no JSON form and are emitted as
//! standard base64 strings.
//!
//! Numbers travel as their literal text in both directions (serde_json is
//! built with `arbitrary_precision`), so no value passes through `f64`.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{Map, Number, Value};

use super::{AttributeValue, ConversionError, Item};

/// Converts a JSON object into an [`Item`].
///
/// Fails without producing a partial item if any nested value is unsupported.
pub fn item_from_json(value: &Value) -> Result<Item, ConversionError> {
    let Value::Object(object) = value else {
        return Err(ConversionError::NotAnObject {
            kind: json_kind(value),
        });
    };

    object
        .iter()
        .map(|(name, value)| Ok((name.clone(), value_from_json(value)?)))
        .collect()
}

/// Converts a single JSON value into an [`AttributeValue`].
pub fn value_from_json(value: &Value) -> Result<AttributeValue, ConversionError> {
    match value {
        Value::Null => Err(ConversionError::unsupported("null")),
        Value::Bool(b) => Ok(AttributeValue::Bool(*b)),
        Value::Number(n) => Ok(AttributeValue::N(n.to_string())),
        Value::String(s) => Ok(AttributeValue::S(s.clone())),
        Value::Array(values) => values
            .iter()
            .map(value_from_json)
            .collect::<Result<Vec<_>, _>>()
            .map(AttributeValue::L),
        Value::Object(_) => item_from_json(value).map(AttributeValue::M),
    }
}

/// Converts an [`Item`] into a JSON object.
pub fn item_to_json(item: &Item) -> Value {
    Value::Object(
        item.iter()
            .map(|(name, value)| (name.clone(), value_to_json(value)))
            .collect::<Map<_, _>>(),
    )
}

/// Converts an [`AttributeValue`] into JSON.
///
/// Numbers are written verbatim; text that is not a JSON number literal (for
/// example `+5`) is emitted as a string.
pub fn value_to_json(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::B(bytes) => Value::String(STANDARD.encode(bytes)),
        AttributeValue::N(text) => text
            .parse::<Number>()
            .map(Value::Number)
            .unwrap_or_else(|_| Value::String(text.clone())),
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::M(map) => item_to_json(map),
        AttributeValue::L(values) => Value::Array(values.iter().map(value_to_json).collect()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
