//! Store-independent attribute values.
//!
//! [`AttributeValue`] is the tagged union every stored value maps to. Store
//! adapters translate it to their native format; the HTTP layer translates it
//! to and from JSON (see [`json`]).

mod error;
pub mod json;

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;

pub use error::ConversionError;
pub use json::{item_from_json, item_to_json, value_from_json, value_to_json};

/// One record: attribute name to value.
pub type Item = HashMap<String, AttributeValue>;

/// A single storable value.
///
/// Numbers are kept in their textual form. `==` compares that text exactly;
/// use [`AttributeValue::equivalent`] to compare numbers by decimal value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    S(String),
    B(Vec<u8>),
    N(String),
    Bool(bool),
    M(HashMap<String, AttributeValue>),
    L(Vec<AttributeValue>),
}

impl AttributeValue {
    /// Structural equality with numbers compared by normalised decimal value.
    pub fn equivalent(&self, other: &AttributeValue) -> bool {
        match (self, other) {
            (AttributeValue::N(a), AttributeValue::N(b)) => {
                normalize_number(a) == normalize_number(b)
            }
            (AttributeValue::M(a), AttributeValue::M(b)) => items_equivalent(a, b),
            (AttributeValue::L(a), AttributeValue::L(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equivalent(y))
            }
            (a, b) => a == b,
        }
    }
}

/// Compares two items attribute by attribute using [`AttributeValue::equivalent`].
pub fn items_equivalent(a: &Item, b: &Item) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .all(|(name, value)| b.get(name).is_some_and(|other| value.equivalent(other)))
}

/// Normalises a numeric string to its canonical decimal text.
///
/// `"1.50"`, `"1.5"` and `"15e-1"` all normalise to `"1.5"`. Text that does
/// not fit a 128-bit decimal is returned trimmed and otherwise untouched.
pub fn normalize_number(text: &str) -> String {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map(|d| d.normalize().to_string())
        .unwrap_or_else(|_| trimmed.to_string())
}
