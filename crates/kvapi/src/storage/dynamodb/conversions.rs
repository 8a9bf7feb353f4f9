//! DynamoDB attribute conversion functions.
//!
//! Pure functions between [`kvapi_core::attribute::AttributeValue`] and the SDK's
//! `AttributeValue`. Testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue as DynamoValue;
use kvapi_core::attribute::{AttributeValue, ConversionError, Item};

/// Convert an item to its DynamoDB representation.
pub fn item_to_dynamo(item: Item) -> HashMap<String, DynamoValue> {
    item.into_iter()
        .map(|(name, value)| (name, value_to_dynamo(value)))
        .collect()
}

/// Convert a single value to its DynamoDB representation.
pub fn value_to_dynamo(value: AttributeValue) -> DynamoValue {
    match value {
        AttributeValue::S(s) => DynamoValue::S(s),
        AttributeValue::B(bytes) => DynamoValue::B(Blob::new(bytes)),
        AttributeValue::N(n) => DynamoValue::N(n),
        AttributeValue::Bool(b) => DynamoValue::Bool(b),
        AttributeValue::M(map) => DynamoValue::M(item_to_dynamo(map)),
        AttributeValue::L(values) => {
            DynamoValue::L(values.into_iter().map(value_to_dynamo).collect())
        }
    }
}

/// Convert a DynamoDB item back to an [`Item`].
///
/// Fails on the first attribute whose type has no [`AttributeValue`] variant.
pub fn item_from_dynamo(item: HashMap<String, DynamoValue>) -> Result<Item, ConversionError> {
    item.into_iter()
        .map(|(name, value)| Ok((name, value_from_dynamo(value)?)))
        .collect()
}

/// Convert a single DynamoDB value back to an [`AttributeValue`].
pub fn value_from_dynamo(value: DynamoValue) -> Result<AttributeValue, ConversionError> {
    match value {
        DynamoValue::S(s) => Ok(AttributeValue::S(s)),
        DynamoValue::B(blob) => Ok(AttributeValue::B(blob.into_inner())),
        DynamoValue::N(n) => Ok(AttributeValue::N(n)),
        DynamoValue::Bool(b) => Ok(AttributeValue::Bool(b)),
        DynamoValue::M(map) => item_from_dynamo(map).map(AttributeValue::M),
        DynamoValue::L(values) => values
            .into_iter()
            .map(value_from_dynamo)
            .collect::<Result<Vec<_>, _>>()
            .map(AttributeValue::L),
        DynamoValue::Null(_) => Err(ConversionError::unsupported("NULL")),
        DynamoValue::Ss(_) => Err(ConversionError::unsupported("SS")),
        DynamoValue::Ns(_) => Err(ConversionError::unsupported("NS")),
        DynamoValue::Bs(_) => Err(ConversionError::unsupported("BS")),
        other => Err(ConversionError::unsupported(format!("{other:?}"))),
    }
}
