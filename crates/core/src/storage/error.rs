use thiserror::Error;

use crate::attribute::{value_to_json, ConversionError, Item};

/// Errors that can occur during store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error("Invalid request: {0}")]
    Validation(String),
    #[error("Item not found in {table}: {key}")]
    NotFound { table: String, key: String },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Store request timed out: {0}")]
    Timeout(String),
    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl StoreError {
    /// Builds a `NotFound` error describing `key` as sorted `name=value` pairs.
    pub fn not_found(table: &str, key: &Item) -> Self {
        let mut parts: Vec<String> = key
            .iter()
            .map(|(name, value)| format!("{name}={}", value_to_json(value)))
            .collect();
        parts.sort();

        Self::NotFound {
            table: table.to_string(),
            key: parts.join(","),
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
