//! Store backend implementations.
//!
//! This module provides concrete implementations of
//! [`kvapi_core::storage::ItemStore`]. The in-memory store is always compiled;
//! the DynamoDB store is behind the `dynamodb` feature (enabled by default).
//!
//! Build without DynamoDB:
//! ```bash
//! cargo build -p kvapi --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbStore;
pub use inmemory::InMemoryStore;
