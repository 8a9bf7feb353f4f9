//! DynamoDB store backend.
//!
//! Implements [`kvapi_core::storage::ItemStore`] on top of `aws-sdk-dynamodb`.
//! Point it at LocalStack by configuring an endpoint override.

mod conversions;
mod error;
mod store;

pub use store::{DynamoDbOptions, DynamoDbStore};
