//! Core types for the kvapi scaffold.
//!
//! Everything in this crate is free of I/O: the attribute-value model and its
//! JSON mapping, the store contract and its error type, and the pure pieces of
//! the health report. The binary crate wires these to axum, DynamoDB and the
//! outbound probe.

pub mod attribute;
pub mod health;
pub mod storage;
