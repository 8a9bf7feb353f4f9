//! API scaffold: a health check plus an optional item resource backed by a
//! key-value store, served over HTTP or from AWS Lambda.

pub mod app;
pub mod config;
pub mod handlers;
pub mod services;
pub mod state;
pub mod storage;
pub mod telemetry;
