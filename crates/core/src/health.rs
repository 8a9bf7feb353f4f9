//! Health report assembly.
//!
//! The checks themselves perform I/O and live in the binary crate; this module
//! only folds their outcomes into a [`HealthResponse`].

use serde::{Deserialize, Serialize};

/// Base message every report starts from.
pub const API_UP: &str = "api up";

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub message: String,
    #[serde(rename = "localstackEndpoint")]
    pub localstack_endpoint: String,
}

/// Result of checking one optional dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The dependency is not configured; it counts as healthy and adds no message.
    Skipped,
    Ok,
    Unreachable,
}

/// Accumulates dependency outcomes into an overall status and message.
#[derive(Debug, Clone)]
pub struct HealthReport {
    ok: bool,
    parts: Vec<String>,
}

impl Default for HealthReport {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthReport {
    pub fn new() -> Self {
        Self {
            ok: true,
            parts: vec![API_UP.to_string()],
        }
    }

    /// Records the outcome of checking `service`.
    pub fn record(&mut self, service: &str, outcome: CheckOutcome) {
        match outcome {
            CheckOutcome::Skipped => {}
            CheckOutcome::Ok => self.parts.push(format!("{service} ok")),
            CheckOutcome::Unreachable => {
                self.ok = false;
                self.parts.push(format!("{service} unreachable"));
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn message(&self) -> String {
        self.parts.join("; ")
    }

    pub fn into_response(self, localstack_endpoint: impl Into<String>) -> HealthResponse {
        HealthResponse {
            ok: self.ok,
            message: self.message(),
            localstack_endpoint: localstack_endpoint.into(),
        }
    }
}
