//! Health checker.
//!
//! Folds the status of every configured dependency into one
//! [`HealthResponse`]. Checking never fails: errors are logged and turned into
//! an "unreachable" entry in the message.

use std::sync::Arc;
use std::time::Duration;

use kvapi_core::health::{CheckOutcome, HealthReport, HealthResponse};
use kvapi_core::storage::ItemStore;

/// Name of the auxiliary endpoint in health messages.
const LOCALSTACK: &str = "localstack";
const LOCALSTACK_HEALTH_PATH: &str = "/_localstack/health";

/// Aggregates liveness of the API, the auxiliary endpoint and the store.
#[derive(Clone)]
pub struct HealthService {
    localstack_endpoint: Option<String>,
    probe_timeout: Duration,
    http: reqwest::Client,
    store: Option<Arc<dyn ItemStore>>,
    store_timeout: Duration,
}

impl HealthService {
    /// Creates a checker that probes `localstack_endpoint`, if any, with the given timeout.
    pub fn new(localstack_endpoint: Option<String>, probe_timeout: Duration) -> Self {
        Self {
            localstack_endpoint,
            probe_timeout,
            http: reqwest::Client::new(),
            store: None,
            store_timeout: Duration::from_secs(5),
        }
    }

    /// Also checks `store`, abandoning its health call after `timeout`.
    pub fn with_store(mut self, store: Arc<dyn ItemStore>, timeout: Duration) -> Self {
        self.store = Some(store);
        self.store_timeout = timeout;
        self
    }

    pub async fn check(&self) -> HealthResponse {
        let (localstack, store) = tokio::join!(self.check_localstack(), self.check_store());

        let mut report = HealthReport::new();
        report.record(LOCALSTACK, localstack);
        if let Some((name, outcome)) = store {
            report.record(name, outcome);
        }

        report.into_response(self.localstack_endpoint.clone().unwrap_or_default())
    }

    async fn check_localstack(&self) -> CheckOutcome {
        let Some(endpoint) = &self.localstack_endpoint else {
            return CheckOutcome::Skipped;
        };
        let url = format!("{endpoint}{LOCALSTACK_HEALTH_PATH}");

        match self
            .http
            .get(&url)
            .timeout(self.probe_timeout)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => CheckOutcome::Ok,
            Ok(response) => {
                tracing::warn!(%url, status = %response.status(), "localstack health failed");
                CheckOutcome::Unreachable
            }
            Err(err) => {
                tracing::warn!(%url, error = %err, "localstack health failed");
                CheckOutcome::Unreachable
            }
        }
    }

    async fn check_store(&self) -> Option<(&'static str, CheckOutcome)> {
        let store = self.store.as_ref()?;
        let name = store.backend_name();

        let outcome = match tokio::time::timeout(self.store_timeout, store.health()).await {
            Ok(Ok(())) => CheckOutcome::Ok,
            Ok(Err(err)) => {
                tracing::error!(store = name, error = %err, "store health failed");
                CheckOutcome::Unreachable
            }
            Err(_) => {
                tracing::error!(
                    store = name,
                    timeout_ms = self.store_timeout.as_millis() as u64,
                    "store health timed out"
                );
                CheckOutcome::Unreachable
            }
        };

        Some((name, outcome))
    }
}
