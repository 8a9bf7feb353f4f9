//! Application state shared by every request handler.
//!
//! Built once at startup from [`Config`]. The optional store is constructed
//! here and handed explicitly to the services that need it.

use std::sync::Arc;
use std::time::Duration;

use kvapi_core::storage::ItemStore;

use crate::config::{Config, StoreBackend};
use crate::services::{HealthService, ItemService};
use crate::storage::InMemoryStore;

/// Shared application state.
///
/// Cloned for each request; the services inside are cheap handles.
#[derive(Clone)]
pub struct AppState {
    pub health: HealthService,
    /// `None` when the store integration is disabled; the item routes are
    /// not mounted in that case.
    pub items: Option<ItemService>,
    /// Deadline applied to every request.
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(health: HealthService, items: Option<ItemService>) -> Self {
        Self {
            health,
            items,
            request_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Creates AppState with the store selected by `config`.
    pub async fn from_config(config: &Config) -> Self {
        let health = HealthService::new(config.localstack_endpoint.clone(), config.probe_timeout);

        let state = match build_store(config).await {
            Some(store) => {
                let items = ItemService::new(store.clone(), config.table_name.clone());
                tracing::info!(
                    store = store.backend_name(),
                    table = items.table_name(),
                    "example CRUD routes enabled"
                );
                Self::new(
                    health.with_store(store, config.store_health_timeout),
                    Some(items),
                )
            }
            None => {
                tracing::info!("store integration disabled, serving health only");
                Self::new(health, None)
            }
        };

        state.with_request_timeout(config.request_timeout)
    }
}

async fn build_store(config: &Config) -> Option<Arc<dyn ItemStore>> {
    if !config.store_enabled {
        return None;
    }

    match config.store_backend {
        StoreBackend::Memory => Some(Arc::new(InMemoryStore::new())),
        #[cfg(feature = "dynamodb")]
        StoreBackend::DynamoDb => {
            use crate::storage::dynamodb::{DynamoDbOptions, DynamoDbStore};

            let options = DynamoDbOptions {
                region: config.region.clone(),
                endpoint_url: config.localstack_endpoint.clone(),
            };
            Some(Arc::new(DynamoDbStore::connect(&options).await))
        }
        #[cfg(not(feature = "dynamodb"))]
        StoreBackend::DynamoDb => {
            tracing::warn!("dynamodb backend not compiled in, store integration disabled");
            None
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;

    impl Default for AppState {
        /// Health without dependencies and an item service over an empty
        /// in-memory store.
        fn default() -> Self {
            let store: Arc<dyn ItemStore> = Arc::new(InMemoryStore::new());
            Self::new(
                HealthService::new(None, Duration::from_millis(300)),
                Some(ItemService::new(store, "example-items")),
            )
        }
    }
}
