//! Tracing subscriber setup shared by the server and Lambda entrypoints.

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise dev/local environments get debug-level
/// human-readable output and everything else gets info-level JSON lines.
pub fn init(dev: bool) -> Result<()> {
    let default_filter = if dev {
        "kvapi=debug,tower_http=debug"
    } else {
        "kvapi=info,tower_http=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let registry = tracing_subscriber::registry().with(filter);
    let result = if dev {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    };

    result.context("failed to initialize logger")
}
