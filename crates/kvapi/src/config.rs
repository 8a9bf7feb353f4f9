use std::{env, time::Duration};

use thiserror::Error;

const DEFAULT_LOCALSTACK_ENDPOINT: &str = "http://localhost:4566";
const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_TABLE: &str = "example-items";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;
const DEFAULT_PROBE_TIMEOUT_MS: u64 = 300;
const DEFAULT_STORE_HEALTH_TIMEOUT_MS: u64 = 1000;

/// Errors raised while reading startup configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("Store backend '{0}' is not compiled into this build")]
    BackendUnavailable(&'static str),
}

/// Which [`kvapi_core::storage::ItemStore`] implementation to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    DynamoDb,
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::DynamoDb => "dynamodb",
            StoreBackend::Memory => "memory",
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Auxiliary endpoint probed by the health check and used as the store
    /// endpoint override. `None` when LocalStack is disabled.
    pub localstack_endpoint: Option<String>,
    /// AWS region for the store client.
    pub region: String,
    /// Whether the store integration (and the CRUD routes) is enabled.
    pub store_enabled: bool,
    pub store_backend: StoreBackend,
    /// Table backing the item resource.
    pub table_name: String,
    /// Environment tag; `dev` and `local` switch to verbose human-readable logs.
    pub app_env: String,
    /// Process-wide request deadline.
    pub request_timeout: Duration,
    /// Timeout of the auxiliary endpoint probe. Always below `request_timeout`.
    pub probe_timeout: Duration,
    /// Deadline of the store health call. Always below `request_timeout`, so
    /// a hung store is reported by `/health` instead of timing out the request.
    pub store_health_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LOCALSTACK_ENDPOINT` - Probe target and store endpoint override (default: "http://localhost:4566")
    /// - `ENABLE_LOCALSTACK` - Set to `false` to skip the probe and the override (default: true)
    /// - `AWS_REGION` - Store region (default: "us-east-1")
    /// - `ENABLE_DYNAMODB` - Set to `false` to disable the store integration (default: true)
    /// - `STORE_BACKEND` - `dynamodb` or `memory` (default: "dynamodb")
    /// - `EXAMPLE_TABLE` - Table name for the item resource (default: "example-items")
    /// - `APP_ENV` - Environment tag (default: "")
    /// - `REQUEST_TIMEOUT_SECS` - Request deadline in seconds (default: 5)
    /// - `HEALTH_PROBE_TIMEOUT_MS` - Probe timeout in milliseconds (default: 300)
    /// - `HEALTH_STORE_TIMEOUT_MS` - Store health deadline in milliseconds (default: 1000,
    ///   or half the request deadline when that is shorter)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let localstack_enabled = match get("ENABLE_LOCALSTACK") {
            Some(value) => parse_flag("ENABLE_LOCALSTACK", &value)?,
            None => true,
        };
        let localstack_endpoint = localstack_enabled.then(|| {
            get("LOCALSTACK_ENDPOINT")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_LOCALSTACK_ENDPOINT.to_string())
        });

        let store_enabled = match get("ENABLE_DYNAMODB") {
            Some(value) => parse_flag("ENABLE_DYNAMODB", &value)?,
            None => true,
        };

        let store_backend = match get("STORE_BACKEND") {
            Some(value) => parse_backend(&value)?,
            None => StoreBackend::DynamoDb,
        };
        if store_enabled
            && store_backend == StoreBackend::DynamoDb
            && !cfg!(feature = "dynamodb")
        {
            return Err(ConfigError::BackendUnavailable(store_backend.as_str()));
        }

        let request_timeout = match get("REQUEST_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse_positive("REQUEST_TIMEOUT_SECS", &value)?),
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };
        let probe_timeout = match get("HEALTH_PROBE_TIMEOUT_MS") {
            Some(value) => {
                Duration::from_millis(parse_positive("HEALTH_PROBE_TIMEOUT_MS", &value)?)
            }
            None => Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
        };
        let store_health_timeout = match get("HEALTH_STORE_TIMEOUT_MS") {
            Some(value) => {
                Duration::from_millis(parse_positive("HEALTH_STORE_TIMEOUT_MS", &value)?)
            }
            None => {
                Duration::from_millis(DEFAULT_STORE_HEALTH_TIMEOUT_MS).min(request_timeout / 2)
            }
        };
        check_below_deadline("HEALTH_PROBE_TIMEOUT_MS", probe_timeout, request_timeout)?;
        check_below_deadline("HEALTH_STORE_TIMEOUT_MS", store_health_timeout, request_timeout)?;

        Ok(Self {
            localstack_endpoint,
            region: get("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            store_enabled,
            store_backend,
            table_name: get("EXAMPLE_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string()),
            app_env: get("APP_ENV").unwrap_or_default(),
            request_timeout,
            probe_timeout,
            store_health_timeout,
        })
    }

    /// Whether verbose, human-readable logging should be used.
    pub fn is_dev(&self) -> bool {
        matches!(self.app_env.as_str(), "dev" | "local")
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: "expected a boolean",
        }),
    }
}

fn parse_backend(value: &str) -> Result<StoreBackend, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "dynamodb" => Ok(StoreBackend::DynamoDb),
        "memory" | "inmemory" => Ok(StoreBackend::Memory),
        _ => Err(ConfigError::Invalid {
            var: "STORE_BACKEND",
            value: value.to_string(),
            reason: "expected 'dynamodb' or 'memory'",
        }),
    }
}

fn parse_positive(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: "expected a positive integer",
        }),
    }
}

fn check_below_deadline(
    var: &'static str,
    timeout: Duration,
    deadline: Duration,
) -> Result<(), ConfigError> {
    if timeout < deadline {
        return Ok(());
    }
    Err(ConfigError::Invalid {
        var,
        value: timeout.as_millis().to_string(),
        reason: "must be below REQUEST_TIMEOUT_SECS",
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = load(&[("STORE_BACKEND", "memory")]).unwrap();

        assert_eq!(
            config.localstack_endpoint.as_deref(),
            Some("http://localhost:4566")
        );
        assert_eq!(config.region, "us-east-1");
        assert!(config.store_enabled);
        assert_eq!(config.table_name, "example-items");
        assert_eq!(config.app_env, "");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.probe_timeout, Duration::from_millis(300));
        assert_eq!(config.store_health_timeout, Duration::from_millis(1000));
        assert!(!config.is_dev());
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = load(&[
            ("STORE_BACKEND", "memory"),
            ("LOCALSTACK_ENDPOINT", ""),
            ("EXAMPLE_TABLE", "  "),
        ])
        .unwrap();

        assert_eq!(
            config.localstack_endpoint.as_deref(),
            Some("http://localhost:4566")
        );
        assert_eq!(config.table_name, "example-items");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("LOCALSTACK_ENDPOINT", "http://localstack:4566/"),
            ("AWS_REGION", "eu-west-1"),
            ("STORE_BACKEND", "Memory"),
            ("EXAMPLE_TABLE", "widgets"),
            ("APP_ENV", "local"),
            ("REQUEST_TIMEOUT_SECS", "2"),
            ("HEALTH_PROBE_TIMEOUT_MS", "150"),
            ("HEALTH_STORE_TIMEOUT_MS", "750"),
        ])
        .unwrap();

        assert_eq!(
            config.localstack_endpoint.as_deref(),
            Some("http://localstack:4566")
        );
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.table_name, "widgets");
        assert!(config.is_dev());
        assert_eq!(config.request_timeout, Duration::from_secs(2));
        assert_eq!(config.probe_timeout, Duration::from_millis(150));
        assert_eq!(config.store_health_timeout, Duration::from_millis(750));
    }

    #[test]
    fn test_store_health_timeout_defaults_below_short_deadline() {
        let config = load(&[("STORE_BACKEND", "memory"), ("REQUEST_TIMEOUT_SECS", "1")]).unwrap();

        assert_eq!(config.store_health_timeout, Duration::from_millis(500));
        assert!(config.store_health_timeout < config.request_timeout);
    }

    #[test]
    fn test_store_health_timeout_must_be_below_deadline() {
        let err = load(&[
            ("STORE_BACKEND", "memory"),
            ("REQUEST_TIMEOUT_SECS", "2"),
            ("HEALTH_STORE_TIMEOUT_MS", "2000"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "HEALTH_STORE_TIMEOUT_MS",
                value: "2000".to_string(),
                reason: "must be below REQUEST_TIMEOUT_SECS",
            }
        );
    }

    #[test]
    fn test_probe_timeout_must_be_below_deadline() {
        let err = load(&[
            ("STORE_BACKEND", "memory"),
            ("REQUEST_TIMEOUT_SECS", "1"),
            ("HEALTH_PROBE_TIMEOUT_MS", "5000"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "HEALTH_PROBE_TIMEOUT_MS",
                ..
            }
        ));
    }

    #[test]
    fn test_disable_flags() {
        let config = load(&[("ENABLE_LOCALSTACK", "false"), ("ENABLE_DYNAMODB", "0")]).unwrap();

        assert!(config.localstack_endpoint.is_none());
        assert!(!config.store_enabled);
    }

    #[test]
    fn test_malformed_flag_is_rejected() {
        let err = load(&[("ENABLE_DYNAMODB", "maybe")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "ENABLE_DYNAMODB",
                value: "maybe".to_string(),
                reason: "expected a boolean",
            }
        );
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = load(&[("STORE_BACKEND", "memory"), ("REQUEST_TIMEOUT_SECS", "0")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "REQUEST_TIMEOUT_SECS",
                ..
            }
        ));
    }

    #[test]
    fn test_non_numeric_probe_timeout_is_rejected() {
        let err = load(&[("STORE_BACKEND", "memory"), ("HEALTH_PROBE_TIMEOUT_MS", "fast")])
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "HEALTH_PROBE_TIMEOUT_MS",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let err = load(&[("STORE_BACKEND", "redis")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "STORE_BACKEND",
                ..
            }
        ));
    }

    #[cfg(feature = "dynamodb")]
    #[test]
    fn test_dynamodb_is_default_backend() {
        let config = load(&[]).unwrap();
        assert_eq!(config.store_backend, StoreBackend::DynamoDb);
    }

    #[cfg(not(feature = "dynamodb"))]
    #[test]
    fn test_dynamodb_backend_requires_feature() {
        let err = load(&[]).unwrap_err();
        assert_eq!(err, ConfigError::BackendUnavailable("dynamodb"));
    }
}
