//! Person service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

/// Prefix for service-specific environment overrides
pub const ENV_PREFIX: &str = "PERSON_SERVICE";

/// Person service configuration.
#[derive(Debug, Clone)]
pub struct PersonServiceConfig {
    /// Service name and log level
    pub service: ServiceConfig,
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl PersonServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "person-service".to_string(),
                log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            },
            database: DatabaseConfig::from_env(ENV_PREFIX),
        }
    }
}
