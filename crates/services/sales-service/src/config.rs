//! Sales service configuration.

use std::env;

use common::{DatabaseConfig, DEFAULT_DATABASE_URL};
use domain::TopLimit;

/// Default HTTP host
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default HTTP port
const DEFAULT_PORT: u16 = 8080;

/// Sales service configuration.
#[derive(Debug, Clone)]
pub struct SalesServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Size of the top-orders ranking when the caller gives none
    pub default_top_orders: TopLimit,
}

impl SalesServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database_url = env::var("SALES_SERVICE_DATABASE_URL")
            .or_else(|_| env::var("DATABASE_URL"))
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        Self {
            database: DatabaseConfig::from_env_with_url(database_url),
            host: env::var("SALES_SERVICE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("SALES_SERVICE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            default_top_orders: env::var("DEFAULT_TOP_ORDERS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .and_then(|v| TopLimit::new(v).ok())
                .unwrap_or_default(),
        }
    }

    /// Configuration pointing at the given database, other settings default.
    pub fn with_database_url(url: impl Into<String>) -> Self {
        Self {
            database: DatabaseConfig::with_url(url),
            ..Self::default()
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for SalesServiceConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            default_top_orders: TopLimit::default(),
        }
    }
}
