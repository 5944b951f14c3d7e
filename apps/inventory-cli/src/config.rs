//! Configuration for the inventory console

use core_config::{env_or_default, env_parse_or, ConfigError, FromEnv};
use domain_inventory::DEFAULT_PAGE_SIZE;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    /// Default rows per page for the listing view
    pub page_size: usize,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the inventory store
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs: u64 = env_parse_or("INVENTORY_API_TIMEOUT_SECS", 30)?;
        Ok(Self {
            api: ApiConfig {
                base_url: env_or_default("INVENTORY_API_URL", "http://localhost:5068"),
                timeout: Duration::from_secs(timeout_secs),
            },
            page_size: env_parse_or("INVENTORY_PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
        })
    }
}
