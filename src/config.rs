use std::env;

use thiserror::Error;
use tracing::info;

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_MAILBOX_CAPACITY: usize = 32;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings for the storefront, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Capacity of each actor's mailbox.
    pub mailbox_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Missing keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(filter) = lookup("STOREFRONT_LOG") {
            if filter.trim().is_empty() {
                return Err(ConfigError::Invalid { key: "STOREFRONT_LOG", value: filter });
            }
            config.log_filter = filter;
        }

        if let Some(raw) = lookup("STOREFRONT_MAILBOX") {
            config.mailbox_capacity = match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => return Err(ConfigError::Invalid { key: "STOREFRONT_MAILBOX", value: raw }),
            };
        }

        Ok(config)
    }

    pub fn log_loaded(&self) {
        info!(log_filter = %self.log_filter, mailbox_capacity = self.mailbox_capacity, "Config loaded");
    }
}
