//! Configuration for the listing service.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default deadline for one store call (5 seconds).
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5_000;

/// Errors raised while loading a [`ListingConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse listing config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid listing config: {0}")]
    Invalid(String),
}

/// Listing service settings.
///
/// ```
/// use roster_listing::ListingConfig;
///
/// let config = ListingConfig::from_yaml_str("store_timeout_ms: 250\nmax_page_size: 50\n").unwrap();
/// assert_eq!(config.max_page_size, Some(50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Deadline for one store call, in milliseconds.
    pub store_timeout_ms: u64,

    /// Largest page a caller may request. Larger `first` values are capped.
    pub max_page_size: Option<u64>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            store_timeout_ms: DEFAULT_STORE_TIMEOUT_MS,
            max_page_size: None,
        }
    }
}

impl ListingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: ListingConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every setting is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_timeout_ms == 0 {
            return Err(ConfigError::Invalid("store_timeout_ms must be positive".into()));
        }
        if self.max_page_size == Some(0) {
            return Err(ConfigError::Invalid("max_page_size must be positive".into()));
        }
        Ok(())
    }

    /// Set the store call deadline.
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the page size cap.
    pub fn with_max_page_size(mut self, max: u64) -> Self {
        self.max_page_size = Some(max);
        self
    }

    /// Returns the store call deadline.
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}
