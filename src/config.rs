//! Registry configuration.
//!
//! Configuration only affects diagnostics; registration and lookup behave the
//! same whatever the settings.

use std::env;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "config")]
use crate::{DiError, DiResult};

/// Environment variable enabling the logging observer.
pub const ENV_LOG: &str = "FERROUS_REGISTRY_LOG";
/// Environment variable overriding the log prefix.
pub const ENV_LOG_PREFIX: &str = "FERROUS_REGISTRY_LOG_PREFIX";

pub(crate) const DEFAULT_LOG_PREFIX: &str = "[ferrous-registry]";

/// Settings applied by [`ServiceRegistry::with_config`](crate::ServiceRegistry::with_config).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct RegistryConfig {
    /// Install a [`LoggingObserver`](crate::LoggingObserver)
    pub logging: bool,
    /// Prefix attached to every logged event
    pub log_prefix: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            logging: false,
            log_prefix: DEFAULT_LOG_PREFIX.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Reads settings from `FERROUS_REGISTRY_LOG` and
    /// `FERROUS_REGISTRY_LOG_PREFIX`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_LOG) {
            config.logging = parse_flag(&value);
        }
        if let Some(prefix) = lookup(ENV_LOG_PREFIX) {
            config.log_prefix = prefix;
        }
        config
    }

    /// Parses a JSON document; missing fields take their defaults.
    ///
    /// ```rust
    /// # #[cfg(feature = "config")] {
    /// use ferrous_registry::RegistryConfig;
    ///
    /// let config = RegistryConfig::from_json(r#"{ "logging": true }"#).unwrap();
    /// assert!(config.logging);
    /// assert_eq!(config.log_prefix, "[ferrous-registry]");
    /// # }
    /// ```
    #[cfg(feature = "config")]
    pub fn from_json(document: &str) -> DiResult<Self> {
        serde_json::from_str(document).map_err(|e| DiError::Config(e.to_string()))
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
