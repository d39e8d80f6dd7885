//! Application configuration: defaults, an optional TOML file and
//! `SUBGRAPH_FINDER_*` environment variables, layered with figment.
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [algorithm]
//! algorithm = "bron_kerbosch"
//! bipartite = true
//! sort_order = "descending"
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algo::AlgorithmConfig;

/// Prefix of environment overrides, e.g. `SUBGRAPH_FINDER_LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "SUBGRAPH_FINDER_";

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A provider could not be read or did not match the schema.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    /// The configuration could not be rendered as TOML.
    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),

    /// A value was read but is not acceptable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Logging section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Logging section.
    pub logging: LoggingConfig,
    /// Algorithm to run, if chosen by configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<AlgorithmConfig>,
}

impl FinderConfig {
    /// Builds the provider stack: defaults, then `path` (if given), then
    /// the environment.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(FinderConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` on unreadable or mistyped input and
    /// `ConfigError::Invalid` when validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(path).extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML string without consulting the
    /// environment.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::from(Serialized::defaults(FinderConfig::default()))
            .merge(Toml::string(text))
            .extract()
            .map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the effective configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.level must not be empty".to_string()));
        }
        if let Some(algorithm) = &self.algorithm {
            algorithm
                .validate()
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }
        Ok(())
    }
}
