//! # devcat-config
//!
//! Layered configuration loading for DevCatalog using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DEVCATALOG_*` prefix, `__` as separator)
//! 2. Project-level `.devcatalog/config.toml`
//! 3. User-level `~/.config/devcatalog/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DEVCATALOG_SOURCE__URL` -> `source.url`,
//! `DEVCATALOG_CACHE__STALE_SECS` -> `cache.stale_secs`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use devcat_config::CatalogConfig;
//!
//! let config = CatalogConfig::load_with_dotenv().expect("config");
//! println!("records come from {:?}", config.source.location());
//! ```

mod cache;
mod error;
mod feedback;
mod general;
mod source;

pub use cache::CacheConfig;
pub use error::ConfigError;
pub use feedback::{FeedbackConfig, PLACEHOLDER_EMAIL};
pub use general::GeneralConfig;
pub use source::{DEFAULT_SOURCE_PATH, SourceConfig, SourceLocation};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "DEVCATALOG_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub feedback: FeedbackConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CatalogConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if a field fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".devcatalog/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would make the loader misbehave.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "source.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.cache.scope.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "cache.scope".into(),
                reason: "must not be empty".into(),
            });
        }
        if !self.source.is_remote() && self.source.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "source.path".into(),
                reason: "either source.path or source.url must be set".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("devcatalog").join("config.toml"))
    }
}
