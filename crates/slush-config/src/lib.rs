//! # slush-config
//!
//! Layered configuration loading for SlushPilot using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SLUSH_*` prefix, `__` as separator)
//! 2. Working-directory `.slushpilot/config.toml`
//! 3. User-level `~/.config/slushpilot/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SLUSH_STORE__URL` -> `store.url`,
//! `SLUSH_ACCOUNT__USERNAME` -> `account.username`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use slush_config::SlushConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = SlushConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = SlushConfig::load().expect("config");
//!
//! if config.store.is_synced() {
//!     println!("store URL: {}", config.store.url);
//! }
//! ```

mod account;
mod error;
mod general;
mod store;

pub use account::AccountConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SlushConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub account: AccountConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SlushConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`SLUSH_*` prefix)
    /// 2. `.slushpilot/config.toml` (working directory)
    /// 3. `~/.config/slushpilot/config.toml` (user-global)
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` for the current directory's `.env` before building the
    /// figment. This is the typical entry point for the CLI.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Working-directory config
        let local_path = PathBuf::from(".slushpilot/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("SLUSH_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("slushpilot").join("config.toml"))
    }
}
