//! Acting account configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The account every command runs on behalf of. There is no credential here;
/// identity resolution is out of scope and the username is taken on trust.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AccountConfig {
    /// Username owning all projects touched by this CLI.
    #[serde(default)]
    pub username: String,
}

impl AccountConfig {
    /// Check if an acting username is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.username.is_empty()
    }

    /// The acting username, or an error telling the user how to set one.
    pub fn require_username(&self) -> Result<&str, ConfigError> {
        if self.is_configured() {
            Ok(&self.username)
        } else {
            Err(ConfigError::NotConfigured {
                section: "account".to_string(),
            })
        }
    }
}
