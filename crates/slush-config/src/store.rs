//! Data store configuration (local libSQL file, optionally synced to Turso).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default sync interval in seconds.
const fn default_sync_interval_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path to the local database file. Empty means the default location
    /// under the user data directory.
    #[serde(default)]
    pub path: String,

    /// Remote database URL (e.g., `libsql://slushpilot.turso.io`). Empty
    /// means local-only.
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,

    /// Sync interval for embedded replicas, in seconds.
    #[serde(default = "default_sync_interval_secs")]
    pub sync_interval_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            url: String::new(),
            auth_token: String::new(),
            sync_interval_secs: default_sync_interval_secs(),
        }
    }
}

impl StoreConfig {
    /// Check if the store has the minimum required fields for remote sync.
    #[must_use]
    pub fn is_synced(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Resolve the local database file path.
    ///
    /// An explicitly configured path wins; otherwise the file lives under the
    /// platform data directory (falling back to the current directory when no
    /// data directory exists, as on some minimal containers).
    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        if !self.path.is_empty() {
            return PathBuf::from(&self.path);
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("slushpilot")
            .join("slush.db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_synced() {
        let config = StoreConfig::default();
        assert!(!config.is_synced());
        assert_eq!(config.sync_interval_secs, 60);
    }

    #[test]
    fn synced_when_url_and_token_set() {
        let config = StoreConfig {
            url: "libsql://slushpilot.turso.io".into(),
            auth_token: "token123".into(),
            ..Default::default()
        };
        assert!(config.is_synced());
    }

    #[test]
    fn url_alone_is_not_synced() {
        let config = StoreConfig {
            url: "libsql://slushpilot.turso.io".into(),
            ..Default::default()
        };
        assert!(!config.is_synced());
    }

    #[test]
    fn explicit_path_wins() {
        let config = StoreConfig {
            path: "/tmp/slush-test.db".into(),
            ..Default::default()
        };
        assert_eq!(config.db_path(), PathBuf::from("/tmp/slush-test.db"));
    }

    #[test]
    fn default_path_ends_with_db_file() {
        let config = StoreConfig::default();
        let path = config.db_path();
        assert!(path.ends_with("slushpilot/slush.db"));
    }
}
