use anyhow::Context;
use slush_config::SlushConfig;
use slush_db::service::SlushService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: SlushService,
    pub config: SlushConfig,
}

impl AppContext {
    /// Load configuration and open the store as the acting account.
    ///
    /// The `--account` flag overrides the configured username. When the
    /// store has sync credentials the database opens as a synced embedded
    /// replica, falling back to local-only if sync setup fails.
    pub async fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = SlushConfig::load_with_dotenv()?;
        let account = match flags.account.as_deref() {
            Some(account) => account.to_string(),
            None => config.account.require_username()?.to_string(),
        };

        let db_path = config.store.db_path();
        let parent = db_path.parent().filter(|dir| !dir.as_os_str().is_empty());
        if let Some(parent) = parent {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create store directory {}", parent.display())
            })?;
        }
        let db_path_str = db_path.to_string_lossy();

        let service = if config.store.is_synced() {
            match SlushService::new_synced(
                &db_path_str,
                &config.store.url,
                &config.store.auth_token,
                config.store.sync_interval_secs,
                &account,
            )
            .await
            {
                Ok(service) => service,
                Err(error) => {
                    tracing::warn!(
                        %error,
                        "failed to open synced store; falling back to local"
                    );
                    SlushService::new_local(&db_path_str, &account)
                        .await
                        .context("failed to open local store")?
                }
            }
        } else {
            SlushService::new_local(&db_path_str, &account)
                .await
                .context("failed to open local store")?
        };

        Ok(Self { service, config })
    }
}
