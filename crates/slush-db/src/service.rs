//! Service layer scoping database operations to one account.
//!
//! `SlushService` wraps `SlushDb` (raw database access) together with the
//! username of the acting account. All repo methods are implemented as
//! `impl SlushService` and filter by that username, so one database file
//! can hold several authors' slush piles without them seeing each other.

use crate::SlushDb;
use crate::error::DatabaseError;

/// Account-scoped handle over the SlushPilot database.
///
/// Every project query filters on `owner_username`; letters and messages
/// are reached through their project, so the scope follows them too.
pub struct SlushService {
    db: SlushDb,
    account: String,
}

impl SlushService {
    /// Create a new service over a local database file.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    /// * `account` - Username the service acts as.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str, account: &str) -> Result<Self, DatabaseError> {
        let db = SlushDb::open_local(db_path).await?;
        Ok(Self {
            db,
            account: account.to_string(),
        })
    }

    /// Create a service backed by a synced Turso embedded replica.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the replica cannot be opened.
    pub async fn new_synced(
        local_replica_path: &str,
        remote_url: &str,
        auth_token: &str,
        sync_interval_secs: u64,
        account: &str,
    ) -> Result<Self, DatabaseError> {
        let db = SlushDb::open_synced(
            local_replica_path,
            remote_url,
            auth_token,
            sync_interval_secs,
        )
        .await?;
        Ok(Self {
            db,
            account: account.to_string(),
        })
    }

    /// Create from an existing `SlushDb` (for testing).
    #[must_use]
    pub fn from_db(db: SlushDb, account: &str) -> Self {
        Self {
            db,
            account: account.to_string(),
        }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &SlushDb {
        &self.db
    }

    /// Username this service acts as.
    #[must_use]
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Switch the acting account (used by tenancy tests).
    pub fn set_account(&mut self, account: &str) {
        self.account = account.to_string();
    }
}
