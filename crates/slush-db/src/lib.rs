//! # slush-db
//!
//! libSQL database operations for SlushPilot state.
//!
//! Handles all relational state: author profiles, projects, manuscript
//! intake, query letters with their draft/response history, and the
//! per-project guidance thread.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29): local files for
//! day-to-day use, Turso embedded replicas when a remote URL is configured.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use std::time::Duration;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all SlushPilot state operations.
///
/// Wraps a libSQL database and connection. Provides ID generation;
/// repository methods live on [`service::SlushService`].
pub struct SlushDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl SlushDb {
    /// Open a local-only database at the given path (no cloud sync).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        Self::from_database(db).await
    }

    /// Open an embedded replica synced against a remote Turso database.
    ///
    /// Writes land locally and sync in the background every
    /// `sync_interval_secs` seconds.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the replica cannot be created or
    /// migrations fail.
    pub async fn open_synced(
        local_replica_path: &str,
        remote_url: &str,
        auth_token: &str,
        sync_interval_secs: u64,
    ) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote_replica(
            local_replica_path,
            remote_url.to_string(),
            auth_token.to_string(),
        )
        .read_your_writes(true)
        .sync_interval(Duration::from_secs(sync_interval_secs))
        .build()
        .await?;
        Self::from_database(db).await
    }

    /// Shared open path: connect, enable foreign keys, run migrations.
    async fn from_database(db: libsql::Database) -> Result<Self, DatabaseError> {
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let slush_db = Self { db, conn };
        slush_db.run_migrations().await?;
        Ok(slush_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"prj-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
