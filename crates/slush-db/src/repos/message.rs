//! Guidance message repository.
//!
//! Append-only transcript per project. Ordering is the explicit per-project
//! seq counter, never the timestamp; two rows written in the same
//! millisecond still list in insertion order.

use chrono::Utc;

use slush_core::entities::Message;
use slush_core::enums::MessageRole;
use slush_core::ids::PREFIX_MESSAGE;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::service::SlushService;

fn row_to_message(row: &libsql::Row) -> Result<Message, DatabaseError> {
    Ok(Message {
        id: row.get(0)?,
        project_id: row.get(1)?,
        role: parse_enum(&row.get::<String>(2)?)?,
        body: row.get(3)?,
        seq: row.get(4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl SlushService {
    /// Append one message with the next per-project seq, then refresh the
    /// project stage.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the project is not visible to
    /// the acting account.
    pub async fn append_message(
        &self,
        project_id: &str,
        role: MessageRole,
        body: &str,
    ) -> Result<Message, DatabaseError> {
        self.get_project(project_id).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_MESSAGE).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT COALESCE(MAX(seq), 0) + 1 FROM messages WHERE project_id = ?1",
                [project_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let seq = row.get::<i64>(0)?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO messages (id, project_id, role, body, seq, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    id.as_str(),
                    project_id,
                    role.as_str(),
                    body,
                    seq,
                    now.to_rfc3339()
                ],
            )
            .await?;

        self.refresh_project_stage(project_id).await?;

        Ok(Message {
            id,
            project_id: project_id.to_string(),
            role,
            body: body.to_string(),
            seq,
            created_at: now,
        })
    }

    /// List a project's messages in seq order, capped at `limit`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_messages(
        &self,
        project_id: &str,
        limit: u32,
    ) -> Result<Vec<Message>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT m.id, m.project_id, m.role, m.body, m.seq, m.created_at
                     FROM messages m
                     JOIN projects p ON p.id = m.project_id
                     WHERE m.project_id = ?1 AND p.owner_username = ?2
                     ORDER BY m.seq LIMIT {limit}"
                ),
                libsql::params![project_id, self.account()],
            )
            .await?;

        let mut messages = Vec::new();
        while let Some(row) = rows.next().await? {
            messages.push(row_to_message(&row)?);
        }
        Ok(messages)
    }
}
