//! Query letter repository.
//!
//! Letters are reached through their project, so every read joins on the
//! owner. The current draft lives in `query_letters.body`; every draft
//! revision and publisher response also lands in `letter_events`, which is
//! append-only and ordered by a dense per-letter seq.
//!
//! Status walks `drafting -> sent -> responded` one way. The send and
//! respond operations also advance the parent project's stage.

use chrono::Utc;

use slush_core::entities::{LetterEvent, QueryLetter};
use slush_core::enums::{LetterEventKind, LetterStatus, ProjectStage};
use slush_core::ids::{PREFIX_LETTER, PREFIX_LETTER_EVENT};

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::service::SlushService;

const SELECT_COLS: &str =
    "l.id, l.project_id, l.publisher_name, l.body, l.status, l.created_at, l.updated_at";

const OWNER_JOIN: &str = "JOIN projects p ON p.id = l.project_id";

fn row_to_letter(row: &libsql::Row) -> Result<QueryLetter, DatabaseError> {
    Ok(QueryLetter {
        id: row.get(0)?,
        project_id: row.get(1)?,
        publisher_name: row.get(2)?,
        body: row.get(3)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

fn row_to_event(row: &libsql::Row) -> Result<LetterEvent, DatabaseError> {
    Ok(LetterEvent {
        id: row.get(0)?,
        letter_id: row.get(1)?,
        kind: parse_enum(&row.get::<String>(2)?)?,
        seq: row.get(3)?,
        body: row.get(4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl SlushService {
    /// Create a letter for a project, recording the body as the first draft
    /// event, then refresh the project stage.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the project is not visible to
    /// the acting account.
    pub async fn create_letter(
        &self,
        project_id: &str,
        publisher_name: &str,
        body: &str,
    ) -> Result<QueryLetter, DatabaseError> {
        self.get_project(project_id).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_LETTER).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO query_letters
                 (id, project_id, publisher_name, body, status, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    id.as_str(),
                    project_id,
                    publisher_name,
                    body,
                    LetterStatus::Drafting.as_str(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        self.append_letter_event(&id, LetterEventKind::Draft, body)
            .await?;
        self.refresh_project_stage(project_id).await?;

        Ok(QueryLetter {
            id,
            project_id: project_id.to_string(),
            publisher_name: publisher_name.to_string(),
            body: body.to_string(),
            status: LetterStatus::Drafting,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a letter by ID, scoped to the acting account.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the letter does not exist or
    /// belongs to another account's project.
    pub async fn get_letter(&self, id: &str) -> Result<QueryLetter, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM query_letters l {OWNER_JOIN}
                     WHERE l.id = ?1 AND p.owner_username = ?2"
                ),
                libsql::params![id, self.account()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_letter(&row)
    }

    /// List a project's letters, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_letters(
        &self,
        project_id: &str,
        limit: u32,
    ) -> Result<Vec<QueryLetter>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM query_letters l {OWNER_JOIN}
                     WHERE l.project_id = ?1 AND p.owner_username = ?2
                     ORDER BY l.created_at DESC LIMIT {limit}"
                ),
                libsql::params![project_id, self.account()],
            )
            .await?;

        let mut letters = Vec::new();
        while let Some(row) = rows.next().await? {
            letters.push(row_to_letter(&row)?);
        }
        Ok(letters)
    }

    /// Replace a letter's working draft, appending the new body as a draft
    /// event. Only allowed while the letter is still `drafting`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` once the letter has been sent.
    pub async fn revise_letter(&self, id: &str, body: &str) -> Result<QueryLetter, DatabaseError> {
        let current = self.get_letter(id).await?;
        if current.status != LetterStatus::Drafting {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot revise letter {} in status {}",
                id, current.status
            )));
        }

        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE query_letters SET body = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![body, now.to_rfc3339(), id],
            )
            .await?;
        self.append_letter_event(id, LetterEventKind::Draft, body)
            .await?;

        Ok(QueryLetter {
            body: body.to_string(),
            updated_at: now,
            ..current
        })
    }

    /// Mark a letter as sent and advance its project to stage `sent`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` unless the letter is `drafting`.
    pub async fn send_letter(&self, id: &str) -> Result<QueryLetter, DatabaseError> {
        let current = self.get_letter(id).await?;
        if !current.status.can_transition_to(LetterStatus::Sent) {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot transition letter {} from {} to sent",
                id, current.status
            )));
        }

        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE query_letters SET status = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![LetterStatus::Sent.as_str(), now.to_rfc3339(), id],
            )
            .await?;
        self.advance_project_stage(&current.project_id, ProjectStage::Sent)
            .await?;

        Ok(QueryLetter {
            status: LetterStatus::Sent,
            updated_at: now,
            ..current
        })
    }

    /// Record a publisher's response: append it to the history, mark the
    /// letter responded, and advance its project to stage `respond`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` unless the letter is `sent`.
    pub async fn record_response(
        &self,
        id: &str,
        response: &str,
    ) -> Result<QueryLetter, DatabaseError> {
        let current = self.get_letter(id).await?;
        if !current.status.can_transition_to(LetterStatus::Responded) {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot transition letter {} from {} to responded",
                id, current.status
            )));
        }

        let now = Utc::now();
        self.append_letter_event(id, LetterEventKind::Response, response)
            .await?;
        self.db()
            .conn()
            .execute(
                "UPDATE query_letters SET status = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![LetterStatus::Responded.as_str(), now.to_rfc3339(), id],
            )
            .await?;
        self.advance_project_stage(&current.project_id, ProjectStage::Respond)
            .await?;

        Ok(QueryLetter {
            status: LetterStatus::Responded,
            updated_at: now,
            ..current
        })
    }

    /// A letter's full history, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the letter is not visible to
    /// the acting account.
    pub async fn letter_history(&self, id: &str) -> Result<Vec<LetterEvent>, DatabaseError> {
        // Visibility check before reading events
        self.get_letter(id).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, letter_id, kind, seq, body, created_at
                 FROM letter_events WHERE letter_id = ?1 ORDER BY seq",
                [id],
            )
            .await?;

        let mut events = Vec::new();
        while let Some(row) = rows.next().await? {
            events.push(row_to_event(&row)?);
        }
        Ok(events)
    }

    /// Append one event row with the next per-letter seq.
    async fn append_letter_event(
        &self,
        letter_id: &str,
        kind: LetterEventKind,
        body: &str,
    ) -> Result<LetterEvent, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_LETTER_EVENT).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT COALESCE(MAX(seq), 0) + 1 FROM letter_events WHERE letter_id = ?1",
                [letter_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let seq = row.get::<i64>(0)?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO letter_events (id, letter_id, kind, seq, body, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    id.as_str(),
                    letter_id,
                    kind.as_str(),
                    seq,
                    body,
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(LetterEvent {
            id,
            letter_id: letter_id.to_string(),
            kind,
            seq,
            body: body.to_string(),
            created_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{register_account, test_service};
    use pretty_assertions::assert_eq;
    use slush_core::enums::MessageRole;

    #[tokio::test]
    async fn create_letter_roundtrip() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();

        let letter = svc
            .create_letter(&project.id, "Darkwood Press", "Dear Acquisitions Team,")
            .await
            .unwrap();

        assert!(letter.id.starts_with("ltr-"));
        assert_eq!(letter.publisher_name, "Darkwood Press");
        assert_eq!(letter.status, LetterStatus::Drafting);

        let fetched = svc.get_letter(&letter.id).await.unwrap();
        assert_eq!(fetched.body, "Dear Acquisitions Team,");

        let history = svc.letter_history(&letter.id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].kind, LetterEventKind::Draft);
        assert_eq!(history[0].seq, 1);
    }

    #[tokio::test]
    async fn first_letter_advances_stage_to_drafting() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();
        assert_eq!(project.stage, ProjectStage::New);

        svc.create_letter(&project.id, "Darkwood Press", "v1")
            .await
            .unwrap();

        let refreshed = svc.get_project(&project.id).await.unwrap();
        assert_eq!(refreshed.stage, ProjectStage::Drafting);
    }

    #[tokio::test]
    async fn letter_beats_messages_in_resolver() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();

        // Past the message threshold first
        svc.append_message(&project.id, MessageRole::User, "hello")
            .await
            .unwrap();
        svc.append_message(&project.id, MessageRole::Assistant, "hi")
            .await
            .unwrap();
        assert_eq!(
            svc.get_project(&project.id).await.unwrap().stage,
            ProjectStage::PublisherSearch
        );

        svc.create_letter(&project.id, "Darkwood Press", "v1")
            .await
            .unwrap();
        assert_eq!(
            svc.get_project(&project.id).await.unwrap().stage,
            ProjectStage::Drafting
        );
    }

    #[tokio::test]
    async fn revise_letter_appends_history() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();
        let letter = svc
            .create_letter(&project.id, "Darkwood Press", "v1")
            .await
            .unwrap();

        let revised = svc.revise_letter(&letter.id, "v2").await.unwrap();
        assert_eq!(revised.body, "v2");
        assert_eq!(revised.status, LetterStatus::Drafting);

        let history = svc.letter_history(&letter.id).await.unwrap();
        let seqs: Vec<i64> = history.iter().map(|e| e.seq).collect();
        let bodies: Vec<&str> = history.iter().map(|e| e.body.as_str()).collect();
        assert_eq!(seqs, vec![1, 2]);
        assert_eq!(bodies, vec!["v1", "v2"]);
        assert!(history.iter().all(|e| e.kind == LetterEventKind::Draft));
    }

    #[tokio::test]
    async fn revise_after_send_rejected() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();
        let letter = svc
            .create_letter(&project.id, "Darkwood Press", "v1")
            .await
            .unwrap();

        svc.send_letter(&letter.id).await.unwrap();
        let result = svc.revise_letter(&letter.id, "too late").await;
        assert!(matches!(result, Err(DatabaseError::InvalidState(_))));

        // Body untouched
        assert_eq!(svc.get_letter(&letter.id).await.unwrap().body, "v1");
    }

    #[tokio::test]
    async fn send_letter_advances_project() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();
        let letter = svc
            .create_letter(&project.id, "Darkwood Press", "v1")
            .await
            .unwrap();

        let sent = svc.send_letter(&letter.id).await.unwrap();
        assert_eq!(sent.status, LetterStatus::Sent);
        assert_eq!(
            svc.get_project(&project.id).await.unwrap().stage,
            ProjectStage::Sent
        );
    }

    #[tokio::test]
    async fn send_twice_rejected() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();
        let letter = svc
            .create_letter(&project.id, "Darkwood Press", "v1")
            .await
            .unwrap();

        svc.send_letter(&letter.id).await.unwrap();
        let result = svc.send_letter(&letter.id).await;
        assert!(matches!(result, Err(DatabaseError::InvalidState(_))));
    }

    #[tokio::test]
    async fn record_response_full_flow() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();
        let letter = svc
            .create_letter(&project.id, "Darkwood Press", "v1")
            .await
            .unwrap();

        svc.send_letter(&letter.id).await.unwrap();
        let responded = svc
            .record_response(&letter.id, "We would like to see the full manuscript.")
            .await
            .unwrap();
        assert_eq!(responded.status, LetterStatus::Responded);

        let history = svc.letter_history(&letter.id).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].kind, LetterEventKind::Response);
        assert_eq!(history[1].seq, 2);
        assert_eq!(
            history[1].body,
            "We would like to see the full manuscript."
        );

        assert_eq!(
            svc.get_project(&project.id).await.unwrap().stage,
            ProjectStage::Respond
        );
    }

    #[tokio::test]
    async fn respond_before_send_rejected() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();
        let letter = svc
            .create_letter(&project.id, "Darkwood Press", "v1")
            .await
            .unwrap();

        let result = svc.record_response(&letter.id, "premature").await;
        assert!(matches!(result, Err(DatabaseError::InvalidState(_))));
    }

    #[tokio::test]
    async fn list_letters_by_project() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();
        let other = svc.create_project(None).await.unwrap();

        svc.create_letter(&project.id, "Darkwood Press", "v1")
            .await
            .unwrap();
        svc.create_letter(&project.id, "Lanternfish Books", "v1")
            .await
            .unwrap();
        svc.create_letter(&other.id, "Elsewhere House", "v1")
            .await
            .unwrap();

        let letters = svc.list_letters(&project.id, 10).await.unwrap();
        assert_eq!(letters.len(), 2);
        assert!(letters.iter().all(|l| l.project_id == project.id));
    }

    #[tokio::test]
    async fn letters_invisible_across_accounts() {
        let mut svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();
        let letter = svc
            .create_letter(&project.id, "Darkwood Press", "v1")
            .await
            .unwrap();

        svc.set_account("rival");
        svc.create_profile(crate::updates::profile::ProfileUpdate::default())
            .await
            .unwrap();

        assert!(matches!(
            svc.get_letter(&letter.id).await,
            Err(DatabaseError::NoResult)
        ));
        assert!(matches!(
            svc.send_letter(&letter.id).await,
            Err(DatabaseError::NoResult)
        ));
        assert!(matches!(
            svc.letter_history(&letter.id).await,
            Err(DatabaseError::NoResult)
        ));
    }
}
