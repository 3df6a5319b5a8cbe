//! Manuscript intake repository.
//!
//! One row per project, written only through upsert: the incoming intake is
//! merged over the stored row in Rust, then the full row is written back
//! with `ON CONFLICT(project_id) DO UPDATE`. Comparative titles are stored
//! as a JSON string array in a TEXT column.

use chrono::Utc;

use slush_core::entities::Manuscript;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_i64, get_opt_string, parse_datetime, parse_enum, parse_string_array};
use crate::service::SlushService;
use crate::updates::manuscript::ManuscriptIntake;

const SELECT_COLS: &str = "m.project_id, m.title, m.genre, m.word_count, m.blurb, m.summary, \
     m.comparative_titles, m.target_audience, m.author_name, m.author_bio, \
     m.personalization_notes, m.detail_summary, m.tone, m.updated_at";

fn row_to_manuscript(row: &libsql::Row) -> Result<Manuscript, DatabaseError> {
    Ok(Manuscript {
        project_id: row.get(0)?,
        title: get_opt_string(row, 1)?,
        genre: get_opt_string(row, 2)?,
        word_count: get_opt_i64(row, 3)?,
        blurb: get_opt_string(row, 4)?,
        summary: get_opt_string(row, 5)?,
        comparative_titles: parse_string_array(get_opt_string(row, 6)?.as_deref())?,
        target_audience: get_opt_string(row, 7)?,
        author_name: get_opt_string(row, 8)?,
        author_bio: get_opt_string(row, 9)?,
        personalization_notes: get_opt_string(row, 10)?,
        detail_summary: get_opt_string(row, 11)?,
        tone: parse_enum(&row.get::<String>(12)?)?,
        updated_at: parse_datetime(&row.get::<String>(13)?)?,
    })
}

impl SlushService {
    /// Merge intake detail into a project's manuscript row, creating it on
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the project is not visible to
    /// the acting account, or `DatabaseError` if the write fails.
    pub async fn upsert_manuscript(
        &self,
        project_id: &str,
        intake: ManuscriptIntake,
    ) -> Result<Manuscript, DatabaseError> {
        // Ownership check doubles as existence check
        self.get_project(project_id).await?;

        let now = Utc::now();
        let base = match self.get_manuscript(project_id).await? {
            Some(existing) => existing,
            None => Manuscript::empty(project_id, now),
        };
        let mut merged = intake.apply(base);
        merged.updated_at = now;

        let comps = serde_json::to_string(&merged.comparative_titles)
            .map_err(|e| DatabaseError::Other(e.into()))?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO manuscripts
                 (project_id, title, genre, word_count, blurb, summary,
                  comparative_titles, target_audience, author_name, author_bio,
                  personalization_notes, detail_summary, tone, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
                 ON CONFLICT(project_id) DO UPDATE SET
                   title = excluded.title,
                   genre = excluded.genre,
                   word_count = excluded.word_count,
                   blurb = excluded.blurb,
                   summary = excluded.summary,
                   comparative_titles = excluded.comparative_titles,
                   target_audience = excluded.target_audience,
                   author_name = excluded.author_name,
                   author_bio = excluded.author_bio,
                   personalization_notes = excluded.personalization_notes,
                   detail_summary = excluded.detail_summary,
                   tone = excluded.tone,
                   updated_at = excluded.updated_at",
                libsql::params![
                    merged.project_id.as_str(),
                    merged.title.clone(),
                    merged.genre.clone(),
                    merged.word_count,
                    merged.blurb.clone(),
                    merged.summary.clone(),
                    comps.as_str(),
                    merged.target_audience.clone(),
                    merged.author_name.clone(),
                    merged.author_bio.clone(),
                    merged.personalization_notes.clone(),
                    merged.detail_summary.clone(),
                    merged.tone.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(merged)
    }

    /// Get a project's manuscript intake, if any has been recorded.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_manuscript(
        &self,
        project_id: &str,
    ) -> Result<Option<Manuscript>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM manuscripts m
                     JOIN projects p ON p.id = m.project_id
                     WHERE m.project_id = ?1 AND p.owner_username = ?2"
                ),
                libsql::params![project_id, self.account()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_manuscript(&row)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{register_account, test_service};
    use crate::updates::manuscript::ManuscriptIntakeBuilder;
    use pretty_assertions::assert_eq;
    use slush_core::enums::LetterTone;

    #[tokio::test]
    async fn upsert_creates_then_merges() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();

        let first = ManuscriptIntakeBuilder::new()
            .title("The Glass Orchard")
            .genre("literary fantasy")
            .build();
        svc.upsert_manuscript(&project.id, first).await.unwrap();

        let second = ManuscriptIntakeBuilder::new().word_count(96_000).build();
        let merged = svc.upsert_manuscript(&project.id, second).await.unwrap();

        assert_eq!(merged.title.as_deref(), Some("The Glass Orchard"));
        assert_eq!(merged.genre.as_deref(), Some("literary fantasy"));
        assert_eq!(merged.word_count, Some(96_000));

        let fetched = svc.get_manuscript(&project.id).await.unwrap().unwrap();
        assert_eq!(fetched.title.as_deref(), Some("The Glass Orchard"));
        assert_eq!(fetched.word_count, Some(96_000));
    }

    #[tokio::test]
    async fn get_manuscript_none_before_first_set() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();

        let manuscript = svc.get_manuscript(&project.id).await.unwrap();
        assert!(manuscript.is_none());
    }

    #[tokio::test]
    async fn comparative_titles_roundtrip() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();

        let intake = ManuscriptIntakeBuilder::new()
            .comparative_titles(vec!["Piranesi".to_string(), "The Starless Sea".to_string()])
            .build();
        svc.upsert_manuscript(&project.id, intake).await.unwrap();

        let fetched = svc.get_manuscript(&project.id).await.unwrap().unwrap();
        assert_eq!(
            fetched.comparative_titles,
            vec!["Piranesi", "The Starless Sea"]
        );
    }

    #[tokio::test]
    async fn tone_defaults_and_updates() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();

        let created = svc
            .upsert_manuscript(&project.id, ManuscriptIntake::default())
            .await
            .unwrap();
        assert_eq!(created.tone, LetterTone::Professional);

        let intake = ManuscriptIntakeBuilder::new()
            .tone(LetterTone::WarmProfessional)
            .build();
        let updated = svc.upsert_manuscript(&project.id, intake).await.unwrap();
        assert_eq!(updated.tone, LetterTone::WarmProfessional);
    }

    #[tokio::test]
    async fn upsert_scoped_to_owner() {
        let mut svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();

        svc.set_account("rival");
        svc.create_profile(crate::updates::profile::ProfileUpdate::default())
            .await
            .unwrap();

        let intake = ManuscriptIntakeBuilder::new().title("Hijacked").build();
        let result = svc.upsert_manuscript(&project.id, intake).await;
        assert!(matches!(result, Err(DatabaseError::NoResult)));

        let peek = svc.get_manuscript(&project.id).await.unwrap();
        assert!(peek.is_none());
    }
}
