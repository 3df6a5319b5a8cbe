//! Project repository.
//!
//! Create/list/rename/publish plus the stage machinery: counting related
//! rows, running the pure resolver, and persisting advances. Stage writes
//! go through `advance_project_stage`, which refuses to move backward, so
//! the "never reverted" invariant holds no matter who calls it.

use chrono::Utc;

use slush_core::entities::Project;
use slush_core::enums::ProjectStage;
use slush_core::ids::PREFIX_PROJECT;
use slush_core::resolver::resolve_stage;
use slush_core::responses::ProjectOverview;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::service::SlushService;

pub(crate) const DEFAULT_TITLE: &str = "Untitled Manuscript";

const SELECT_COLS: &str =
    "id, owner_username, title, stage, is_public, created_at, updated_at";

fn row_to_project(row: &libsql::Row) -> Result<Project, DatabaseError> {
    Ok(Project {
        id: row.get(0)?,
        owner_username: row.get(1)?,
        title: row.get(2)?,
        stage: parse_enum(&row.get::<String>(3)?)?,
        is_public: row.get::<i64>(4)? != 0,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl SlushService {
    /// Create a project for the acting account.
    ///
    /// Starts at stage `new` with the default title when none is given.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the account is not registered (FK) or the
    /// INSERT fails.
    pub async fn create_project(&self, title: Option<&str>) -> Result<Project, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_PROJECT).await?;
        let title = title.unwrap_or(DEFAULT_TITLE);

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO projects ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
                ),
                libsql::params![
                    id.as_str(),
                    self.account(),
                    title,
                    ProjectStage::New.as_str(),
                    0i64,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Project {
            id,
            owner_username: self.account().to_string(),
            title: title.to_string(),
            stage: ProjectStage::New,
            is_public: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a project by ID, scoped to the acting account.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the project does not exist or
    /// belongs to another account.
    pub async fn get_project(&self, id: &str) -> Result<Project, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM projects
                     WHERE id = ?1 AND owner_username = ?2"
                ),
                libsql::params![id, self.account()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_project(&row)
    }

    /// List the acting account's projects, most recently touched first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_projects(&self, limit: u32) -> Result<Vec<Project>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM projects
                     WHERE owner_username = ?1
                     ORDER BY updated_at DESC LIMIT {limit}"
                ),
                [self.account()],
            )
            .await?;

        let mut projects = Vec::new();
        while let Some(row) = rows.next().await? {
            projects.push(row_to_project(&row)?);
        }
        Ok(projects)
    }

    /// Rename a project.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the project is not visible to
    /// the acting account.
    pub async fn rename_project(&self, id: &str, title: &str) -> Result<Project, DatabaseError> {
        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE projects SET title = ?1, updated_at = ?2
                 WHERE id = ?3 AND owner_username = ?4",
                libsql::params![title, now.to_rfc3339(), id, self.account()],
            )
            .await?;
        self.get_project(id).await
    }

    /// Publish or unpublish a project.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the project is not visible to
    /// the acting account.
    pub async fn set_project_visibility(
        &self,
        id: &str,
        is_public: bool,
    ) -> Result<Project, DatabaseError> {
        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE projects SET is_public = ?1, updated_at = ?2
                 WHERE id = ?3 AND owner_username = ?4",
                libsql::params![i64::from(is_public), now.to_rfc3339(), id, self.account()],
            )
            .await?;
        self.get_project(id).await
    }

    /// Count the rows the stage resolver runs on: (messages, letters).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the aggregate queries fail.
    pub async fn project_related_counts(&self, id: &str) -> Result<(i64, i64), DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT
                     (SELECT COUNT(*) FROM messages WHERE project_id = ?1),
                     (SELECT COUNT(*) FROM query_letters WHERE project_id = ?1)",
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok((row.get::<i64>(0)?, row.get::<i64>(1)?))
    }

    /// Run the stage resolver against a project's current counts and persist
    /// the result when it advances the stored stage.
    ///
    /// Equal or lower-ranked resolutions leave the row untouched, so the
    /// call is idempotent and never reverts a stage (the `sent`/`respond`
    /// stages rank above everything the resolver produces).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the project is not visible to
    /// the acting account.
    pub async fn refresh_project_stage(&self, id: &str) -> Result<ProjectOverview, DatabaseError> {
        let project = self.get_project(id).await?;
        let (message_count, letter_count) = self.project_related_counts(id).await?;

        let resolved = resolve_stage(message_count, letter_count);
        let project = if project.stage.can_transition_to(resolved) {
            tracing::debug!(
                project_id = %id,
                from = %project.stage,
                to = %resolved,
                "advancing project stage"
            );
            self.write_stage(id, resolved).await?
        } else {
            project
        };

        Ok(ProjectOverview {
            project,
            message_count,
            letter_count,
        })
    }

    /// Advance a project's stage to `target` (used by letter send/respond).
    ///
    /// A no-op when the stored stage is already at or past `target`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the project is not visible to
    /// the acting account.
    pub async fn advance_project_stage(
        &self,
        id: &str,
        target: ProjectStage,
    ) -> Result<Project, DatabaseError> {
        let project = self.get_project(id).await?;
        if !project.stage.can_transition_to(target) {
            return Ok(project);
        }
        tracing::debug!(
            project_id = %id,
            from = %project.stage,
            to = %target,
            "advancing project stage"
        );
        self.write_stage(id, target).await
    }

    /// Persist a stage advance. Callers have already validated the transition.
    async fn write_stage(&self, id: &str, stage: ProjectStage) -> Result<Project, DatabaseError> {
        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE projects SET stage = ?1, updated_at = ?2
                 WHERE id = ?3 AND owner_username = ?4",
                libsql::params![stage.as_str(), now.to_rfc3339(), id, self.account()],
            )
            .await?;
        self.get_project(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{register_account, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_project_starts_new() {
        let svc = test_service().await;
        register_account(&svc).await;

        let project = svc.create_project(Some("Ash and Salt")).await.unwrap();

        assert!(project.id.starts_with("prj-"));
        assert_eq!(project.title, "Ash and Salt");
        assert_eq!(project.stage, ProjectStage::New);
        assert!(!project.is_public);

        let fetched = svc.get_project(&project.id).await.unwrap();
        assert_eq!(fetched.stage, ProjectStage::New);
    }

    #[tokio::test]
    async fn create_project_default_title() {
        let svc = test_service().await;
        register_account(&svc).await;

        let project = svc.create_project(None).await.unwrap();
        assert_eq!(project.title, "Untitled Manuscript");
    }

    #[tokio::test]
    async fn create_project_requires_registration() {
        let svc = test_service().await;
        let result = svc.create_project(None).await;
        assert!(result.is_err(), "unregistered account should hit the FK");
    }

    #[tokio::test]
    async fn rename_project() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();

        let renamed = svc
            .rename_project(&project.id, "The Glass Orchard")
            .await
            .unwrap();
        assert_eq!(renamed.title, "The Glass Orchard");
    }

    #[tokio::test]
    async fn publish_and_unpublish() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();

        let published = svc
            .set_project_visibility(&project.id, true)
            .await
            .unwrap();
        assert!(published.is_public);

        let unpublished = svc
            .set_project_visibility(&project.id, false)
            .await
            .unwrap();
        assert!(!unpublished.is_public);
    }

    #[tokio::test]
    async fn list_projects_scoped_and_ordered() {
        let svc = test_service().await;
        register_account(&svc).await;

        svc.create_project(Some("First")).await.unwrap();
        let second = svc.create_project(Some("Second")).await.unwrap();
        // Touch the second project so it sorts first
        svc.rename_project(&second.id, "Second, revised")
            .await
            .unwrap();

        let projects = svc.list_projects(10).await.unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].title, "Second, revised");
    }

    #[tokio::test]
    async fn refresh_on_fresh_project_is_noop() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();

        let overview = svc.refresh_project_stage(&project.id).await.unwrap();
        assert_eq!(overview.project.stage, ProjectStage::New);
        assert_eq!(overview.message_count, 0);
        assert_eq!(overview.letter_count, 0);
        // No write happened: the timestamp is byte-identical
        assert_eq!(overview.project.updated_at, project.updated_at);
    }

    #[tokio::test]
    async fn stage_never_reverts() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();

        let advanced = svc
            .advance_project_stage(&project.id, ProjectStage::Sent)
            .await
            .unwrap();
        assert_eq!(advanced.stage, ProjectStage::Sent);

        // Resolver sees zero letters and zero messages, but must not demote
        let overview = svc.refresh_project_stage(&project.id).await.unwrap();
        assert_eq!(overview.project.stage, ProjectStage::Sent);
        assert_eq!(overview.project.updated_at, advanced.updated_at);
    }

    #[tokio::test]
    async fn advance_to_lower_stage_is_noop() {
        let svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(None).await.unwrap();

        svc.advance_project_stage(&project.id, ProjectStage::Sent)
            .await
            .unwrap();
        let unchanged = svc
            .advance_project_stage(&project.id, ProjectStage::Drafting)
            .await
            .unwrap();
        assert_eq!(unchanged.stage, ProjectStage::Sent);
    }

    #[tokio::test]
    async fn projects_invisible_across_accounts() {
        let mut svc = test_service().await;
        register_account(&svc).await;
        let project = svc.create_project(Some("Mine")).await.unwrap();

        svc.set_account("rival");
        svc.create_profile(crate::updates::profile::ProfileUpdate::default())
            .await
            .unwrap();

        let result = svc.get_project(&project.id).await;
        assert!(matches!(result, Err(DatabaseError::NoResult)));

        let listed = svc.list_projects(10).await.unwrap();
        assert!(listed.is_empty());

        let rename = svc.rename_project(&project.id, "Stolen").await;
        assert!(matches!(rename, Err(DatabaseError::NoResult)));

        // The owner still sees the untouched title
        svc.set_account("tester");
        let mine = svc.get_project(&project.id).await.unwrap();
        assert_eq!(mine.title, "Mine");
    }
}
