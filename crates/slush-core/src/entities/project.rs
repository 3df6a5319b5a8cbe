use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ProjectStage;

/// A tracked manuscript submission effort, owned by one account.
///
/// `stage` is derived from related data (see the stage resolver); it is never
/// set directly and only ever advances.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub owner_username: String,
    pub title: String,
    pub stage: ProjectStage,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
