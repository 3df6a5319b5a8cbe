use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MessageRole;

/// One guidance transcript entry for a project. Ordered by the per-project
/// `seq` counter, not by creation time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub project_id: String,
    pub role: MessageRole,
    pub body: String,
    pub seq: i64,
    pub created_at: DateTime<Utc>,
}
