use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One row of the `interviews` collection.
///
/// Interviews are created by the intake flow and are read-only here.
/// `data` carries the open-ended fields that flow wrote (role, level,
/// tech stack, question list) without this service needing to know them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub finalized: bool,
    pub data: Value,
    pub created_at: DateTime<Utc>,
}
