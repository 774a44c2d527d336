//! Read-side queries over the `interviews` collection.
//! Interviews are created by the intake flow; nothing here writes them.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::interview::InterviewRow;

/// Default page size for the latest-interviews query.
pub const DEFAULT_LATEST_LIMIT: i64 = 20;

/// Fetches one interview by id.
pub async fn get_interview_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<InterviewRow>, AppError> {
    Ok(
        sqlx::query_as::<_, InterviewRow>("SELECT * FROM interviews WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?,
    )
}

/// Fetches the newest finalized interviews, excluding those owned by
/// `user_id`.
///
/// The limit is applied before the owner-exclusion filter, so the result may
/// hold fewer than `limit` rows even when more candidates exist. This matches
/// the upstream query convention; see DESIGN.md before changing it.
pub async fn get_latest_interviews(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
) -> Result<Vec<InterviewRow>, AppError> {
    let rows = sqlx::query_as::<_, InterviewRow>(
        "SELECT * FROM interviews WHERE finalized = TRUE ORDER BY created_at DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(exclude_owner(rows, user_id))
}

/// Fetches all interviews owned by a user, newest first, unbounded.
pub async fn get_interviews_by_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<InterviewRow>, AppError> {
    Ok(sqlx::query_as::<_, InterviewRow>(
        "SELECT * FROM interviews WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

/// Drops interviews owned by `user_id`, preserving order.
fn exclude_owner(rows: Vec<InterviewRow>, user_id: Uuid) -> Vec<InterviewRow> {
    rows.into_iter().filter(|r| r.user_id != user_id).collect()
}
