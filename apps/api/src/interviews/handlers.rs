use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interviews::queries::{
    get_interview_by_id, get_interviews_by_user, get_latest_interviews, DEFAULT_LATEST_LIMIT,
};
use crate::models::interview::InterviewRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LatestInterviewsQuery {
    pub user_id: Uuid,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LATEST_LIMIT
}

/// GET /api/v1/interviews/:id
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewRow>, AppError> {
    let interview = get_interview_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))?;

    Ok(Json(interview))
}

/// GET /api/v1/interviews/latest
pub async fn handle_latest_interviews(
    State(state): State<AppState>,
    Query(params): Query<LatestInterviewsQuery>,
) -> Result<Json<Vec<InterviewRow>>, AppError> {
    let interviews = get_latest_interviews(&state.db, params.user_id, params.limit).await?;
    Ok(Json(interviews))
}

/// GET /api/v1/users/:user_id/interviews
pub async fn handle_user_interviews(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<InterviewRow>>, AppError> {
    let interviews = get_interviews_by_user(&state.db, user_id).await?;
    Ok(Json(interviews))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_query_limit_defaults_to_twenty() {
        let params: LatestInterviewsQuery = serde_json::from_str(
            r#"{"user_id": "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d"}"#,
        )
        .unwrap();

        assert_eq!(params.limit, 20);
    }

    #[test]
    fn test_latest_query_limit_can_be_overridden() {
        let params: LatestInterviewsQuery = serde_json::from_str(
            r#"{"user_id": "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d", "limit": 5}"#,
        )
        .unwrap();

        assert_eq!(params.limit, 5);
    }
}
