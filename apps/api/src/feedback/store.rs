//! Feedback persistence — one upsert path, one lookup path.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::feedback::FeedbackRow;

/// Writes a feedback row, overwriting any existing row with the same id.
/// Overwrites are last-write-wins; storage does not enforce uniqueness
/// per `(interview_id, user_id)`.
pub async fn upsert_feedback(pool: &PgPool, row: &FeedbackRow) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO feedback
            (id, interview_id, user_id, total_score, category_scores,
             strengths, areas_for_improvement, final_assessment, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (id) DO UPDATE SET
            interview_id = EXCLUDED.interview_id,
            user_id = EXCLUDED.user_id,
            total_score = EXCLUDED.total_score,
            category_scores = EXCLUDED.category_scores,
            strengths = EXCLUDED.strengths,
            areas_for_improvement = EXCLUDED.areas_for_improvement,
            final_assessment = EXCLUDED.final_assessment,
            created_at = EXCLUDED.created_at
        "#,
    )
    .bind(row.id)
    .bind(row.interview_id)
    .bind(row.user_id)
    .bind(row.total_score)
    .bind(&row.category_scores)
    .bind(&row.strengths)
    .bind(&row.areas_for_improvement)
    .bind(&row.final_assessment)
    .bind(row.created_at)
    .execute(pool)
    .await?;

    info!(
        "Wrote feedback {} for interview {} (user {})",
        row.id, row.interview_id, row.user_id
    );
    Ok(())
}

/// Returns the canonical feedback row for an `(interview_id, user_id)` pair.
/// At most one row is treated as canonical by convention (`LIMIT 1`).
pub async fn get_feedback_by_interview(
    pool: &PgPool,
    interview_id: Uuid,
    user_id: Uuid,
) -> Result<Option<FeedbackRow>, AppError> {
    Ok(sqlx::query_as::<_, FeedbackRow>(
        "SELECT * FROM feedback WHERE interview_id = $1 AND user_id = $2 LIMIT 1",
    )
    .bind(interview_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;

    fn feedback_row(
        id: Uuid,
        interview_id: Uuid,
        user_id: Uuid,
        total_score: f64,
        assessment: &str,
    ) -> FeedbackRow {
        FeedbackRow {
            id,
            interview_id,
            user_id,
            total_score,
            category_scores: json!({ "Communication Skills": total_score }),
            strengths: vec!["X".to_string()],
            areas_for_improvement: vec!["Y".to_string()],
            final_assessment: assessment.to_string(),
            created_at: Utc::now(),
        }
    }

    #[sqlx::test]
    async fn test_upsert_writes_exactly_one_row(pool: PgPool) {
        let row = feedback_row(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), 80.0, "Z");

        upsert_feedback(&pool, &row).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedback")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);

        let stored = get_feedback_by_interview(&pool, row.interview_id, row.user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.id, row.id);
        assert_eq!(stored.total_score, 80.0);
        assert_eq!(stored.category_scores["Communication Skills"], 80.0);
        assert_eq!(stored.strengths, vec!["X"]);
        assert_eq!(stored.areas_for_improvement, vec!["Y"]);
        assert_eq!(stored.final_assessment, "Z");
    }

    #[sqlx::test]
    async fn test_upsert_same_id_overwrites_not_duplicates(pool: PgPool) {
        let id = Uuid::new_v4();
        let interview_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        upsert_feedback(&pool, &feedback_row(id, interview_id, user_id, 60.0, "First pass"))
            .await
            .unwrap();
        upsert_feedback(&pool, &feedback_row(id, interview_id, user_id, 85.0, "Second pass"))
            .await
            .unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedback")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);

        let stored = get_feedback_by_interview(&pool, interview_id, user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.total_score, 85.0);
        assert_eq!(stored.final_assessment, "Second pass");
    }

    #[sqlx::test]
    async fn test_lookup_requires_both_interview_and_user_to_match(pool: PgPool) {
        let row = feedback_row(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), 80.0, "Z");
        upsert_feedback(&pool, &row).await.unwrap();

        let wrong_user = get_feedback_by_interview(&pool, row.interview_id, Uuid::new_v4())
            .await
            .unwrap();
        assert!(wrong_user.is_none());

        let wrong_interview = get_feedback_by_interview(&pool, Uuid::new_v4(), row.user_id)
            .await
            .unwrap();
        assert!(wrong_interview.is_none());
    }
}
