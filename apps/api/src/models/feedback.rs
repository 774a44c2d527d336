use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One row of the `feedback` collection.
///
/// Written (or overwritten, by explicit id) through the evaluation action;
/// never mutated afterward. There is no deletion path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FeedbackRow {
    pub id: Uuid,
    pub interview_id: Uuid,
    pub user_id: Uuid,
    pub total_score: f64,
    /// Category name → numeric score, stored as jsonb.
    pub category_scores: Value,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub final_assessment: String,
    pub created_at: DateTime<Utc>,
}

/// The structured evaluation returned by the model, before persistence.
/// Field names follow the provider-side schema (camelCase on the wire).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDraft {
    pub total_score: f64,
    pub category_scores: BTreeMap<String, f64>,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub final_assessment: String,
}

impl FeedbackRow {
    /// Builds the row to persist from a model draft. `created_at` is the
    /// server-generated timestamp, never taken from the model.
    pub fn from_draft(
        id: Uuid,
        interview_id: Uuid,
        user_id: Uuid,
        draft: FeedbackDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Self, serde_json::Error> {
        Ok(FeedbackRow {
            id,
            interview_id,
            user_id,
            total_score: draft.total_score,
            category_scores: serde_json::to_value(&draft.category_scores)?,
            strengths: draft.strengths,
            areas_for_improvement: draft.areas_for_improvement,
            final_assessment: draft.final_assessment,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_deserializes_from_wire_format() {
        let raw = r#"{
            "totalScore": 80,
            "categoryScores": {"Communication Skills": 85, "Technical Knowledge": 75},
            "strengths": ["X"],
            "areasForImprovement": ["Y"],
            "finalAssessment": "Z"
        }"#;
        let draft: FeedbackDraft = serde_json::from_str(raw).unwrap();

        assert_eq!(draft.total_score, 80.0);
        assert_eq!(draft.category_scores["Communication Skills"], 85.0);
        assert_eq!(draft.strengths, vec!["X"]);
        assert_eq!(draft.areas_for_improvement, vec!["Y"]);
        assert_eq!(draft.final_assessment, "Z");
    }

    #[test]
    fn test_draft_requires_final_assessment() {
        let raw = r#"{
            "totalScore": 80,
            "categoryScores": {},
            "strengths": [],
            "areasForImprovement": []
        }"#;
        assert!(serde_json::from_str::<FeedbackDraft>(raw).is_err());
    }

    #[test]
    fn test_row_from_draft_copies_all_fields() {
        let draft = FeedbackDraft {
            total_score: 80.0,
            category_scores: BTreeMap::from([("Problem-Solving".to_string(), 70.0)]),
            strengths: vec!["X".to_string()],
            areas_for_improvement: vec!["Y".to_string()],
            final_assessment: "Z".to_string(),
        };
        let id = Uuid::new_v4();
        let interview_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let now = Utc::now();

        let row = FeedbackRow::from_draft(id, interview_id, user_id, draft, now).unwrap();

        assert_eq!(row.id, id);
        assert_eq!(row.interview_id, interview_id);
        assert_eq!(row.user_id, user_id);
        assert_eq!(row.total_score, 80.0);
        assert_eq!(row.category_scores["Problem-Solving"], 70.0);
        assert_eq!(row.strengths, vec!["X"]);
        assert_eq!(row.areas_for_improvement, vec!["Y"]);
        assert_eq!(row.final_assessment, "Z");
        assert_eq!(row.created_at, now);
    }
}
