// All LLM prompt constants for the feedback evaluation call.

use serde_json::{json, Value};

/// System instruction for the evaluation call.
pub const EVALUATION_SYSTEM: &str =
    "You are a professional interviewer analyzing a mock interview. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// The five scoring categories. The prompt pins the model to exactly these.
pub const SCORING_CATEGORIES: [&str; 5] = [
    "Communication Skills",
    "Technical Knowledge",
    "Problem-Solving",
    "Cultural & Role Fit",
    "Confidence & Clarity",
];

/// Builds the evaluation prompt from the formatted transcript block.
pub fn build_evaluation_prompt(transcript_block: &str) -> String {
    let categories = SCORING_CATEGORIES
        .iter()
        .map(|c| format!("- {c}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an AI interviewer analyzing a mock interview. \
        Evaluate the candidate thoroughly.\n\
        Transcript:\n{transcript_block}\n\n\
        Score the candidate (0-100) in these categories only:\n{categories}"
    )
}

/// Response schema sent with the evaluation call, constraining the model to
/// the feedback draft shape.
pub fn feedback_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "totalScore": { "type": "NUMBER" },
            "categoryScores": {
                "type": "OBJECT",
                "properties": {
                    "Communication Skills": { "type": "NUMBER" },
                    "Technical Knowledge": { "type": "NUMBER" },
                    "Problem-Solving": { "type": "NUMBER" },
                    "Cultural & Role Fit": { "type": "NUMBER" },
                    "Confidence & Clarity": { "type": "NUMBER" }
                }
            },
            "strengths": { "type": "ARRAY", "items": { "type": "STRING" } },
            "areasForImprovement": { "type": "ARRAY", "items": { "type": "STRING" } },
            "finalAssessment": { "type": "STRING" }
        },
        "required": [
            "totalScore",
            "categoryScores",
            "strengths",
            "areasForImprovement",
            "finalAssessment"
        ]
    })
}
