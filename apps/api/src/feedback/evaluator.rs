//! Feedback evaluation — trait-based seam over the structured LLM call.
//!
//! `AppState` holds an `Arc<dyn FeedbackEvaluator>` so the handler pipeline
//! can be exercised against a mock without a live provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::feedback::prompts::{
    build_evaluation_prompt, feedback_response_schema, EVALUATION_SYSTEM,
};
use crate::llm_client::LlmClient;
use crate::models::feedback::FeedbackDraft;

/// A single `(role, content)` turn of the interview transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptTurn {
    pub role: String,
    pub content: String,
}

/// Concatenates transcript turns into the labeled block the prompt embeds.
pub fn format_transcript(transcript: &[TranscriptTurn]) -> String {
    transcript
        .iter()
        .map(|turn| format!("- {}: {}\n", turn.role, turn.content))
        .collect()
}

/// The evaluator trait. Implement this to swap the model backend without
/// touching the handler or store code.
#[async_trait]
pub trait FeedbackEvaluator: Send + Sync {
    /// Evaluates a formatted transcript block into a structured draft.
    async fn evaluate(&self, transcript_block: &str) -> Result<FeedbackDraft, AppError>;
}

/// Production evaluator backed by the Gemini structured-output call.
pub struct LlmFeedbackEvaluator {
    llm: LlmClient,
}

impl LlmFeedbackEvaluator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl FeedbackEvaluator for LlmFeedbackEvaluator {
    async fn evaluate(&self, transcript_block: &str) -> Result<FeedbackDraft, AppError> {
        let prompt = build_evaluation_prompt(transcript_block);
        let schema = feedback_response_schema();

        let draft: FeedbackDraft = self
            .llm
            .call_json(&prompt, EVALUATION_SYSTEM, Some(&schema))
            .await?;

        Ok(draft)
    }
}

/// Mock evaluator returning a canned draft, for pipeline tests.
#[cfg(test)]
pub struct CannedEvaluator(pub FeedbackDraft);

#[cfg(test)]
#[async_trait]
impl FeedbackEvaluator for CannedEvaluator {
    async fn evaluate(&self, _transcript_block: &str) -> Result<FeedbackDraft, AppError> {
        Ok(self.0.clone())
    }
}
