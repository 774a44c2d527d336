use std::sync::Arc;

use sqlx::PgPool;

use crate::feedback::evaluator::FeedbackEvaluator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Carries only what request handling needs; startup-only settings stay in `main`.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable evaluator over the structured LLM call. Production uses
    /// `LlmFeedbackEvaluator`; tests swap in a mock.
    pub evaluator: Arc<dyn FeedbackEvaluator>,
}
