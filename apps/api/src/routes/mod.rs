pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feedback::handlers as feedback_handlers;
use crate::interviews::handlers as interview_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/feedback",
            post(feedback_handlers::handle_create_feedback),
        )
        .route(
            "/api/v1/interviews/latest",
            get(interview_handlers::handle_latest_interviews),
        )
        .route(
            "/api/v1/interviews/:id",
            get(interview_handlers::handle_get_interview),
        )
        .route(
            "/api/v1/interviews/:id/feedback",
            get(feedback_handlers::handle_get_feedback),
        )
        .route(
            "/api/v1/users/:user_id/interviews",
            get(interview_handlers::handle_user_interviews),
        )
        .with_state(state)
}
