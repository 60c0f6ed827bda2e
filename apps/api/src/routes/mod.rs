pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feedback::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let feedback =
        post(handlers::handle_feedback).fallback(handlers::handle_method_not_allowed);

    Router::new()
        .route("/health", get(health::health_handler))
        // Feedback API
        .route("/api/v1/feedback", feedback.clone())
        // Path used by the existing front-end when hosted as a Netlify function
        .route("/.netlify/functions/gemini", feedback)
        .with_state(state)
}
