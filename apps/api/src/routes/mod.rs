pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze_job;
use crate::auth::handlers::{handle_linkedin_auth, handle_linkedin_callback};
use crate::chat::handlers::handle_chat;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assistant
        .route("/api/chat", post(handle_chat))
        .route("/api/analyze-job", post(handle_analyze_job))
        // LinkedIn OAuth
        .route("/api/v1/linkedin/auth", get(handle_linkedin_auth))
        .route("/api/v1/linkedin/callback", get(handle_linkedin_callback))
        .with_state(state)
}
