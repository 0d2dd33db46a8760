//! Axum handler for the assistant chat.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chat::replies::conversational_reply;
use crate::chat::summary::render_job_summary;
use crate::errors::AppError;
use crate::extraction::gate::is_job_posting;
use crate::extraction::JobDetails;
use crate::state::AppState;

/// Prior turns kept as context for a conversational reply.
const CONTEXT_WINDOW_TURNS: usize = 5;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    /// Accepted for parity with the editor client; not consulted here.
    #[serde(default)]
    pub resume: Option<serde_json::Value>,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub is_job_description: bool,
    pub job_details: Option<JobDetails>,
    pub detected: bool,
}

/// POST /api/chat
///
/// Long messages that read like a job posting are run through the extractor
/// and answered with a field summary. Anything else gets a canned reply.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = request
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Missing message".to_string()))?;

    let is_job_description = is_job_posting(&message);

    let (response, job_details) = if is_job_description {
        info!("Chat message classified as job posting ({} chars)", message.chars().count());
        let details = state.extractor.extract(&message).await;
        (render_job_summary(&details), Some(details))
    } else {
        let context = conversation_context(&request.conversation_history);
        debug!(
            turns = request.conversation_history.len().min(CONTEXT_WINDOW_TURNS),
            context_chars = context.len(),
            has_resume = request.resume.is_some(),
            "Answering conversational message"
        );
        (conversational_reply(&message).to_string(), None)
    };

    Ok(Json(ChatResponse {
        response,
        is_job_description,
        job_details,
        detected: is_job_description,
    }))
}

/// The last few turns as `role: content` lines, oldest first.
pub fn conversation_context(history: &[ChatTurn]) -> String {
    let start = history.len().saturating_sub(CONTEXT_WINDOW_TURNS);
    history[start..]
        .iter()
        .map(|turn| format!("{}: {}", turn.role, turn.content))
        .collect::<Vec<_>>()
        .join("\n")
}
