use std::sync::Arc;

use crate::auth::StateStore;
use crate::config::Config;
use crate::extraction::JobPostingExtractor;
use crate::language_client::EntityRecognizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Entity/sentiment collaborator. The extractor holds its own handle to the same client.
    pub recognizer: Arc<dyn EntityRecognizer>,
    pub extractor: JobPostingExtractor,
    /// OAuth CSRF tokens. In-memory unless REDIS_URL is set.
    pub state_store: Arc<dyn StateStore>,
}

impl AppState {
    pub fn new(
        config: Config,
        recognizer: Arc<dyn EntityRecognizer>,
        state_store: Arc<dyn StateStore>,
    ) -> Self {
        let extractor =
            JobPostingExtractor::new(recognizer.clone(), config.logo_service_url.clone());
        Self {
            config,
            recognizer,
            extractor,
            state_store,
        }
    }
}
