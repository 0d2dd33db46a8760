//! JobPostingExtractor: free-text posting → `JobDetails`.
//!
//! Steps, each independently best-effort:
//! 1. entity recognition (remote): first ORGANIZATION → company, first LOCATION → location
//! 2. position rule cascade
//! 3. work-type table
//! 4. visa flag
//! 5. foreigners flag (implied by visa)
//! 6. logo URL from a guessed domain
//! 7. placeholder salary band
//!
//! `extract` never returns an error. A failed collaborator call only leaves
//! its fields absent.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::extraction::enrichment::{logo_for_company, placeholder_salary_range};
use crate::extraction::job_details::JobDetails;
use crate::extraction::position::detect_position;
use crate::extraction::signals::{detect_foreigners_ok, detect_visa_sponsorship};
use crate::extraction::work_type::classify_work_type;
use crate::language_client::{Entity, EntityRecognizer, EntityType};

#[derive(Clone)]
pub struct JobPostingExtractor {
    recognizer: Arc<dyn EntityRecognizer>,
    logo_service_url: String,
}

impl JobPostingExtractor {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>, logo_service_url: String) -> Self {
        Self {
            recognizer,
            logo_service_url,
        }
    }

    pub async fn extract(&self, text: &str) -> JobDetails {
        let entities = match self.recognizer.analyze_entities(text).await {
            Ok(entities) => entities,
            Err(e) => {
                warn!("Entity recognition failed, continuing without entities: {e}");
                Vec::new()
            }
        };

        let company_name = first_entity_named(&entities, EntityType::Organization);
        let location = first_entity_named(&entities, EntityType::Location);
        let position_name = detect_position(text);
        let work_type = classify_work_type(text);
        let visa_sponsorship = detect_visa_sponsorship(text);
        let foreigners_ok = detect_foreigners_ok(text, visa_sponsorship);

        let company_logo = company_name
            .as_deref()
            .and_then(|name| logo_for_company(&self.logo_service_url, name));

        let salary_range = match (&company_name, &position_name) {
            (Some(_), Some(position)) => placeholder_salary_range(position).map(str::to_string),
            _ => None,
        };

        debug!(
            company = company_name.is_some(),
            position = position_name.is_some(),
            location = location.is_some(),
            work_type = ?work_type,
            visa_sponsorship,
            foreigners_ok,
            "Job posting extracted"
        );

        JobDetails {
            company_name,
            position_name,
            location,
            work_type,
            salary_range,
            visa_sponsorship,
            foreigners_ok,
            company_logo,
        }
    }
}

/// First entity of `kind` in service order with a non-blank name.
fn first_entity_named(entities: &[Entity], kind: EntityType) -> Option<String> {
    entities
        .iter()
        .filter(|e| e.entity_type == kind)
        .map(|e| e.name.trim())
        .find(|name| !name.is_empty())
        .map(str::to_string)
}
