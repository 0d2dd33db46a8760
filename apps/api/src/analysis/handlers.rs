use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::skills::{match_skills, render_analysis, skill_candidates, SkillMatch};
use crate::errors::AppError;
use crate::state::AppState;

/// A resume skill as the editor sends it: a bare name, or a `Skill` record
/// (`{"id", "name", "level"}`) of which only the name is compared.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ResumeSkill {
    Name(String),
    Entry { name: String },
}

impl ResumeSkill {
    pub fn into_name(self) -> String {
        match self {
            ResumeSkill::Name(name) | ResumeSkill::Entry { name } => name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ResumeSkills {
    #[serde(default)]
    pub skills: Vec<ResumeSkill>,
}

impl ResumeSkills {
    pub fn names(self) -> Vec<String> {
        self.skills.into_iter().map(ResumeSkill::into_name).collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeJobRequest {
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub resume: Option<ResumeSkills>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeJobResponse {
    pub analysis: String,
    #[serde(flatten)]
    pub skill_match: SkillMatch,
}

/// POST /api/analyze-job
///
/// Compares skill-like entities in a posting with the resume's skill list.
/// Unlike chat extraction, a language-service failure fails the request.
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeJobRequest>,
) -> Result<Json<AnalyzeJobResponse>, AppError> {
    let (job_description, resume) = match (request.job_description, request.resume) {
        (Some(jd), Some(resume)) if !jd.trim().is_empty() => (jd, resume),
        _ => return Err(AppError::Validation("Missing required fields".to_string())),
    };

    let entities = state.recognizer.analyze_entities(&job_description).await?;
    let sentiment = state.recognizer.analyze_sentiment(&job_description).await?;

    let skill_match = match_skills(skill_candidates(&entities), &resume.names());
    let analysis = render_analysis(&skill_match, &sentiment);

    Ok(Json(AnalyzeJobResponse {
        analysis,
        skill_match,
    }))
}
