//! Skill matching between language-service entities and a resume's skill list.

use std::collections::HashSet;

use serde::Serialize;

use crate::language_client::{DocumentSentiment, Entity, EntityType};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatch {
    pub skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// The service has no skill tag; untyped entities are where skills land.
pub fn skill_candidates(entities: &[Entity]) -> Vec<String> {
    entities
        .iter()
        .filter(|e| matches!(e.entity_type, EntityType::Unknown | EntityType::Other))
        .map(|e| e.name.clone())
        .collect()
}

/// Partitions `skills` by exact membership in `resume_skills`, preserving order.
pub fn match_skills(skills: Vec<String>, resume_skills: &[String]) -> SkillMatch {
    let owned: HashSet<&str> = resume_skills.iter().map(String::as_str).collect();
    let (matching_skills, missing_skills): (Vec<_>, Vec<_>) = skills
        .iter()
        .cloned()
        .partition(|skill| owned.contains(skill.as_str()));

    SkillMatch {
        skills,
        matching_skills,
        missing_skills,
    }
}

pub fn tone_label(sentiment: &DocumentSentiment) -> &'static str {
    if sentiment.score > 0.0 {
        "Positive"
    } else {
        "Neutral"
    }
}

pub fn render_analysis(skill_match: &SkillMatch, sentiment: &DocumentSentiment) -> String {
    format!(
        "Based on my analysis of the job description:\n\
         \n\
         1. Skills Match:\n   \
         - You have {} matching skills: {}\n   \
         - Consider highlighting these skills in your application\n\
         \n\
         2. Areas for Development:\n   \
         - The role requires these additional skills: {}\n   \
         - Consider acquiring or emphasizing experience in these areas\n\
         \n\
         3. Job Sentiment:\n   \
         - Overall tone: {}\n   \
         - Key requirements identified: {}\n\
         \n\
         Would you like me to help you tailor your resume for this position or generate a \
         customized cover letter?",
        skill_match.matching_skills.len(),
        skill_match.matching_skills.join(", "),
        skill_match.missing_skills.join(", "),
        tone_label(sentiment),
        skill_match.skills.len(),
    )
}
