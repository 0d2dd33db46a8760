use crate::extraction::job_details::WorkType;

/// Ordered keyword table. Earlier rows take priority: a posting that says
/// both "remote" and "office" is remote.
const WORK_TYPE_RULES: &[(WorkType, &[&str])] = &[
    (WorkType::Remote, &["remote"]),
    (WorkType::Hybrid, &["hybrid"]),
    (WorkType::Onsite, &["onsite", "office"]),
];

/// Case-insensitive substring classification of the work arrangement.
pub fn classify_work_type(text: &str) -> Option<WorkType> {
    let lower = text.to_lowercase();
    WORK_TYPE_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(work_type, _)| *work_type)
}
