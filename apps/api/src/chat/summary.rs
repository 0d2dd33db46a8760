//! Chat text rendered for a detected job posting.
//!
//! The fallback phrases are shown verbatim by the chat UI.

use crate::extraction::JobDetails;

pub const COMPANY_FALLBACK: &str = "Not found";
pub const POSITION_FALLBACK: &str = "Not found";
pub const LOCATION_FALLBACK: &str = "Not specified";
pub const WORK_TYPE_FALLBACK: &str = "Not specified";
pub const SALARY_FALLBACK: &str = "Not available";
pub const VISA_FALLBACK: &str = "Not mentioned";
pub const FOREIGNERS_FALLBACK: &str = "Not clear";

pub fn render_job_summary(details: &JobDetails) -> String {
    let company = details.company_name.as_deref().unwrap_or(COMPANY_FALLBACK);
    let position = details.position_name.as_deref().unwrap_or(POSITION_FALLBACK);
    let location = details.location.as_deref().unwrap_or(LOCATION_FALLBACK);
    let work_type = details
        .work_type
        .map(|wt| wt.as_str())
        .unwrap_or(WORK_TYPE_FALLBACK);
    let salary = details.salary_range.as_deref().unwrap_or(SALARY_FALLBACK);
    let visa = if details.visa_sponsorship {
        "Yes"
    } else {
        VISA_FALLBACK
    };
    let foreigners = if details.foreigners_ok {
        "Likely yes"
    } else {
        FOREIGNERS_FALLBACK
    };

    format!(
        "I detected a job description! Here's what I extracted:\n\
         \n\
         **Company:** {company}\n\
         **Position:** {position}\n\
         **Location:** {location}\n\
         **Work Type:** {work_type}\n\
         **Salary Range:** {salary}\n\
         **Visa Sponsorship:** {visa}\n\
         **Open to Foreigners:** {foreigners}\n\
         \n\
         I've automatically filled in your application details. Would you like me to help \
         optimize your resume for this position or generate a tailored cover letter?"
    )
}
