// Job-posting extraction: gate, rule cascades, enrichment, and the extractor
// that composes them. Only `extractor` talks to the language service.

pub mod enrichment;
pub mod extractor;
pub mod gate;
pub mod job_details;
pub mod position;
pub mod signals;
pub mod work_type;

pub use extractor::JobPostingExtractor;
pub use job_details::JobDetails;
