//! Boolean hiring signals derived from keyword presence.

const VISA_KEYWORDS: &[&str] = &["visa", "sponsorship", "work authorization"];

/// "remote" also drives work-type classification; both read the same text
/// independently.
const INTERNATIONAL_KEYWORDS: &[&str] = &["international", "global", "remote"];

fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| lower.contains(kw))
}

/// True when the posting mentions visas, sponsorship or work authorization.
pub fn detect_visa_sponsorship(text: &str) -> bool {
    contains_any(&text.to_lowercase(), VISA_KEYWORDS)
}

/// True when the posting reads as open to international candidates.
/// A visa signal implies this one.
pub fn detect_foreigners_ok(text: &str, visa_sponsorship: bool) -> bool {
    visa_sponsorship || contains_any(&text.to_lowercase(), INTERNATIONAL_KEYWORDS)
}
