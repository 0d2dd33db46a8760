use std::sync::LazyLock;

use regex::Regex;

/// Messages must be strictly longer than this (in characters) to count as a posting.
pub const MIN_POSTING_CHARS: usize = 200;

static POSTING_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)job description|position|role|we are hiring|we're looking for|requirements|responsibilities",
    )
    .expect("posting keyword pattern must compile")
});

/// Decides whether a chat message should go through job-posting extraction.
/// Both a keyword hit and the length threshold are required.
pub fn is_job_posting(message: &str) -> bool {
    POSTING_KEYWORDS.is_match(message) && message.chars().count() > MIN_POSTING_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad_to(prefix: &str, len: usize) -> String {
        let mut s = prefix.to_string();
        while s.chars().count() < len {
            s.push_str(" lorem");
        }
        s.chars().take(len).collect()
    }

    #[test]
    fn test_short_message_with_keyword_is_not_posting() {
        let msg = pad_to("What role should I aim for?", 50);
        assert_eq!(msg.chars().count(), 50);
        assert!(!is_job_posting(&msg));
    }

    #[test]
    fn test_long_message_without_keyword_is_not_posting() {
        let msg = pad_to("I had a long day and want to vent a little", 250);
        assert!(!POSTING_KEYWORDS.is_match(&msg));
        assert!(!is_job_posting(&msg));
    }

    #[test]
    fn test_long_message_with_keyword_is_posting() {
        let msg = pad_to("Responsibilities include owning the billing service", 250);
        assert!(is_job_posting(&msg));
    }

    #[test]
    fn test_threshold_is_strict() {
        let exactly = pad_to("Requirements:", MIN_POSTING_CHARS);
        assert!(!is_job_posting(&exactly));
        let over = pad_to("Requirements:", MIN_POSTING_CHARS + 1);
        assert!(is_job_posting(&over));
    }
}
