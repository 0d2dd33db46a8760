//! Canned conversational replies for messages that are not job postings.

use std::sync::LazyLock;

use regex::Regex;

const GREETING_REPLY: &str = "Hello! I'm here to help you with your job applications. You can paste a job description, ask questions about your resume, or get advice on your career. What would you like to talk about?";
const RESUME_REPLY: &str = "I'd be happy to help with your resume! You can ask me to analyze it, suggest improvements, or help tailor it for specific positions. What would you like me to focus on?";
const INTERVIEW_REPLY: &str = "Interview preparation is crucial! I can help you practice common questions, prepare for specific roles, or give tips on how to present yourself. What type of interview are you preparing for?";
const SALARY_REPLY: &str = "Salary negotiation can be tricky. I can help you research market rates, prepare negotiation strategies, or understand compensation packages. What specific advice are you looking for?";
pub const DEFAULT_REPLY: &str = "I'm here to help with your job search! Whether you need resume advice, interview preparation, salary negotiation tips, or help with job applications, just let me know what you need assistance with.";

struct ReplyRule {
    trigger: Regex,
    reply: &'static str,
}

// Evaluated top to bottom; first hit wins.
static REPLY_RULES: LazyLock<Vec<ReplyRule>> = LazyLock::new(|| {
    [
        (r"(?i)hello|\bhi\b", GREETING_REPLY),
        (r"(?i)resume|\bcv\b", RESUME_REPLY),
        (r"(?i)interview", INTERVIEW_REPLY),
        (r"(?i)salary|compensation", SALARY_REPLY),
    ]
    .into_iter()
    .map(|(pattern, reply)| ReplyRule {
        trigger: Regex::new(pattern).expect("reply trigger must compile"),
        reply,
    })
    .collect()
});

pub fn conversational_reply(message: &str) -> &'static str {
    REPLY_RULES
        .iter()
        .find(|rule| rule.trigger.is_match(message))
        .map(|rule| rule.reply)
        .unwrap_or(DEFAULT_REPLY)
}
