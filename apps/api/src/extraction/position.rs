//! Position-title detection as an ordered cascade of regex rules.
//!
//! Rules are tried in declaration order and the first rule whose capture
//! survives trimming wins. Later rules are never consulted after a hit.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// A single named extraction rule. Capture group 1 is the position title.
pub struct PositionRule {
    pub name: &'static str,
    pattern: Regex,
}

impl PositionRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("position rule pattern must compile"),
        }
    }

    /// Returns the trimmed capture, or `None` when the rule does not match or
    /// captures only whitespace or a bare article.
    pub fn apply(&self, text: &str) -> Option<String> {
        let caps = self.pattern.captures(text)?;
        let title = caps.get(1)?.as_str().trim();
        if title.is_empty() || is_article(title) {
            None
        } else {
            Some(title.to_string())
        }
    }
}

fn is_article(word: &str) -> bool {
    word.eq_ignore_ascii_case("a") || word.eq_ignore_ascii_case("an")
}

static POSITION_RULES: LazyLock<Vec<PositionRule>> = LazyLock::new(|| {
    vec![
        // "We are looking for a Backend Engineer who ..." / "Role: Data Analyst."
        PositionRule::new(
            "hiring_phrase",
            r"(?i)(?:we are looking for|we're hiring|position:|role:)\s*(?:an?\s+)?([a-z\s]+?)\s*(?:\bwith\b|\bwho\b|\bthat\b|\.|$)",
        ),
        // "Senior Platform Engineer with ..." captures "Platform Engineer"
        PositionRule::new(
            "seniority_prefix",
            r"(?i)\b(?:senior|junior|lead|principal|staff)\s+([a-z\s]+?)\s*(?:\bwith\b|\bwho\b|\bthat\b|\.|$)",
        ),
        // Run of capitalized words ending in a title noun: "Machine Learning Scientist"
        PositionRule::new(
            "title_noun",
            r"\b((?:[A-Z][a-zA-Z]*[ \t]+)*(?:Engineer|Developer|Designer|Manager|Analyst|Scientist|Architect))\b",
        ),
    ]
});

/// The rule cascade in evaluation order.
pub fn position_rules() -> &'static [PositionRule] {
    &POSITION_RULES
}

/// First-match-wins position title detection.
pub fn detect_position(text: &str) -> Option<String> {
    position_rules().iter().find_map(|rule| {
        let title = rule.apply(text)?;
        debug!(rule = rule.name, "Position rule matched");
        Some(title)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> &'static PositionRule {
        position_rules()
            .iter()
            .find(|r| r.name == name)
            .expect("rule exists")
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let names: Vec<_> = position_rules().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["hiring_phrase", "seniority_prefix", "title_noun"]);
    }

    #[test]
    fn test_hiring_phrase_stops_at_stop_word() {
        let text = "We are looking for a Rust Developer who loves systems work.";
        assert_eq!(
            rule("hiring_phrase").apply(text).as_deref(),
            Some("Rust Developer")
        );
    }

    #[test]
    fn test_hiring_phrase_label_stops_at_sentence_end() {
        let text = "Position: Data Analyst. Apply by Friday";
        assert_eq!(
            rule("hiring_phrase").apply(text).as_deref(),
            Some("Data Analyst")
        );
    }

    #[test]
    fn test_hiring_phrase_runs_to_end_of_text() {
        let text = "we're hiring backend developers";
        assert_eq!(
            rule("hiring_phrase").apply(text).as_deref(),
            Some("backend developers")
        );
    }

    #[test]
    fn test_whitespace_only_capture_is_not_a_match() {
        assert_eq!(rule("hiring_phrase").apply("role:   ."), None);
        assert_eq!(detect_position("role:   ."), None);
    }

    #[test]
    fn test_seniority_prefix_captures_words_after_prefix() {
        let text = "Senior Platform Engineer with Kubernetes experience";
        assert_eq!(
            rule("seniority_prefix").apply(text).as_deref(),
            Some("Platform Engineer")
        );
        assert_eq!(detect_position(text).as_deref(), Some("Platform Engineer"));
    }

    #[test]
    fn test_seniority_prefix_requires_word_boundary() {
        assert_eq!(rule("seniority_prefix").apply("Our misleading docs."), None);
    }

    #[test]
    fn test_article_only_capture_is_not_a_match() {
        assert_eq!(rule("hiring_phrase").apply("we are looking for an"), None);
        assert_eq!(rule("hiring_phrase").apply("Role: A."), None);
        assert_eq!(detect_position("we are looking for an"), None);
    }

    #[test]
    fn test_article_only_capture_falls_through() {
        let text = "We are looking for an. Lead Data Scientist with SQL depth";
        assert_eq!(detect_position(text).as_deref(), Some("Data Scientist"));
    }

    #[test]
    fn test_title_noun_picks_capitalized_run() {
        let text = "Join us as Backend Engineer in Berlin, 3 days a week";
        assert_eq!(
            rule("title_noun").apply(text).as_deref(),
            Some("Backend Engineer")
        );
    }

    #[test]
    fn test_title_noun_ignores_lowercase_noun() {
        assert_eq!(rule("title_noun").apply("every engineer here ships"), None);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let text = "Role: Product Designer. You will pair with our Senior Data Scientist daily";
        assert_eq!(detect_position(text).as_deref(), Some("Product Designer"));
    }

    #[test]
    fn test_falls_through_to_later_rules() {
        let text = "Acme needs a Staff Engineer, 100% async, 4 day week";
        // hiring_phrase has no trigger; seniority_prefix cannot reach a stop
        // before the comma, so title_noun decides.
        assert_eq!(detect_position(text).as_deref(), Some("Staff Engineer"));
    }

    #[test]
    fn test_no_trigger_means_absent() {
        assert_eq!(detect_position("Great team, nice office, free lunch."), None);
        assert_eq!(detect_position(""), None);
    }
}
