//! Best-effort enrichment of detected fields.
//!
//! Both helpers are pure and return `Option`; absence is the only failure mode.
//! Neither performs a lookup: the logo URL is built from a guessed domain and
//! never fetched, and the salary ranges are fixed placeholders, not market data.

/// Guesses `<name>.com` from a company name: lower-cased, with every
/// non-alphanumeric ASCII character removed. `None` if nothing survives.
pub fn guess_company_domain(company_name: &str) -> Option<String> {
    let clean: String = company_name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();

    if clean.is_empty() {
        None
    } else {
        Some(format!("{clean}.com"))
    }
}

/// Logo URL for a guessed domain on the configured logo service.
pub fn company_logo_url(logo_service_url: &str, domain: &str) -> String {
    format!("{}/{}", logo_service_url.trim_end_matches('/'), domain)
}

/// Convenience: name → logo URL, or `None` when no domain can be guessed.
pub fn logo_for_company(logo_service_url: &str, company_name: &str) -> Option<String> {
    guess_company_domain(company_name).map(|domain| company_logo_url(logo_service_url, &domain))
}

/// Illustrative salary band keyed on words in the position title.
/// Placeholder only: there is no salary data source behind this.
pub fn placeholder_salary_range(position_name: &str) -> Option<&'static str> {
    let position = position_name.to_lowercase();

    if position.contains("senior") && position.contains("engineer") {
        Some("$150,000 - $250,000")
    } else if position.contains("engineer") {
        Some("$100,000 - $180,000")
    } else if position.contains("designer") {
        Some("$80,000 - $150,000")
    } else if position.contains("manager") {
        Some("$120,000 - $200,000")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_guess_strips_punctuation_and_spaces() {
        assert_eq!(
            guess_company_domain("Acme Corp!!").as_deref(),
            Some("acmecorp.com")
        );
    }

    #[test]
    fn test_domain_guess_keeps_digits() {
        assert_eq!(
            guess_company_domain("Studio 54, Inc.").as_deref(),
            Some("studio54inc.com")
        );
    }

    #[test]
    fn test_domain_guess_empty_after_cleaning() {
        assert_eq!(guess_company_domain("!!! ---"), None);
        assert_eq!(guess_company_domain("Öö"), None);
    }

    #[test]
    fn test_logo_url_joins_without_double_slash() {
        assert_eq!(
            company_logo_url("https://logo.clearbit.com/", "acme.com"),
            "https://logo.clearbit.com/acme.com"
        );
        assert_eq!(
            logo_for_company("https://logo.clearbit.com", "Acme Corp!!").as_deref(),
            Some("https://logo.clearbit.com/acmecorp.com")
        );
    }

    #[test]
    fn test_salary_bands() {
        assert_eq!(
            placeholder_salary_range("Senior Backend Engineer"),
            Some("$150,000 - $250,000")
        );
        assert_eq!(
            placeholder_salary_range("Backend Engineer"),
            Some("$100,000 - $180,000")
        );
        assert_eq!(
            placeholder_salary_range("Product Designer"),
            Some("$80,000 - $150,000")
        );
        assert_eq!(
            placeholder_salary_range("Engineering Manager"),
            Some("$100,000 - $180,000")
        );
        assert_eq!(
            placeholder_salary_range("Product Manager"),
            Some("$120,000 - $200,000")
        );
        assert_eq!(placeholder_salary_range("Data Analyst"), None);
    }
}
