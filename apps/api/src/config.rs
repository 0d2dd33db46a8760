use anyhow::{Context, Result};

const DEFAULT_LANGUAGE_API_URL: &str = "https://language.googleapis.com/v1";
const DEFAULT_LOGO_SERVICE_URL: &str = "https://logo.clearbit.com";
const DEFAULT_LINKEDIN_REDIRECT_URI: &str = "https://atsproofedcv.com/api/auth/linkedin/callback";
const DEFAULT_FRONTEND_URL: &str = "https://atsproofedcv.com";
const DEFAULT_OAUTH_STATE_TTL_SECS: u64 = 600;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub language_api_key: String,
    pub language_api_url: String,
    pub logo_service_url: String,
    pub linkedin_client_id: String,
    pub linkedin_redirect_uri: String,
    pub frontend_url: String,
    pub oauth_state_ttl_secs: u64,
    /// When unset, OAuth state tokens live in process memory.
    pub redis_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            language_api_key: require_env("LANGUAGE_API_KEY")?,
            language_api_url: env_or("LANGUAGE_API_URL", DEFAULT_LANGUAGE_API_URL),
            logo_service_url: env_or("LOGO_SERVICE_URL", DEFAULT_LOGO_SERVICE_URL),
            linkedin_client_id: require_env("LINKEDIN_CLIENT_ID")?,
            linkedin_redirect_uri: env_or("LINKEDIN_REDIRECT_URI", DEFAULT_LINKEDIN_REDIRECT_URI),
            frontend_url: env_or("FRONTEND_URL", DEFAULT_FRONTEND_URL),
            oauth_state_ttl_secs: match std::env::var("OAUTH_STATE_TTL_SECS") {
                Ok(raw) => raw
                    .parse::<u64>()
                    .context("OAUTH_STATE_TTL_SECS must be a whole number of seconds")?,
                Err(_) => DEFAULT_OAUTH_STATE_TTL_SECS,
            },
            redis_url: std::env::var("REDIS_URL").ok().filter(|v| !v.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Fixed configuration for handler tests; never touches the environment.
    pub fn for_tests() -> Self {
        Config {
            language_api_key: "test-key".to_string(),
            language_api_url: DEFAULT_LANGUAGE_API_URL.to_string(),
            logo_service_url: DEFAULT_LOGO_SERVICE_URL.to_string(),
            linkedin_client_id: "test-client".to_string(),
            linkedin_redirect_uri: DEFAULT_LINKEDIN_REDIRECT_URI.to_string(),
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            oauth_state_ttl_secs: DEFAULT_OAUTH_STATE_TTL_SECS,
            redis_url: None,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}
