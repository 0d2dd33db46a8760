//! LinkedIn OAuth redirects. Token exchange is not performed here; the
//! authorization code is handed to the frontend editor.

use axum::{
    extract::{Query, State},
    response::Redirect,
};
use reqwest::Url;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::state::AppState;

const LINKEDIN_AUTHORIZE_URL: &str = "https://www.linkedin.com/oauth/v2/authorization";
const LINKEDIN_SCOPES: &str = "r_liteprofile r_emailaddress w_member_social";

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// GET /api/v1/linkedin/auth
pub async fn handle_linkedin_auth(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let token = state.state_store.issue().await?;
    let url = authorization_url(&state.config, &token)?;
    Ok(Redirect::temporary(url.as_str()))
}

/// GET /api/v1/linkedin/callback
pub async fn handle_linkedin_callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<Redirect, AppError> {
    if let Some(error) = params.error {
        warn!("LinkedIn returned OAuth error: {error}");
        let message = params
            .error_description
            .unwrap_or_else(|| "Authentication failed".to_string());
        return frontend_redirect(&state.config, "error", "message", &message);
    }

    let state_valid = match params.state.as_deref() {
        Some(token) => state.state_store.consume(token).await?,
        None => false,
    };
    if !state_valid {
        warn!("Rejected LinkedIn callback with unknown or expired state");
        return frontend_redirect(&state.config, "error", "message", "Invalid state parameter");
    }

    match params.code {
        Some(code) if !code.is_empty() => {
            info!("LinkedIn authorization succeeded");
            frontend_redirect(&state.config, "editor", "code", &code)
        }
        _ => frontend_redirect(&state.config, "error", "message", "Missing authorization code"),
    }
}

pub fn authorization_url(config: &Config, state_token: &str) -> Result<Url, AppError> {
    Url::parse_with_params(
        LINKEDIN_AUTHORIZE_URL,
        &[
            ("response_type", "code"),
            ("client_id", config.linkedin_client_id.as_str()),
            ("redirect_uri", config.linkedin_redirect_uri.as_str()),
            ("state", state_token),
            ("scope", LINKEDIN_SCOPES),
            ("prompt", "consent"),
        ],
    )
    .map_err(|e| AppError::AuthRedirect(e.to_string()))
}

fn frontend_redirect(
    config: &Config,
    page: &str,
    key: &str,
    value: &str,
) -> Result<Redirect, AppError> {
    let url = Url::parse_with_params(&format!("{}/{page}", config.frontend_url), &[(key, value)])
        .map_err(|e| AppError::AuthRedirect(e.to_string()))?;
    Ok(Redirect::temporary(url.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_url_carries_state_and_scopes() {
        let config = Config::for_tests();
        let url = authorization_url(&config, "abc123").unwrap();
        assert_eq!(url.host_str(), Some("www.linkedin.com"));

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let get = |k: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == k)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("response_type"), Some("code"));
        assert_eq!(get("client_id"), Some("test-client"));
        assert_eq!(get("state"), Some("abc123"));
        assert_eq!(get("scope"), Some(LINKEDIN_SCOPES));
        assert_eq!(get("prompt"), Some("consent"));
        assert_eq!(get("redirect_uri"), Some(config.linkedin_redirect_uri.as_str()));
    }

    #[test]
    fn test_malformed_frontend_url_is_an_auth_error() {
        let config = Config {
            frontend_url: "not a url".to_string(),
            ..Config::for_tests()
        };
        let err = frontend_redirect(&config, "error", "message", "Invalid state parameter")
            .unwrap_err();
        assert!(matches!(err, AppError::AuthRedirect(_)));
    }
}
