mod analysis;
mod auth;
mod chat;
mod config;
mod errors;
mod extraction;
mod language_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::{InMemoryStateStore, RedisStateStore, StateStore};
use crate::config::Config;
use crate::language_client::LanguageClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume chat API v{}", env!("CARGO_PKG_VERSION"));

    let language = LanguageClient::new(
        config.language_api_url.clone(),
        config.language_api_key.clone(),
    )?;
    info!("Language client initialized ({})", config.language_api_url);

    let state_ttl = Duration::from_secs(config.oauth_state_ttl_secs);
    let state_store: Arc<dyn StateStore> = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str())?;
            info!("OAuth state store: redis");
            Arc::new(RedisStateStore::new(client, state_ttl))
        }
        None => {
            info!("OAuth state store: in-memory");
            Arc::new(InMemoryStateStore::new(state_ttl))
        }
    };

    let state = AppState::new(config.clone(), Arc::new(language), state_store);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict to the frontend origin once FRONTEND_URL is per-environment

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
