//! Single-use OAuth `state` tokens with a TTL.
//!
//! Handlers hold an `Arc<dyn StateStore>`; the backend is picked at startup.
//! A token is valid once: `consume` removes it whether or not it has expired.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

const REDIS_KEY_PREFIX: &str = "oauth_state:";

#[derive(Debug, Error)]
pub enum StateStoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

#[async_trait]
pub trait StateStore: Send + Sync {
    /// Creates and records a fresh token.
    async fn issue(&self) -> Result<String, StateStoreError>;

    /// True only if the token was issued by this store and has not expired.
    async fn consume(&self, token: &str) -> Result<bool, StateStoreError>;

    /// Short backend label for status reporting.
    fn backend(&self) -> &'static str;
}

fn new_token() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Process-local store. Expired tokens are swept whenever a new one is issued.
pub struct InMemoryStateStore {
    tokens: Mutex<HashMap<String, Instant>>,
    ttl: Duration,
}

impl InMemoryStateStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            tokens: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Instant>> {
        // A panic while holding the lock cannot leave the map half-written.
        self.tokens.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
impl InMemoryStateStore {
    fn len(&self) -> usize {
        self.lock().len()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn issue(&self) -> Result<String, StateStoreError> {
        let token = new_token();
        let mut tokens = self.lock();
        let before = tokens.len();
        tokens.retain(|_, issued| issued.elapsed() <= self.ttl);
        if tokens.len() < before {
            debug!("Swept {} expired OAuth state tokens", before - tokens.len());
        }
        tokens.insert(token.clone(), Instant::now());
        Ok(token)
    }

    async fn consume(&self, token: &str) -> Result<bool, StateStoreError> {
        let issued = self.lock().remove(token);
        Ok(matches!(issued, Some(at) if at.elapsed() <= self.ttl))
    }
}

/// Redis-backed store for multi-instance deployments; expiry is left to Redis.
pub struct RedisStateStore {
    client: redis::Client,
    ttl_secs: u64,
}

impl RedisStateStore {
    pub fn new(client: redis::Client, ttl: Duration) -> Self {
        Self {
            client,
            // EX 0 is rejected by Redis
            ttl_secs: ttl.as_secs().max(1),
        }
    }
}

#[async_trait]
impl StateStore for RedisStateStore {
    fn backend(&self) -> &'static str {
        "redis"
    }

    async fn issue(&self) -> Result<String, StateStoreError> {
        let token = new_token();
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        redis::cmd("SET")
            .arg(format!("{REDIS_KEY_PREFIX}{token}"))
            .arg(1)
            .arg("EX")
            .arg(self.ttl_secs)
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(token)
    }

    async fn consume(&self, token: &str) -> Result<bool, StateStoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let existing: Option<String> = redis::cmd("GETDEL")
            .arg(format!("{REDIS_KEY_PREFIX}{token}"))
            .query_async(&mut conn)
            .await?;
        Ok(existing.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_issued_token_is_valid_once() {
        let store = InMemoryStateStore::new(Duration::from_secs(600));
        let token = store.issue().await.unwrap();
        assert!(store.consume(&token).await.unwrap());
        assert!(!store.consume(&token).await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_token_is_rejected() {
        let store = InMemoryStateStore::new(Duration::from_secs(600));
        assert!(!store.consume("forged").await.unwrap());
    }

    #[tokio::test]
    async fn test_tokens_are_distinct() {
        let store = InMemoryStateStore::new(Duration::from_secs(600));
        let a = store.issue().await.unwrap();
        let b = store.issue().await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected_and_removed() {
        let store = InMemoryStateStore::new(Duration::from_millis(1));
        let token = store.issue().await.unwrap();
        std::thread::sleep(Duration::from_millis(10));
        assert!(!store.consume(&token).await.unwrap());
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_issue_sweeps_expired_tokens() {
        let store = InMemoryStateStore::new(Duration::from_millis(1));
        store.issue().await.unwrap();
        store.issue().await.unwrap();
        std::thread::sleep(Duration::from_millis(10));
        store.issue().await.unwrap();
        assert_eq!(store.len(), 1);
    }
}
