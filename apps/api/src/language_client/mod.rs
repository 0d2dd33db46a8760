//! Language client: entity and sentiment analysis over plain text.
//!
//! Handlers and the extractor only see the `EntityRecognizer` trait; the
//! HTTP-backed `LanguageClient` speaks the Google Cloud Natural Language
//! REST API (`documents:analyzeEntities`, `documents:analyzeSentiment`).
//!
//! One attempt per call. Callers decide whether a failure is fatal.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Language service returned no document sentiment")]
    EmptyResponse,
}

/// Entity tags reported by the language service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Unknown,
    Person,
    Location,
    Organization,
    Event,
    WorkOfArt,
    ConsumerGood,
    PhoneNumber,
    Address,
    Date,
    Number,
    Price,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    #[serde(default)]
    pub salience: f32,
}

/// Document-level sentiment. `score` is in [-1.0, 1.0].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DocumentSentiment {
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub magnitude: f32,
}

/// The collaborator seam. Carried in `AppState` as `Arc<dyn EntityRecognizer>`.
#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    /// Entities in the order the service returned them.
    async fn analyze_entities(&self, text: &str) -> Result<Vec<Entity>, LanguageError>;

    async fn analyze_sentiment(&self, text: &str) -> Result<DocumentSentiment, LanguageError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest<'a> {
    document: Document<'a>,
    encoding_type: &'a str,
}

#[derive(Debug, Serialize)]
struct Document<'a> {
    #[serde(rename = "type")]
    doc_type: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnalyzeEntitiesResponse {
    #[serde(default)]
    entities: Vec<Entity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeSentimentResponse {
    document_sentiment: Option<DocumentSentiment>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// HTTP client for the Natural Language REST API.
#[derive(Clone)]
pub struct LanguageClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl LanguageClient {
    pub fn new(base_url: String, api_key: String) -> Result<Self, LanguageError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    async fn post_document(&self, method: &str, text: &str) -> Result<String, LanguageError> {
        let body = AnalyzeRequest {
            document: Document {
                doc_type: "PLAIN_TEXT",
                content: text,
            },
            encoding_type: "UTF8",
        };

        let response = self
            .client
            .post(format!("{}/documents:{method}", self.base_url))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorEnvelope>(&raw)
                .map(|e| e.error.message)
                .unwrap_or(raw);
            return Err(LanguageError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Language API {method} succeeded ({} bytes)", raw.len());
        Ok(raw)
    }
}

#[async_trait]
impl EntityRecognizer for LanguageClient {
    async fn analyze_entities(&self, text: &str) -> Result<Vec<Entity>, LanguageError> {
        let raw = self.post_document("analyzeEntities", text).await?;
        parse_entities(&raw)
    }

    async fn analyze_sentiment(&self, text: &str) -> Result<DocumentSentiment, LanguageError> {
        let raw = self.post_document("analyzeSentiment", text).await?;
        parse_sentiment(&raw)
    }
}

fn parse_entities(raw: &str) -> Result<Vec<Entity>, LanguageError> {
    let parsed: AnalyzeEntitiesResponse = serde_json::from_str(raw)?;
    Ok(parsed.entities)
}

fn parse_sentiment(raw: &str) -> Result<DocumentSentiment, LanguageError> {
    let parsed: AnalyzeSentimentResponse = serde_json::from_str(raw)?;
    parsed.document_sentiment.ok_or(LanguageError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entities_keeps_service_order() {
        let raw = r#"{
            "entities": [
                {"name": "Berlin", "type": "LOCATION", "salience": 0.2, "mentions": []},
                {"name": "Acme", "type": "ORGANIZATION", "salience": 0.6},
                {"name": "Globex", "type": "ORGANIZATION", "salience": 0.9}
            ],
            "language": "en"
        }"#;
        let entities = parse_entities(raw).unwrap();
        assert_eq!(entities.len(), 3);
        assert_eq!(entities[0].entity_type, EntityType::Location);
        assert_eq!(entities[1].name, "Acme");
        assert_eq!(entities[2].name, "Globex");
    }

    #[test]
    fn test_parse_entities_missing_list_is_empty() {
        let entities = parse_entities(r#"{"language": "en"}"#).unwrap();
        assert!(entities.is_empty());
    }

    #[test]
    fn test_unrecognized_entity_type_maps_to_other() {
        let raw = r#"{"entities": [{"name": "Rust", "type": "PROGRAMMING_LANGUAGE"}]}"#;
        let entities = parse_entities(raw).unwrap();
        assert_eq!(entities[0].entity_type, EntityType::Other);
        assert_eq!(entities[0].salience, 0.0);
    }

    #[test]
    fn test_parse_sentiment() {
        let raw = r#"{"documentSentiment": {"magnitude": 1.2, "score": 0.4}, "language": "en"}"#;
        let sentiment = parse_sentiment(raw).unwrap();
        assert!((sentiment.score - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_sentiment_without_document_is_error() {
        let err = parse_sentiment(r#"{"language": "en"}"#).unwrap_err();
        assert!(matches!(err, LanguageError::EmptyResponse));
    }

    #[test]
    fn test_request_body_shape() {
        let body = AnalyzeRequest {
            document: Document {
                doc_type: "PLAIN_TEXT",
                content: "hello",
            },
            encoding_type: "UTF8",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["document"]["type"], "PLAIN_TEXT");
        assert_eq!(json["encodingType"], "UTF8");
    }
}
