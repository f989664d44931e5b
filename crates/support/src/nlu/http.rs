//! HTTP client for the text-understanding service.
//!
//! The service exposes three JSON endpoints, all taking `{"text": ...}`:
//!
//! - `POST /v1/intent` -> `{"label": "...", "confidence": 0.0..1.0}`
//! - `POST /v1/entities` -> `{"entities": {"CATEGORY": "value", ...}}`
//! - `POST /v1/sentiment` -> `{"score": -1 | 0 | 1}`

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use shopclerk_core::{Confidence, Intent, Sentiment};

use super::{EntityMap, IntentClassification, LanguageAnalyzer, NluError};

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct IntentResponse {
    label: String,
    confidence: f64,
}

#[derive(Debug, Deserialize)]
struct EntitiesResponse {
    entities: EntityMap,
}

#[derive(Debug, Deserialize)]
struct SentimentResponse {
    score: i64,
}

/// Reqwest-based [`LanguageAnalyzer`] implementation.
///
/// Stateless per call; one shared instance is safe for concurrent use.
#[derive(Clone)]
pub struct HttpLanguageAnalyzer {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLanguageAnalyzer {
    /// Create a new client for the service at `base_url`.
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(base_url: &str, api_key: Option<&secrecy::SecretString>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = api_key {
            let bearer = format!("Bearer {}", key.expose_secret());
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&bearer).expect("invalid API key for header"),
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        text: &str,
    ) -> Result<T, NluError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&AnalyzeRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NluError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

impl LanguageAnalyzer for HttpLanguageAnalyzer {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn classify_intent(&self, text: &str) -> Result<IntentClassification, NluError> {
        let response: IntentResponse = self.post("/v1/intent", text).await?;
        let intent = Intent::from(response.label.as_str());
        debug!(label = %response.label, confidence = response.confidence, "intent classified");

        Ok(IntentClassification {
            intent,
            confidence: Confidence::new(response.confidence),
        })
    }

    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn extract_entities(&self, text: &str) -> Result<EntityMap, NluError> {
        let response: EntitiesResponse = self.post("/v1/entities", text).await?;
        Ok(response.entities)
    }

    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn analyze_sentiment(&self, text: &str) -> Result<Sentiment, NluError> {
        let response: SentimentResponse = self.post("/v1/sentiment", text).await?;
        if !(-1..=1).contains(&response.score) {
            return Err(NluError::InvalidResponse(format!(
                "sentiment score out of range: {}",
                response.score
            )));
        }

        Ok(Sentiment::from_score(response.score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let analyzer = HttpLanguageAnalyzer::new("http://localhost:8000/", None);
        assert_eq!(analyzer.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_intent_response_deserializes() {
        let json = r#"{"label": "order_tracking", "confidence": 0.91}"#;
        let response: IntentResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.label, "order_tracking");
        assert!((response.confidence - 0.91).abs() < f64::EPSILON);
    }

    #[test]
    fn test_entities_response_deserializes() {
        let json = r#"{"entities": {"CARDINAL": "5"}}"#;
        let response: EntitiesResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.entities.get("CARDINAL").map(String::as_str), Some("5"));
    }
}
