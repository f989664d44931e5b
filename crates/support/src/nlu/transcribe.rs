//! Voice transcription collaborator.
//!
//! The voice input path transcribes recorded audio to text and then feeds
//! it through `process_message` exactly like typed input.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::NluError;

/// Speech-to-text contract.
pub trait Transcriber {
    /// Transcribe normalized mono audio samples (`[-1.0, 1.0]`) to text.
    async fn transcribe(&self, samples: &[f32]) -> Result<String, NluError>;
}

#[derive(Debug, Serialize)]
struct TranscribeRequest<'a> {
    samples: &'a [f32],
}

#[derive(Debug, Deserialize)]
struct TranscribeResponse {
    text: String,
}

/// Reqwest-based [`Transcriber`] against a `POST /v1/transcribe` endpoint.
#[derive(Clone)]
pub struct HttpTranscriber {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTranscriber {
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
}

impl Transcriber for HttpTranscriber {
    #[instrument(skip(self, samples), fields(sample_count = samples.len()))]
    async fn transcribe(&self, samples: &[f32]) -> Result<String, NluError> {
        let url = format!("{}/v1/transcribe", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&TranscribeRequest { samples })
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

        let body: TranscribeResponse = response.json().await?;
        Ok(body.text)
    }
}
