//! Support configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SUPPORT_DATABASE_URL` - `SQLite` connection string (e.g.
//!   `sqlite://data/shopclerk.db`)
//! - `NLU_BASE_URL` - Base URL of the text-understanding service
//!
//! ## Optional
//! - `NLU_API_KEY` - Bearer token for the language service
//! - `TRANSCRIBE_BASE_URL` - Base URL of the transcription service
//!   (defaults to `NLU_BASE_URL`)

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Support application configuration.
#[derive(Debug, Clone)]
pub struct SupportConfig {
    /// `SQLite` database connection URL.
    pub database_url: SecretString,
    /// Language service configuration.
    pub nlu: NluConfig,
}

/// Language and transcription service configuration.
#[derive(Debug, Clone)]
pub struct NluConfig {
    /// Base URL of the text-understanding service.
    pub base_url: String,
    /// Optional bearer token.
    pub api_key: Option<SecretString>,
    /// Base URL of the transcription service.
    pub transcribe_base_url: String,
}

impl SupportConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if a required variable is
    /// unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_env("SUPPORT_DATABASE_URL").map(SecretString::from)?;
        let base_url = require_env("NLU_BASE_URL")?;
        let api_key = std::env::var("NLU_API_KEY").ok().map(SecretString::from);
        let transcribe_base_url =
            std::env::var("TRANSCRIBE_BASE_URL").unwrap_or_else(|_| base_url.clone());

        Ok(Self {
            database_url,
            nlu: NluConfig {
                base_url,
                api_key,
                transcribe_base_url,
            },
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
