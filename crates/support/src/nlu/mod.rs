//! Language-understanding collaborators.
//!
//! Intent classification, entity extraction, and sentiment scoring are
//! black boxes behind [`LanguageAnalyzer`]; voice transcription sits behind
//! [`Transcriber`]. Both are injected into the orchestrator at construction
//! time and must be safe for concurrent read-only use. The HTTP
//! implementations live in [`http`] and [`transcribe`].

pub mod error;
pub mod http;
pub mod transcribe;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use shopclerk_core::{Confidence, Intent, Sentiment};

pub use error::NluError;
pub use http::HttpLanguageAnalyzer;
pub use transcribe::{HttpTranscriber, Transcriber};

/// Extracted entities, keyed by category name (e.g., "CARDINAL").
pub type EntityMap = HashMap<String, String>;

/// An intent label with the classifier's confidence in it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntentClassification {
    /// The classified intent.
    pub intent: Intent,
    /// Confidence in `[0, 1]`.
    pub confidence: Confidence,
}

/// Text-understanding contract consumed by the orchestrator.
pub trait LanguageAnalyzer {
    /// Classify the intent of a (normalized) message.
    async fn classify_intent(&self, text: &str) -> Result<IntentClassification, NluError>;

    /// Extract named entities from the raw message.
    async fn extract_entities(&self, text: &str) -> Result<EntityMap, NluError>;

    /// Score the raw message's polarity.
    async fn analyze_sentiment(&self, text: &str) -> Result<Sentiment, NluError>;
}

/// Normalize a message for classification and FAQ matching: lowercase and
/// collapse runs of whitespace.
///
/// Entity extraction deliberately runs on the raw text instead, so cues
/// like `#123` and capitalization survive.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("Where IS my Order"), "where is my order");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  hello \t world \n again "), "hello world again");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize("   "), "");
    }
}
