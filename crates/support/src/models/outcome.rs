//! Per-message processing result.

use serde::{Deserialize, Serialize};

use shopclerk_core::{Confidence, Intent, Sentiment};

use crate::nlu::EntityMap;

/// The record returned to the caller for one processed message.
///
/// Serializes with the intent as its snake_case label and the sentiment as
/// its integer score, so presentation layers can consume it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageOutcome {
    /// The generated response text.
    pub response: String,
    /// Classified intent label.
    pub intent: Intent,
    /// Classifier confidence in `[0, 1]`.
    pub confidence: Confidence,
    /// Message polarity in `{-1, 0, 1}`.
    pub sentiment: Sentiment,
    /// Extracted entities, possibly empty.
    pub entities: EntityMap,
}
