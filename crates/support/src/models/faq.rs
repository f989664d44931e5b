//! FAQ reference data.

use serde::{Deserialize, Serialize};

use shopclerk_core::FaqId;

/// A static question/answer pair matched against incoming messages by
/// keyword overlap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Unique FAQ ID.
    pub id: FaqId,
    /// Question text; its lowercase words are the match keywords.
    pub question: String,
    /// Answer returned on a keyword match.
    pub answer: String,
    /// Optional category for filtered lookups.
    pub category: Option<String>,
}
