//! Conversation log models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopclerk_core::{ConversationId, Sentiment, UserId};

/// A persisted message/response exchange.
///
/// Written exactly once per processed message when the sender's identity
/// resolves; never updated or deleted by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationRecord {
    /// Unique record ID.
    pub id: ConversationId,
    /// Owning user; null for rows written by other components on behalf of
    /// anonymous senders.
    pub user_id: Option<UserId>,
    /// The user's message, in its original (non-normalized) form.
    pub message: String,
    /// The generated response.
    pub response: String,
    /// When the store recorded the exchange.
    pub timestamp: DateTime<Utc>,
    /// Message polarity at the time of the exchange.
    pub sentiment: Sentiment,
}

/// A conversation exchange awaiting persistence.
///
/// The timestamp is assigned by the record store at write time.
#[derive(Debug, Clone)]
pub struct NewConversation {
    /// Resolved sender identity.
    pub user_id: UserId,
    /// The original message text.
    pub message: String,
    /// The generated response.
    pub response: String,
    /// Message polarity.
    pub sentiment: Sentiment,
}
