//! Top-level dialogue orchestration.
//!
//! This service sequences the per-message pipeline:
//! 1. Normalize the message for classification
//! 2. Classify intent on the normalized text
//! 3. Extract entities and score sentiment on the original text
//! 4. Best-effort identity resolution from the optional email
//! 5. Generate the response
//! 6. Persist the exchange when an identity resolved
//!
//! Step ordering is fixed. Entity extraction always runs against the raw
//! text so cues like `#123` survive, while classification sees the
//! normalized form for consistency.

use tracing::{info, instrument, warn};

use shopclerk_core::{Email, UserId};

use crate::error::SupportError;
use crate::models::{MessageOutcome, NewConversation};
use crate::nlu::{LanguageAnalyzer, normalize};
use crate::responder::ResponseGenerator;
use crate::store::RecordStore;

/// Dialogue orchestrator over an injected record store and language
/// analyzer.
///
/// Holds no per-call state of its own; one shared instance is safe for
/// concurrent callers as long as the collaborators are.
pub struct SupportService<S, N> {
    store: S,
    analyzer: N,
}

impl<S: RecordStore, N: LanguageAnalyzer> SupportService<S, N> {
    /// Create a new service from its collaborators.
    #[must_use]
    pub const fn new(store: S, analyzer: N) -> Self {
        Self { store, analyzer }
    }

    /// The underlying record store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Process one user message and return the assembled outcome.
    ///
    /// `user_email` is best-effort: an unknown address, an unparseable
    /// address, and even a store failure during the lookup all degrade to
    /// anonymous processing, which skips persistence. Everything else that
    /// fails - classification, response generation lookups, the
    /// conversation write - aborts the call.
    ///
    /// # Errors
    ///
    /// Returns [`SupportError`] when the language service or (outside the
    /// identity lookup) the record store fails.
    #[instrument(skip(self, message, user_email), fields(message_len = message.len()))]
    pub async fn process_message(
        &self,
        message: &str,
        user_email: Option<&str>,
    ) -> Result<MessageOutcome, SupportError> {
        let processed = normalize(message);

        let classification = self.analyzer.classify_intent(&processed).await?;
        let entities = self.analyzer.extract_entities(message).await?;
        let sentiment = self.analyzer.analyze_sentiment(message).await?;

        let user_id = match user_email {
            Some(email) if !email.is_empty() => self.resolve_user(email).await,
            _ => None,
        };

        let response = ResponseGenerator::new(&self.store)
            .generate(
                classification.intent,
                &processed,
                &entities,
                classification.confidence,
            )
            .await?;

        if let Some(user_id) = user_id {
            self.store
                .save_conversation(&NewConversation {
                    user_id,
                    message: message.to_string(),
                    response: response.clone(),
                    sentiment,
                })
                .await?;
        }

        info!(
            intent = %classification.intent,
            confidence = %classification.confidence,
            persisted = user_id.is_some(),
            "message processed"
        );

        Ok(MessageOutcome {
            response,
            intent: classification.intent,
            confidence: classification.confidence,
            sentiment,
            entities,
        })
    }

    /// Resolve an email to a user ID, degrading every failure mode to
    /// anonymous.
    async fn resolve_user(&self, email: &str) -> Option<UserId> {
        let parsed = match Email::parse(email) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "unparseable email, treating sender as anonymous");
                return None;
            }
        };

        match self.store.get_user_by_email(&parsed).await {
            Ok(user) => user.map(|u| u.id),
            Err(e) => {
                warn!(error = %e, "user lookup failed, treating sender as anonymous");
                None
            }
        }
    }
}
