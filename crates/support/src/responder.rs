//! Deterministic response generation.
//!
//! Maps a classified intent plus extracted signals to a response string.
//! For fixed inputs and table contents the output is fully deterministic:
//! no randomness, no model calls, no hidden state.

use shopclerk_core::{Confidence, Intent};

use crate::db::RepositoryError;
use crate::nlu::EntityMap;
use crate::resolver::extract_order_id;
use crate::store::RecordStore;

/// Confidence floor below which every intent gets the clarification prompt.
pub const CONFIDENCE_THRESHOLD: f64 = 0.5;

/// How many FAQ questions the no-match fallback lists.
const FALLBACK_FAQ_COUNT: usize = 3;

const CLARIFICATION_PROMPT: &str = "I'm not sure I understand your question. \
    Could you please rephrase it or provide more details?";

const CAPABILITY_SUMMARY: &str = "I'm here to help with FAQs, order tracking, returns, \
    and connecting you to human support. How can I assist you today?";

const HUMAN_HANDOFF: &str = "I understand this might be a complex issue. \
    I'm connecting you to a human support agent. Please hold on while I transfer you. \
    In the meantime, could you briefly describe your issue?";

const TRACKING_PROMPT: &str = "To track your order, please provide your order number. \
    You can find it in your confirmation email.";

const RETURN_PROMPT: &str = "To process a return, please provide your order number. \
    Our return policy allows returns within 30 days of purchase.";

/// Response generator over a record store.
///
/// Borrows the store per message, the same way repositories borrow the
/// pool; construction is free.
pub struct ResponseGenerator<'a, S> {
    store: &'a S,
}

impl<'a, S: RecordStore> ResponseGenerator<'a, S> {
    /// Create a generator over `store`.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Generate the response for a classified message.
    ///
    /// `message` must be the normalized form; FAQ keywords are matched
    /// against it as lowercase substrings. Policy, evaluated in order:
    /// low-confidence gate, then the intent-specific handlers, then the
    /// capability summary for anything unrecognized.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` only for storage failures; every absence
    /// (no FAQ match, unknown order, no order reference) resolves into a
    /// user-facing string.
    pub async fn generate(
        &self,
        intent: Intent,
        message: &str,
        entities: &EntityMap,
        confidence: Confidence,
    ) -> Result<String, RepositoryError> {
        if confidence.value() < CONFIDENCE_THRESHOLD {
            return Ok(CLARIFICATION_PROMPT.to_string());
        }

        match intent {
            Intent::Faq => self.handle_faq(message).await,
            Intent::OrderTracking => self.handle_order_tracking(message, entities).await,
            Intent::ReturnRequest => Ok(Self::handle_return_request(message, entities)),
            Intent::HumanSupport => Ok(HUMAN_HANDOFF.to_string()),
            Intent::Unknown => Ok(CAPABILITY_SUMMARY.to_string()),
        }
    }

    /// First FAQ whose question shares a lowercase word with the message
    /// wins; no match falls back to listing the first few questions.
    async fn handle_faq(&self, message: &str) -> Result<String, RepositoryError> {
        let faqs = self.store.faqs_by_category(None).await?;

        for faq in &faqs {
            let matched = faq
                .question
                .to_lowercase()
                .split_whitespace()
                .any(|keyword| message.contains(keyword));
            if matched {
                return Ok(faq.answer.clone());
            }
        }

        let listing = faqs
            .iter()
            .take(FALLBACK_FAQ_COUNT)
            .map(|faq| format!("- {}", faq.question))
            .collect::<Vec<_>>()
            .join("\n");

        Ok(format!(
            "I couldn't find a specific answer to your question. Here are some common FAQs:\n{listing}"
        ))
    }

    async fn handle_order_tracking(
        &self,
        message: &str,
        entities: &EntityMap,
    ) -> Result<String, RepositoryError> {
        let Some(order_id) = extract_order_id(message, entities) else {
            return Ok(TRACKING_PROMPT.to_string());
        };

        match self.store.get_order_by_id(order_id).await? {
            Some(order) => Ok(format!(
                "Your order #{order_id} for {} is currently {}. It was placed on {}.",
                order.product_name, order.status, order.order_date
            )),
            None => Ok(format!(
                "I couldn't find an order with ID {order_id}. \
                 Please check your order number and try again."
            )),
        }
    }

    /// Acknowledges the request without touching the order row; the actual
    /// return is processed by a human within the promised follow-up window.
    fn handle_return_request(message: &str, entities: &EntityMap) -> String {
        extract_order_id(message, entities).map_or_else(
            || RETURN_PROMPT.to_string(),
            |order_id| {
                format!(
                    "I've initiated a return request for order #{order_id}. \
                     Our team will contact you within 24 hours to process your return. \
                     Please have your order details ready."
                )
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use shopclerk_core::{Email, FaqId, OrderId, ProductId, UserId};

    use super::*;
    use crate::models::{FaqEntry, NewConversation, OrderDetail, User};

    /// In-memory store fixture with one order and the stock FAQ set.
    struct FixtureStore {
        faqs: Vec<FaqEntry>,
        order: OrderDetail,
    }

    impl FixtureStore {
        fn new() -> Self {
            let faqs = vec![
                FaqEntry {
                    id: FaqId::new(1),
                    question: "How do I track my order?".to_string(),
                    answer: "You can track your order using the order number provided in your confirmation email.".to_string(),
                    category: Some("orders".to_string()),
                },
                FaqEntry {
                    id: FaqId::new(2),
                    question: "What is your return policy?".to_string(),
                    answer: "We accept returns within 30 days of purchase for a full refund.".to_string(),
                    category: Some("returns".to_string()),
                },
                FaqEntry {
                    id: FaqId::new(3),
                    question: "How do I reset my password?".to_string(),
                    answer: "Click on \"Forgot Password\" on the login page and follow the instructions.".to_string(),
                    category: Some("account".to_string()),
                },
            ];

            let order = OrderDetail {
                id: OrderId::new(1),
                user_id: UserId::new(1),
                product_id: ProductId::new(1),
                quantity: 1,
                order_date: NaiveDate::from_ymd_opt(2023, 10, 1).expect("valid date"),
                status: "shipped".to_string(),
                customer_name: "John Doe".to_string(),
                product_name: "Laptop".to_string(),
            };

            Self { faqs, order }
        }
    }

    impl RecordStore for FixtureStore {
        async fn get_user_by_email(
            &self,
            _email: &Email,
        ) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }

        async fn get_order_by_id(
            &self,
            id: OrderId,
        ) -> Result<Option<OrderDetail>, RepositoryError> {
            Ok((id == self.order.id).then(|| self.order.clone()))
        }

        async fn faqs_by_category(
            &self,
            _category: Option<&str>,
        ) -> Result<Vec<FaqEntry>, RepositoryError> {
            Ok(self.faqs.clone())
        }

        async fn save_conversation(
            &self,
            _conversation: &NewConversation,
        ) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    async fn generate(intent: Intent, message: &str, confidence: f64) -> String {
        let store = FixtureStore::new();
        ResponseGenerator::new(&store)
            .generate(intent, message, &EntityMap::new(), Confidence::new(confidence))
            .await
            .expect("generate")
    }

    #[tokio::test]
    async fn test_low_confidence_overrides_intent() {
        let response = generate(Intent::OrderTracking, "where is order 1", 0.3).await;
        assert_eq!(response, CLARIFICATION_PROMPT);
    }

    #[tokio::test]
    async fn test_faq_first_match_wins() {
        let response = generate(Intent::Faq, "how do i track my order", 0.9).await;
        assert_eq!(
            response,
            "You can track your order using the order number provided in your confirmation email."
        );
    }

    #[tokio::test]
    async fn test_faq_single_letter_keyword_overlap() {
        // "i" from the first question is a substring of "is", so the first
        // entry wins even for a return-policy question. That is the literal
        // first-match policy, quirks included.
        let response = generate(Intent::Faq, "what is your return policy?", 0.9).await;
        assert_eq!(
            response,
            "You can track your order using the order number provided in your confirmation email."
        );
    }

    #[tokio::test]
    async fn test_faq_later_entry_reachable_without_overlap() {
        let response = generate(Intent::Faq, "return and refund rules", 0.9).await;
        assert_eq!(
            response,
            "We accept returns within 30 days of purchase for a full refund."
        );
    }

    #[tokio::test]
    async fn test_faq_no_match_lists_questions() {
        let response = generate(Intent::Faq, "zzz qqq", 0.9).await;
        assert!(response.starts_with("I couldn't find a specific answer"));
        assert!(response.contains("- How do I track my order?"));
        assert!(response.contains("- What is your return policy?"));
        assert!(response.contains("- How do I reset my password?"));
    }

    #[tokio::test]
    async fn test_order_tracking_found() {
        let response = generate(Intent::OrderTracking, "where is my order 1", 0.9).await;
        assert_eq!(
            response,
            "Your order #1 for Laptop is currently shipped. It was placed on 2023-10-01."
        );
    }

    #[tokio::test]
    async fn test_order_tracking_not_found() {
        let response = generate(Intent::OrderTracking, "where is my order 9999", 0.9).await;
        assert!(response.contains("couldn't find an order with ID 9999"));
    }

    #[tokio::test]
    async fn test_order_tracking_unresolved() {
        let response = generate(Intent::OrderTracking, "where is my stuff", 0.9).await;
        assert_eq!(response, TRACKING_PROMPT);
    }

    #[tokio::test]
    async fn test_return_request_with_order() {
        let response = generate(Intent::ReturnRequest, "return order 2 please", 0.9).await;
        assert!(response.contains("return request for order #2"));
        assert!(response.contains("24 hours"));
    }

    #[tokio::test]
    async fn test_return_request_without_order() {
        let response = generate(Intent::ReturnRequest, "i want a refund", 0.9).await;
        assert_eq!(response, RETURN_PROMPT);
    }

    #[tokio::test]
    async fn test_human_support() {
        let response = generate(Intent::HumanSupport, "let me talk to an agent", 0.9).await;
        assert_eq!(response, HUMAN_HANDOFF);
    }

    #[tokio::test]
    async fn test_unknown_intent_capability_summary() {
        let response = generate(Intent::Unknown, "tell me a joke", 0.9).await;
        assert_eq!(response, CAPABILITY_SUMMARY);
    }

    #[tokio::test]
    async fn test_idempotent_for_identical_inputs() {
        let first = generate(Intent::Faq, "how do i track my order", 0.9).await;
        let second = generate(Intent::Faq, "how do i track my order", 0.9).await;
        assert_eq!(first, second);
    }
}
