//! Domain models for the support orchestrator.
//!
//! Users, products, and orders are provisioned and mutated outside this
//! crate; the orchestrator reads them and only ever writes conversation
//! records.

pub mod conversation;
pub mod faq;
pub mod order;
pub mod outcome;
pub mod user;

pub use conversation::{ConversationRecord, NewConversation};
pub use faq::FaqEntry;
pub use order::{OrderDetail, Product};
pub use outcome::MessageOutcome;
pub use user::User;
