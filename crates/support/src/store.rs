//! The record-store contract consumed by the orchestrator.
//!
//! The orchestrator only ever sees these four operations; connection and
//! transaction lifecycle stays inside the implementation. Implementations
//! must tolerate concurrent callers - the orchestrator issues one write per
//! processed message and expects the store to isolate interleavings.

use sqlx::SqlitePool;

use shopclerk_core::{Email, OrderId};

use crate::db::{
    ConversationRepository, FaqRepository, OrderRepository, RepositoryError, UserRepository,
};
use crate::models::{FaqEntry, NewConversation, OrderDetail, User};

/// Query contract over the durable support data.
///
/// Absent rows are `Ok(None)` / empty vectors; `Err` is reserved for
/// genuine storage failures.
pub trait RecordStore {
    /// Look up a user by their unique email.
    async fn get_user_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;

    /// Look up an order joined with its owner's and product's names.
    async fn get_order_by_id(&self, id: OrderId) -> Result<Option<OrderDetail>, RepositoryError>;

    /// List FAQ entries, insertion-ordered when `category` is `None`.
    async fn faqs_by_category(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<FaqEntry>, RepositoryError>;

    /// Persist one conversation exchange; the store assigns the timestamp.
    async fn save_conversation(
        &self,
        conversation: &NewConversation,
    ) -> Result<(), RepositoryError>;
}

/// `SQLite`-backed record store.
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    /// Create a store over an existing pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The underlying pool, for schema management and review tooling.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl RecordStore for SqliteRecordStore {
    async fn get_user_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        UserRepository::new(&self.pool).get_by_email(email).await
    }

    async fn get_order_by_id(&self, id: OrderId) -> Result<Option<OrderDetail>, RepositoryError> {
        OrderRepository::new(&self.pool).get_by_id(id).await
    }

    async fn faqs_by_category(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<FaqEntry>, RepositoryError> {
        FaqRepository::new(&self.pool).list(category).await
    }

    async fn save_conversation(
        &self,
        conversation: &NewConversation,
    ) -> Result<(), RepositoryError> {
        ConversationRepository::new(&self.pool)
            .insert(conversation)
            .await
    }
}
