//! Conversation log repository.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use shopclerk_core::{ConversationId, Sentiment, UserId};

use super::RepositoryError;
use crate::models::{ConversationRecord, NewConversation};

/// Internal row type for conversation queries.
#[derive(Debug, sqlx::FromRow)]
struct ConversationRow {
    id: i64,
    user_id: Option<i64>,
    message: String,
    response: String,
    timestamp: DateTime<Utc>,
    sentiment: Option<i64>,
}

impl From<ConversationRow> for ConversationRecord {
    fn from(row: ConversationRow) -> Self {
        Self {
            id: ConversationId::new(row.id),
            user_id: row.user_id.map(UserId::new),
            message: row.message,
            response: row.response,
            timestamp: row.timestamp,
            sentiment: row.sentiment.map_or(Sentiment::Neutral, Sentiment::from_score),
        }
    }
}

/// Repository for conversation database operations.
pub struct ConversationRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ConversationRepository<'a> {
    /// Create a new conversation repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a conversation record.
    ///
    /// The timestamp is assigned here, at write time.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, conversation: &NewConversation) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO conversations (user_id, message, response, timestamp, sentiment)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(conversation.user_id.as_i64())
        .bind(&conversation.message)
        .bind(&conversation.response)
        .bind(Utc::now())
        .bind(conversation.sentiment.score())
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// List a user's most recent conversations, newest first.
    ///
    /// Used by review tooling; the orchestrator itself only writes.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn recent_for_user(
        &self,
        user_id: UserId,
        limit: i64,
    ) -> Result<Vec<ConversationRecord>, RepositoryError> {
        let rows = sqlx::query_as::<_, ConversationRow>(
            "SELECT id, user_id, message, response, timestamp, sentiment
             FROM conversations
             WHERE user_id = ?
             ORDER BY timestamp DESC, id DESC
             LIMIT ?",
        )
        .bind(user_id.as_i64())
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Count all persisted conversations.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM conversations")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema;

    async fn seeded_pool() -> SqlitePool {
        let pool = crate::db::create_memory_pool().await.expect("in-memory pool");
        schema::init(&pool).await.expect("init schema");
        schema::seed_sample_data(&pool).await.expect("seed");
        pool
    }

    #[tokio::test]
    async fn test_insert_and_read_back() {
        let pool = seeded_pool().await;
        let repo = ConversationRepository::new(&pool);

        repo.insert(&NewConversation {
            user_id: UserId::new(1),
            message: "Where is my Order #1?".to_string(),
            response: "It shipped.".to_string(),
            sentiment: Sentiment::Negative,
        })
        .await
        .expect("insert");

        let records = repo
            .recent_for_user(UserId::new(1), 10)
            .await
            .expect("query");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "Where is my Order #1?");
        assert_eq!(records[0].sentiment, Sentiment::Negative);
        assert_eq!(records[0].user_id, Some(UserId::new(1)));
    }

    #[tokio::test]
    async fn test_recent_for_user_scopes_by_user() {
        let pool = seeded_pool().await;
        let repo = ConversationRepository::new(&pool);

        repo.insert(&NewConversation {
            user_id: UserId::new(2),
            message: "hello".to_string(),
            response: "hi".to_string(),
            sentiment: Sentiment::Neutral,
        })
        .await
        .expect("insert");

        assert!(
            repo.recent_for_user(UserId::new(1), 10)
                .await
                .expect("query")
                .is_empty()
        );
        assert_eq!(repo.count().await.expect("count"), 1);
    }
}
