//! FAQ repository for database operations.

use sqlx::SqlitePool;

use shopclerk_core::FaqId;

use super::RepositoryError;
use crate::models::FaqEntry;

/// Internal row type for FAQ queries.
#[derive(Debug, sqlx::FromRow)]
struct FaqRow {
    id: i64,
    question: String,
    answer: String,
    category: Option<String>,
}

impl From<FaqRow> for FaqEntry {
    fn from(row: FaqRow) -> Self {
        Self {
            id: FaqId::new(row.id),
            question: row.question,
            answer: row.answer,
            category: row.category,
        }
    }
}

/// Repository for FAQ database operations.
pub struct FaqRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FaqRepository<'a> {
    /// Create a new FAQ repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List FAQ entries, optionally filtered by category.
    ///
    /// Unfiltered results come back in insertion order, which makes the
    /// first-match-wins policy in the responder deterministic.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, category: Option<&str>) -> Result<Vec<FaqEntry>, RepositoryError> {
        let rows = match category {
            Some(category) => {
                sqlx::query_as::<_, FaqRow>(
                    "SELECT id, question, answer, category FROM faqs
                     WHERE category = ? ORDER BY id",
                )
                .bind(category)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, FaqRow>(
                    "SELECT id, question, answer, category FROM faqs ORDER BY id",
                )
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
