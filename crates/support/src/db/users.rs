//! User repository for database operations.

use sqlx::SqlitePool;

use shopclerk_core::{Email, UserId};

use super::RepositoryError;
use crate::models::User;

/// Internal row type for user queries.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    phone: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: UserId::new(row.id),
            name: row.name,
            email,
            phone: row.phone,
        })
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a user by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, phone FROM users WHERE email = ?",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let row =
            sqlx::query_as::<_, UserRow>("SELECT id, name, email, phone FROM users WHERE id = ?")
                .bind(id.as_i64())
                .fetch_optional(self.pool)
                .await?;

        row.map(TryInto::try_into).transpose()
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
    async fn test_get_by_email_found() {
        let pool = seeded_pool().await;
        let repo = UserRepository::new(&pool);

        let email = Email::parse("john@example.com").expect("valid email");
        let user = repo
            .get_by_email(&email)
            .await
            .expect("query")
            .expect("user exists");
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.id, UserId::new(1));
    }

    #[tokio::test]
    async fn test_get_by_email_absent() {
        let pool = seeded_pool().await;
        let repo = UserRepository::new(&pool);

        let email = Email::parse("nobody@example.com").expect("valid email");
        assert!(repo.get_by_email(&email).await.expect("query").is_none());
    }
}
