//! Database operations for the support record store (`SQLite`).
//!
//! ## Tables
//!
//! - `users` - Customer accounts (provisioned externally)
//! - `products` - Catalog products
//! - `orders` - Orders referencing a user and a product
//! - `faqs` - Static question/answer reference data
//! - `conversations` - Persisted message/response exchanges
//!
//! Schema creation lives in [`schema`] and is run via:
//! ```bash
//! cargo run -p shopclerk-cli -- migrate
//! ```

pub mod conversations;
pub mod faqs;
pub mod orders;
pub mod schema;
pub mod users;

use std::str::FromStr;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub use conversations::ConversationRepository;
pub use faqs::FaqRepository;
pub use orders::OrderRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// The database file is created if it does not exist; schema creation is a
/// separate step ([`schema::init`]).
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<SqlitePool, sqlx::Error> {
    let options =
        SqliteConnectOptions::from_str(database_url.expose_secret())?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Create a single-connection in-memory pool.
///
/// Pooled `sqlite::memory:` connections each open a distinct database, so
/// the pool must stay at one connection. Used by tests and ephemeral
/// tooling.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
}
