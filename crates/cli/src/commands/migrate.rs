//! Schema creation command.
//!
//! ```bash
//! shopclerk migrate
//! ```
//!
//! Reads `SUPPORT_DATABASE_URL` and creates any missing support tables.

use secrecy::SecretString;
use tracing::info;

use shopclerk_support::db::{self, schema};

/// Create the support schema.
///
/// # Errors
///
/// Returns an error if `SUPPORT_DATABASE_URL` is unset or a statement fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("SUPPORT_DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| "SUPPORT_DATABASE_URL not set")?;

    info!("Connecting to support database...");
    let pool = db::create_pool(&database_url).await?;

    info!("Creating support tables...");
    schema::init(&pool).await?;

    info!("Schema up to date");
    Ok(())
}
