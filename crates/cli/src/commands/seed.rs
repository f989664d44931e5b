//! Sample-data seeding command.
//!
//! ```bash
//! shopclerk seed
//! ```
//!
//! Creates the schema if needed, then loads the sample users, products,
//! orders, and FAQs. Safe to re-run.

use secrecy::SecretString;
use tracing::info;

use shopclerk_support::db::{self, schema};

/// Create the schema and load sample data.
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

    schema::init(&pool).await?;
    schema::seed_sample_data(&pool).await?;

    info!("Sample data loaded");
    Ok(())
}
