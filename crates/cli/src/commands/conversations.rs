//! Conversation review command.
//!
//! ```bash
//! shopclerk conversations -e john@example.com -l 20
//! ```
//!
//! Lists a customer's persisted exchanges, newest first.

use secrecy::SecretString;
use tracing::info;

use shopclerk_core::Email;
use shopclerk_support::db::{self, ConversationRepository, UserRepository};

/// List a customer's recent conversations.
///
/// # Errors
///
/// Returns an error if the environment is incomplete, the email is
/// invalid, or a query fails.
#[allow(clippy::print_stdout)]
pub async fn run(email: &str, limit: i64) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("SUPPORT_DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| "SUPPORT_DATABASE_URL not set")?;

    let email = Email::parse(email)?;
    let pool = db::create_pool(&database_url).await?;

    let Some(user) = UserRepository::new(&pool).get_by_email(&email).await? else {
        return Err(format!("no user with email {email}").into());
    };

    let records = ConversationRepository::new(&pool)
        .recent_for_user(user.id, limit)
        .await?;

    info!(user = %user.name, count = records.len(), "Loaded conversations");

    for record in &records {
        println!("[{}] sentiment {}", record.timestamp, record.sentiment);
        println!("  customer: {}", record.message);
        println!("  bot:      {}", record.response);
    }

    Ok(())
}
