//! Shopclerk CLI - schema management and support-log tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the database schema
//! shopclerk migrate
//!
//! # Create the schema and load sample data
//! shopclerk seed
//!
//! # Review a customer's recent conversations
//! shopclerk conversations -e john@example.com -l 20
//! ```
//!
//! # Commands
//!
//! - `migrate` - Create the support tables
//! - `seed` - Create the tables and load sample users/products/orders/FAQs
//! - `conversations` - List a customer's persisted exchanges

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "shopclerk")]
#[command(author, version, about = "Shopclerk CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database schema
    Migrate,
    /// Create the schema and load sample data
    Seed,
    /// List a customer's recent conversations
    Conversations {
        /// Customer email address
        #[arg(short, long)]
        email: String,

        /// Maximum number of records to show
        #[arg(short, long, default_value_t = 10)]
        limit: i64,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::run().await?,
        Commands::Conversations { email, limit } => {
            commands::conversations::run(&email, limit).await?;
        }
    }
    Ok(())
}
