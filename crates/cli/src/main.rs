//! Roster CLI - Drive the record stores from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Add a user
//! roster user add -n "John Doe" -a 25 -e john.doe@example.com
//!
//! # List, search, update, delete
//! roster user list
//! roster user search doe
//! roster user update-email -n "John Doe" -e new_email@example.com
//! roster user delete "John Doe"
//!
//! # Statistics over the users table
//! roster user stats
//!
//! # Admins live in their own table and carry a role
//! roster admin add -n "Admin User" -a 30 -e admin@example.com -r superuser
//! roster admin search Admin
//!
//! # Insert the demo data set
//! roster seed
//! ```
//!
//! # Environment Variables
//!
//! - `HOST` - `PostgreSQL` server host
//! - `DATABASE` - Database name
//! - `DATABASE_USER` / `DATABASE_PASSWORD` - Credentials
//! - `DATABASE_PORT` - Server port (optional, default 5432)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use roster_store::{StoreConfig, create_pool};

mod commands;

#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version, about = "Roster record store CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Operate on the users table
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Operate on the admins table
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Insert the demo data set (three users, one admin)
    Seed,
}

#[derive(Subcommand)]
enum UserAction {
    /// Add a user
    Add {
        /// User's name
        #[arg(short, long)]
        name: String,

        /// User's age in years
        #[arg(short, long)]
        age: i64,

        /// User's email address
        #[arg(short, long)]
        email: String,
    },
    /// List all users in insertion order
    List {
        /// Emit JSON instead of log lines
        #[arg(long)]
        json: bool,
    },
    /// Search users by name (case-insensitive substring)
    Search {
        /// Substring to look for
        needle: String,

        /// Emit JSON instead of log lines
        #[arg(long)]
        json: bool,
    },
    /// Update the email of every user matching a name (case-insensitive)
    UpdateEmail {
        /// Name to match
        #[arg(short, long)]
        name: String,

        /// New email address
        #[arg(short, long)]
        email: String,
    },
    /// Delete every user with exactly this name (case-sensitive)
    Delete {
        /// Name to match exactly
        name: String,
    },
    /// Print user count and average age
    Stats,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Add an admin
    Add {
        /// Admin's name
        #[arg(short, long)]
        name: String,

        /// Admin's age in years
        #[arg(short, long)]
        age: i64,

        /// Admin's email address
        #[arg(short, long)]
        email: String,

        /// Admin's role (free text, e.g. "superuser")
        #[arg(short, long, default_value = "admin")]
        role: String,
    },
    /// List all admins in insertion order
    List {
        /// Emit JSON instead of log lines
        #[arg(long)]
        json: bool,
    },
    /// Search admins by name (case-insensitive substring)
    Search {
        /// Substring to look for
        needle: String,

        /// Emit JSON instead of log lines
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    let pool = create_pool(&config).await?;

    match cli.command {
        Commands::User { action } => match action {
            UserAction::Add { name, age, email } => {
                commands::user::add(&pool, &name, age, &email).await?;
            }
            UserAction::List { json } => commands::user::list(&pool, json).await?,
            UserAction::Search { needle, json } => {
                commands::user::search(&pool, &needle, json).await?;
            }
            UserAction::UpdateEmail { name, email } => {
                commands::user::update_email(&pool, &name, &email).await?;
            }
            UserAction::Delete { name } => commands::user::delete(&pool, &name).await?,
            UserAction::Stats => commands::user::stats(&pool).await?,
        },
        Commands::Admin { action } => match action {
            AdminAction::Add {
                name,
                age,
                email,
                role,
            } => commands::admin::add(&pool, &name, age, &email, &role).await?,
            AdminAction::List { json } => commands::admin::list(&pool, json).await?,
            AdminAction::Search { needle, json } => {
                commands::admin::search(&pool, &needle, json).await?;
            }
        },
        Commands::Seed => commands::seed::run(&pool).await?,
    }

    pool.close().await;
    Ok(())
}
