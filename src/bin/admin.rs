//! CLI administration tool for alias-shortener.
//!
//! Operates on the same SQLite store as the server, through the same
//! services, without going over HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Create a user (password is prompted)
//! cargo run --bin admin -- user create --username alice
//!
//! # Look up or remove an alias
//! cargo run --bin admin -- url resolve promo
//! cargo run --bin admin -- url delete promo
//!
//! # Check the store
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` or `STORAGE_PATH`, `ALIAS_LENGTH`,
//! `SESSION_TOKEN_LENGTH`.

use alias_shortener::config;
use alias_shortener::error::AppError;
use alias_shortener::infrastructure::persistence::store;
use alias_shortener::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::SqlitePool;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Inspect or remove aliases
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// Username (prompted if omitted)
        #[arg(short, long)]
        username: Option<String>,
    },
}

#[derive(Subcommand)]
enum UrlAction {
    /// Print the target URL and id of an alias
    Resolve { alias: String },

    /// Delete an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and row counts
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = store::connect(&config.store_options())
        .await
        .context("Failed to open database")?;
    let state = AppState::from_config(pool.clone(), &config);

    match cli.command {
        Commands::User { action } => handle_user_action(action, &state).await?,
        Commands::Url { action } => handle_url_action(action, &state).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_user_action(action: UserAction, state: &AppState) -> Result<()> {
    match action {
        UserAction::Create { username } => create_user(state, username).await,
    }
}

/// Creates a user after prompting for the password twice.
async fn create_user(state: &AppState, username: Option<String>) -> Result<()> {
    println!("{}", "Create user".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    if username.is_empty() || password.is_empty() {
        anyhow::bail!("Username and password must not be empty");
    }

    match state.account_service.register(&username, &password).await {
        Ok(id) => {
            println!();
            println!("{}", "User created".green().bold());
            println!("  ID:       {}", id.to_string().bright_black());
            println!("  Username: {}", username.cyan());
            println!();
            Ok(())
        }
        Err(AppError::UsernameConflict { .. }) => {
            println!("{}", format!("Username '{username}' already exists").yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to create user: {}", e)),
    }
}

async fn handle_url_action(action: UrlAction, state: &AppState) -> Result<()> {
    match action {
        UrlAction::Resolve { alias } => match state.url_service.find_entry(&alias).await {
            Ok(entry) => {
                println!(
                    "  {} -> {}",
                    entry.alias.cyan(),
                    entry.target.bright_white()
                );
                println!("  ID: {}", entry.id.to_string().bright_black());
                Ok(())
            }
            Err(AppError::NotFound { .. }) => {
                println!("{}", format!("Alias '{alias}' not found").yellow());
                Ok(())
            }
            Err(e) => Err(anyhow::anyhow!("Database error: {}", e)),
        },
        UrlAction::Delete { alias, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete alias '{alias}'?"))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "Cancelled".red());
                    return Ok(());
                }
            }

            state
                .url_service
                .delete_url(&alias)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to delete alias: {}", e))?;

            println!("{}", "Alias deleted".green().bold());
            Ok(())
        }
    }
}

async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            store::ping(pool).await.context("Database is not reachable")?;
            println!("{}", "Database connection OK".green().bold());

            for table in ["url", "users", "sessions"] {
                let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                    .fetch_one(pool)
                    .await?;
                println!("  {:<10} {}", table.bright_white(), count.to_string().cyan());
            }

            Ok(())
        }
    }
}
