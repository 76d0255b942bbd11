//! CLI administration tool for account-api.
//!
//! Provides commands for issuing tokens, managing accounts and performing
//! database operations without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Issue a token for account 1
//! cargo run --bin admin -- token issue 1
//!
//! # List all accounts
//! cargo run --bin admin -- account list
//!
//! # Create an account
//! cargo run --bin admin -- account create --first-name Ada --last-name Lovelace
//!
//! # Delete an account
//! cargo run --bin admin -- account delete 1
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`
//! - `JWT_SECRET` (required for `token issue`): signing secret shared with the server
//! - `JWT_TTL_SECONDS` (optional): token lifetime, defaults to the server default

use account_api::application::services::token_service::DEFAULT_TOKEN_TTL_SECONDS;
use account_api::application::services::{AccountService, TokenService};
use account_api::config;
use account_api::infrastructure::persistence::PgAccountRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing account-api.
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
    /// Issue access tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Manage accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Issue a token bound to an account
    Issue {
        /// Account id
        account_id: i64,
    },
}

#[derive(Subcommand)]
enum AccountAction {
    /// List all accounts
    List,

    /// Create a new account
    Create {
        #[arg(short, long)]
        first_name: Option<String>,

        #[arg(short, long)]
        last_name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Delete an account
    Delete {
        /// Account id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = config::database_url_from_env()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let service = AccountService::new(Arc::new(PgAccountRepository::new(Arc::new(
        pool.clone(),
    ))));

    match cli.command {
        Commands::Token { action } => handle_token_action(action, &service).await?,
        Commands::Account { action } => handle_account_action(action, &service).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_token_action(action: TokenAction, service: &AccountService) -> Result<()> {
    match action {
        TokenAction::Issue { account_id } => issue_token(service, account_id).await,
    }
}

/// Issues a token for an existing account and prints it with a usage example.
async fn issue_token(service: &AccountService, account_id: i64) -> Result<()> {
    println!("{}", "🔑 Issue Token".bright_blue().bold());
    println!();

    let secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
    let ttl = std::env::var("JWT_TTL_SECONDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TOKEN_TTL_SECONDS);

    let account = service
        .get_account(account_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load account: {}", e))?;

    let token = TokenService::new(&secret, ttl)
        .issue(&account)
        .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))?;

    println!(
        "  Account: {} {} (#{})",
        account.first_name.cyan(),
        account.last_name.cyan(),
        account.number.to_string().bright_black()
    );
    println!("  Expires: in {}s", ttl.to_string().bright_white());
    println!("  Token:   {}", token.bright_yellow().bold());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"x-jwt-token: {}\" http://localhost:3000/account/{}",
        token.bright_yellow(),
        account.id
    );
    println!();

    Ok(())
}

/// Dispatches account management commands.
async fn handle_account_action(action: AccountAction, service: &AccountService) -> Result<()> {
    match action {
        AccountAction::List => list_accounts(service).await,
        AccountAction::Create {
            first_name,
            last_name,
            yes,
        } => create_account(service, first_name, last_name, yes).await,
        AccountAction::Delete { id, yes } => delete_account(service, id, yes).await,
    }
}

/// Lists all accounts.
///
/// # Output Format
///
/// ```text
/// 📋 Accounts
///
///   ID    Name                           Number     Balance    Created
///   ─────────────────────────────────────────────────────────────────────────────
///   1     Ada Lovelace                   482913     0          2024-06-01 10:30
/// ```
async fn list_accounts(service: &AccountService) -> Result<()> {
    println!("{}", "📋 Accounts".bright_blue().bold());
    println!();

    let accounts = service
        .list_accounts()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list accounts: {}", e))?;

    if accounts.is_empty() {
        println!("{}", "  No accounts found".yellow());
        println!();
        println!(
            "  Create one with: {} admin account create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {:<10} {:<10} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Number".bright_white().bold(),
        "Balance".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(77).bright_black());

    for account in &accounts {
        let name = format!("{} {}", account.first_name, account.last_name);
        println!(
            "  {:<5} {:<30} {:<10} {:<10} {}",
            account.id.to_string().bright_black(),
            name.cyan(),
            account.number,
            account.balance,
            account
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        accounts.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Creates an account, prompting for missing names.
async fn create_account(
    service: &AccountService,
    first_name: Option<String>,
    last_name: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create Account".bright_blue().bold());
    println!();

    let first_name = match first_name {
        Some(n) => n,
        None => Input::new().with_prompt("First name").interact_text()?,
    };
    let last_name = match last_name {
        Some(n) => n,
        None => Input::new().with_prompt("Last name").interact_text()?,
    };

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Create account for {first_name} {last_name}?"))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let account = service
        .create_account(&first_name, &last_name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

    println!();
    println!("{}", "✅ Account created successfully!".green().bold());
    println!("  ID:     {}", account.id.to_string().bright_white());
    println!("  Number: {}", account.number.to_string().bright_white());
    println!();

    Ok(())
}

/// Deletes an account after confirmation (default: No).
async fn delete_account(service: &AccountService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Account".bright_blue().bold());
    println!();

    let account = service
        .get_account(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load account: {}", e))?;

    println!(
        "  Account: {} {}",
        account.first_name.cyan(),
        account.last_name.cyan()
    );
    println!("  ID:      {}", account.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this account?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_account(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete account: {}", e))?;

    println!("{}", "✅ Account deleted".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let accounts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM account")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Accounts:   {}",
                accounts.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
