//! CLI administration tool for travel-api.
//!
//! Manages the PostgreSQL store directly, without going through the HTTP API.
//! Writes go through [`TravelService`], so the same field rules apply.
//!
//! # Usage
//!
//! ```bash
//! # Apply migrations
//! cargo run --bin admin -- db migrate
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Manage records
//! cargo run --bin admin -- travel list
//! cargo run --bin admin -- travel show 3
//! cargo run --bin admin -- travel create --destination Lisbon --details "Tram 28"
//! cargo run --bin admin -- travel delete 3
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use travel_api::application::services::TravelService;
use travel_api::config::{Config, mask_connection_string};
use travel_api::domain::entities::{NewTravel, Travel};
use travel_api::error::AppError;
use travel_api::infrastructure::persistence::PgTravelRepository;
use travel_api::server::migrate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing travel-api.
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
    /// Manage travel records
    Travel {
        #[command(subcommand)]
        action: TravelAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Travel record subcommands.
#[derive(Subcommand)]
enum TravelAction {
    /// List all travel records
    List,

    /// Show a single record
    Show { id: i64 },

    /// Create a record
    Create {
        #[arg(long)]
        destination: String,

        #[arg(long)]
        details: String,
    },

    /// Delete a record
    Delete {
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

    /// Apply pending migrations
    Migrate,
}

type PgTravelService = TravelService<PgTravelRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("Database is not configured")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Travel { action } => handle_travel_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await?,
    }

    Ok(())
}

async fn handle_travel_action(action: TravelAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgTravelRepository::new(Arc::new(pool.clone())));
    let service = TravelService::new(repo);

    match action {
        TravelAction::List => list_travels(&service).await?,
        TravelAction::Show { id } => show_travel(&service, id).await?,
        TravelAction::Create {
            destination,
            details,
        } => create_travel(&service, destination, details).await?,
        TravelAction::Delete { id, yes } => delete_travel(&service, id, yes).await?,
    }

    Ok(())
}

/// Lists all records.
///
/// ```text
/// Travels
///
///   ID    Destination                    Details
///   ──────────────────────────────────────────────────────────────
///   1     Lisbon                         Tram 28
/// ```
async fn list_travels(service: &PgTravelService) -> Result<()> {
    println!("{}", "Travels".bright_blue().bold());
    println!();

    let travels = service.list().await.map_err(cli_error)?;

    if travels.is_empty() {
        println!("{}", "  No travels found".yellow());
        println!();
        println!(
            "  Create one with: {} admin travel create --destination <NAME> --details <TEXT>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {}",
        "ID".bright_white().bold(),
        "Destination".bright_white().bold(),
        "Details".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for travel in &travels {
        println!(
            "  {:<5} {:<30} {}",
            travel.id.to_string().bright_black(),
            travel.destination.cyan(),
            travel.details
        );
    }

    println!();
    println!(
        "  Total: {}",
        travels.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn show_travel(service: &PgTravelService, id: i64) -> Result<()> {
    let travel = service.retrieve(id).await.map_err(cli_error)?;
    print_travel(&travel);
    Ok(())
}

async fn create_travel(
    service: &PgTravelService,
    destination: String,
    details: String,
) -> Result<()> {
    let new_travel = NewTravel::new(destination.trim(), details.trim());

    let travel = service.create(new_travel).await.map_err(cli_error)?;

    println!("{}", "Travel created".green().bold());
    print_travel(&travel);

    Ok(())
}

async fn delete_travel(service: &PgTravelService, id: i64, skip_confirm: bool) -> Result<()> {
    let travel = service.retrieve(id).await.map_err(cli_error)?;
    print_travel(&travel);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete travel #{}?", travel.id))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service.destroy(id).await.map_err(cli_error)?;
    println!("{}", "Travel deleted".green().bold());

    Ok(())
}

fn print_travel(travel: &Travel) {
    println!();
    println!("  {}          {}", "ID:".bright_white(), travel.id);
    println!("  {} {}", "Destination:".bright_white(), travel.destination.cyan());
    println!("  {}     {}", "Details:".bright_white(), travel.details);
    println!();
}

async fn handle_db_action(action: DbAction, pool: &PgPool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await
                .context("Database query failed")?;

            println!("{}", "Database connection OK".green().bold());
            println!("  URL:     {}", mask_connection_string(database_url).cyan());
            println!("  Server:  {}", version.bright_black());
        }
        DbAction::Migrate => {
            migrate(pool).await?;
            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}

/// Renders an [`AppError`] with its field details for the terminal.
fn cli_error(err: AppError) -> anyhow::Error {
    let info = err.to_error_info();
    if info.details.as_object().is_some_and(|d| !d.is_empty()) {
        anyhow::anyhow!("{} {}", info.message, info.details)
    } else {
        anyhow::anyhow!("{}", info.message)
    }
}
