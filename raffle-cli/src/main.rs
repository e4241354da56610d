mod commands;

use anyhow::Context;
use clap::{Parser, Subcommand};
use raffle_core::{Raffle, RaffleConfig, RaffleError};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that injects the admin password into the config.
const ADMIN_SECRET_ENV: &str = "RAFFLE_ADMIN_SECRET";

#[derive(Parser)]
#[command(name = "raffle")]
#[command(about = "Spreadsheet-driven prize draw")]
#[command(version)]
struct Cli {
    /// Data directory for raffle storage and config.json
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Admin password for protected commands (prompts if omitted)
    #[arg(long, global = true)]
    admin_password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import participants or prizes from a spreadsheet
    #[command(subcommand)]
    Import(commands::ImportCommands),

    /// Draw a prize for a participant
    Draw {
        /// Participant name
        name: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show remaining capacity per prize
    Remaining,

    /// Show participant, prize and winner counts
    Status,

    /// List recorded winners
    Winners,

    /// Export the winners log as CSV
    Export {
        /// Output directory (defaults to the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Background image commands
    #[command(subcommand)]
    Background(commands::BackgroundCommands),

    /// Clear all participants, prizes, winners and settings
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Admin password commands
    #[command(subcommand)]
    Admin(commands::AdminCommands),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "raffle={},raffle_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get data directory
    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("raffle")
    });

    // Ensure data directory exists
    tokio::fs::create_dir_all(&data_dir)
        .await
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    tracing::debug!("Using data directory {}", data_dir.display());

    let mut config = RaffleConfig::load(&data_dir).context("Failed to load config")?;
    if let Ok(secret) = std::env::var(ADMIN_SECRET_ENV) {
        config = config.with_admin_password(secret);
    }

    let raffle = Raffle::open(&data_dir, config).context("Failed to open raffle storage")?;
    let password = cli.admin_password.as_deref();

    // Execute command
    let result = match cli.command {
        Commands::Import(cmd) => commands::handle_import_command(cmd, &raffle, password).await,
        Commands::Draw { name, json } => commands::handle_draw(&raffle, &name, json).await,
        Commands::Remaining => commands::handle_remaining(&raffle).await,
        Commands::Status => commands::handle_status(&raffle).await,
        Commands::Winners => commands::handle_winners(&raffle).await,
        Commands::Export { output } => commands::handle_export(&raffle, password, output).await,
        Commands::Background(cmd) => {
            commands::handle_background_command(cmd, &raffle, password).await
        }
        Commands::Reset { yes } => commands::handle_reset(&raffle, password, yes).await,
        Commands::Admin(cmd) => commands::handle_admin_command(cmd, &raffle, password).await,
    };

    if let Err(e) = result {
        match e {
            RaffleError::MissingInput(msg) => {
                eprintln!("Error: {}", msg);
                eprintln!("Pass the path of an existing spreadsheet or image file");
            }
            RaffleError::NoWinners => {
                eprintln!("Error: No winners recorded yet, nothing to export");
            }
            RaffleError::Unauthorized => {
                eprintln!("Error: Admin password rejected");
                if !raffle.has_admin_password() {
                    eprintln!(
                        "No admin password is set. Use 'raffle admin init' or set {}",
                        ADMIN_SECRET_ENV
                    );
                }
            }
            RaffleError::DuplicatePrize { name, row } => {
                eprintln!("Error: Prize '{}' appears again on row {}", name, row);
                eprintln!("Prize names must be unique, nothing was imported");
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
