//! Mexal CLI - command-line interface for the Mexal web API client.
//!
//! Useful for scripting, spot checks, and debugging a Passepartout
//! installation from the terminal: list categories, customers, and
//! referees, dump warehouse movements, and derive last delivery dates.

mod commands;

use clap::{Parser, Subcommand};
use tracing::debug;

use mexal_core::config::MexalConfig;
use mexal_core::error::MexalResult;
use mexal_core::logging;

/// Mexal - Passepartout web API client.
#[derive(Parser)]
#[command(
    name = "mexal",
    version,
    about = "Mexal Passepartout API client CLI",
    long_about = "A command-line interface for the Mexal ERP web API.\n\
                   Queries categories, customers, referees, and warehouse movements."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List customer/supplier statistical categories.
    Categories,
    /// List and inspect customers.
    Customers {
        #[command(subcommand)]
        action: commands::customers::CustomersAction,
    },
    /// List customer referees.
    Referees {
        /// Comma-separated field names to fetch (default: all fields).
        #[arg(short = 'F', long, value_delimiter = ',')]
        fields: Vec<String>,
    },
    /// List warehouse movements.
    Movements {
        #[command(subcommand)]
        action: commands::movements::MovementsAction,
    },
    /// Derive the last delivery date per customer.
    Deliveries,
    /// View and initialize configuration.
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() -> MexalResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match cli.config.as_deref() {
        Some(path) => MexalConfig::load_from_file(std::path::Path::new(path))?,
        None => MexalConfig::load_default()?,
    };

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let log_dir = config.effective_log_dir()?;
    let _guard = logging::init_logging(log_level, &log_dir, config.logging.json_output)?;

    debug!("Mexal CLI v{}", mexal_core::constants::APP_VERSION);

    // Dispatch to command handlers
    match cli.command {
        Commands::Categories => commands::categories::run(&config, cli.format).await,
        Commands::Customers { action } => {
            commands::customers::run(&config, action, cli.format).await
        }
        Commands::Referees { fields } => commands::referees::run(&config, &fields, cli.format).await,
        Commands::Movements { action } => {
            commands::movements::run(&config, action, cli.format).await
        }
        Commands::Deliveries => commands::deliveries::run(&config, cli.format).await,
        Commands::Config { action } => commands::config::run(&config, action),
    }
}
