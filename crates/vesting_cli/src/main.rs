//! Vestry CLI - command line operations for the vesting engine.
//!
//! # Commands
//!
//! - `vestctl generate --grants <file>` - Regenerate every grant's
//!   schedule and emit the vest events
//! - `vestctl show --grants <file> --id <n>` - Print one grant's schedule
//! - `vestctl check --grants <file>` - Validate every grant without
//!   emitting events
//!
//! Grant records are read from a JSON file; the payroll calendar and RSU
//! cadence come from a TOML configuration file (built-in defaults are
//! used when the file does not exist).

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod io;

pub use error::{CliError, Result};

/// Vestry equity vesting CLI
#[derive(Parser)]
#[command(name = "vestctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "vestctl.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate schedules for every grant in a file
    Generate {
        /// Path to the grants file (JSON)
        #[arg(short, long)]
        grants: String,

        /// Path to a price history file (JSON)
        #[arg(short, long)]
        prices: Option<String>,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the schedule for a single grant
    Show {
        /// Path to the grants file (JSON)
        #[arg(short, long)]
        grants: String,

        /// Grant identifier
        #[arg(short, long)]
        id: u64,

        /// Path to a price history file (JSON)
        #[arg(short, long)]
        prices: Option<String>,
    },

    /// Validate every grant without emitting events
    Check {
        /// Path to the grants file (JSON)
        #[arg(short, long)]
        grants: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = config::CliConfig::load(&cli.config)?;

    match cli.command {
        Commands::Generate {
            grants,
            prices,
            format,
            output,
        } => commands::generate::run(
            &grants,
            prices.as_deref(),
            &format,
            output.as_deref(),
            &config,
        )?,
        Commands::Show { grants, id, prices } => {
            commands::show::run(&grants, id, prices.as_deref(), &config)?
        }
        Commands::Check { grants } => commands::check::run(&grants, &config)?,
    }

    Ok(())
}
