//! Payflow Demo CLI
//!
//! Command-line interface for the payflow payment demo: a session-aware
//! landing menu, a mock login, and the interactive payment dialog.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod feedback;
mod ui;

#[derive(Parser)]
#[command(name = "payflow")]
#[command(about = "Payflow Demo CLI - make mock cryptocurrency payments", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Custom storage directory
    #[arg(long, global = true)]
    storage_dir: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session marker
    Login,

    /// Log out and clear the session marker
    Logout,

    /// Show the current session state
    Status,

    /// Open the payment dialog (interactive unless every field is given)
    Pay {
        /// Recipient email address
        #[arg(short, long)]
        recipient: Option<String>,

        /// Cryptocurrency to pay from (BTC or ETH)
        #[arg(short, long)]
        currency: Option<String>,

        /// Amount to send
        #[arg(short, long)]
        amount: Option<String>,

        /// Optional payment description
        #[arg(short, long)]
        description: Option<String>,

        /// Submit to a real HTTP endpoint instead of the simulated backend
        #[arg(long)]
        endpoint: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("payflow_cli=debug,payflow_core=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("payflow_cli=info,payflow_core=warn")
            .init();
    }

    // Setup storage directory
    let storage_dir = if let Some(dir) = cli.storage_dir {
        std::path::PathBuf::from(dir)
    } else {
        dirs::data_local_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("payflow")
    };

    // Dispatch commands; no subcommand opens the landing menu
    match cli.command {
        Some(Commands::Login) => {
            commands::login::run(&storage_dir, cli.verbose).await?;
        }
        Some(Commands::Logout) => {
            commands::logout::run(&storage_dir, cli.verbose).await?;
        }
        Some(Commands::Status) => {
            commands::status::run(&storage_dir, cli.verbose).await?;
        }
        Some(Commands::Pay {
            recipient,
            currency,
            amount,
            description,
            endpoint,
        }) => {
            commands::pay::run(
                &storage_dir,
                recipient,
                currency,
                amount,
                description,
                endpoint,
                cli.verbose,
            )
            .await?;
        }
        None => {
            commands::home::run(&storage_dir, cli.verbose).await?;
        }
    }

    Ok(())
}
