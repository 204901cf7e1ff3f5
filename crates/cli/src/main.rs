//! StudyMate CLI — the main entry point.
//!
//! Commands:
//! - `init`   — Write a starter config file
//! - `ask`    — One-shot request to the engine (chat, plan, or check-in)
//! - `plan`   — Generate a study plan directly
//! - `serve`  — Start the HTTP API server
//! - `status` — Show the effective configuration

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "studymate",
    about = "StudyMate — a deterministic study-coach assistant",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Send one message to the assistant and print the response
    Ask(commands::ask::AskArgs),

    /// Generate a study plan directly
    Plan(commands::plan::PlanArgs),

    /// Start the HTTP API server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show the effective configuration
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init { force } => commands::init::run(force).await?,
        Commands::Ask(args) => commands::ask::run(args).await?,
        Commands::Plan(args) => commands::plan::run(args).await?,
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Status => commands::status::run().await?,
    }

    Ok(())
}
