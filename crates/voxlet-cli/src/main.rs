//! `voxlet` -- CLI binary for inspecting and dry-running voxlet embeds.
//!
//! Provides the following subcommands:
//!
//! - `voxlet resolve` -- Show theme, appearance, origin and endpoints for an embed.
//! - `voxlet bootstrap` -- Run the full bootstrap against a headless page.
//! - `voxlet connection` -- Fetch connection details from the backend.
//!
//! Settings come from `VOXLET_SETTINGS` (JSON) and the individual
//! `VOXLET_*` variables.

use clap::{Parser, Subcommand};

mod commands;

/// voxlet embed widget CLI.
#[derive(Parser)]
#[command(name = "voxlet", about = "voxlet embed widget CLI", version)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show how an embed would be configured, without network access.
    Resolve(commands::resolve::ResolveArgs),

    /// Run the full bootstrap against a headless page and the live backend.
    Bootstrap(commands::bootstrap::BootstrapArgs),

    /// Fetch connection details for a voice session.
    Connection(commands::connection::ConnectionArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Resolve(args) => commands::resolve::run(args)?,
        Commands::Bootstrap(args) => commands::bootstrap::run(args).await?,
        Commands::Connection(args) => commands::connection::run(args).await?,
    }

    Ok(())
}
