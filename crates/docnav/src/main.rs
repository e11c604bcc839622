//! docnav CLI - documentation site navigation composer.
//!
//! Provides commands for:
//! - `check`: Validate the site definition
//! - `export`: Write the framework configuration as JSON
//! - `sidebar`: Show the sidebar selected for a page path
//! - `serve`: Serve the composed configuration over HTTP

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExportArgs, ServeArgs, SidebarArgs};
use error::CliError;
use output::Output;

/// docnav - documentation site navigation composer.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    /// Enable verbose logging (overrides `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the site definition.
    Check(CheckArgs),
    /// Write the framework configuration as JSON.
    Export(ExportArgs),
    /// Show the sidebar selected for a page path.
    Sidebar(SidebarArgs),
    /// Serve the composed configuration over HTTP.
    Serve(ServeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .map_err(CliError::from)
            .and_then(|rt| rt.block_on(args.execute())),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
