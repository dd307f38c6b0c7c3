//! SAP Bit CLI.
//!
//! Provides commands for:
//! - `check`: Validate the site configuration and referenced documents
//! - `resolve`: Show the sidebar and active navbar entry for a page
//! - `serve`: Serve the navigation model over HTTP

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ResolveArgs, ServeArgs};
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// SAP Bit - navigation model for the SAP reference site.
#[derive(Parser)]
#[command(name = "sapbit", version, about)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate configuration and check that referenced documents exist.
    Check(CheckArgs),
    /// Resolve sidebar and navbar highlighting for a page path.
    Resolve(ResolveArgs),
    /// Serve the navigation model over HTTP.
    Serve(ServeArgs),
}

fn main() {
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
        Commands::Resolve(args) => args.execute(),
        Commands::Serve(args) => match tokio::runtime::Runtime::new() {
            Ok(rt) => rt.block_on(args.execute(VERSION)),
            Err(err) => Err(err.into()),
        },
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
