//! # devhub
//!
//! Renders the DevHub landing page to a static HTML file.
//!
//! ## Usage
//!
//! ```bash
//! # Built-in catalog to stdout
//! devhub render
//!
//! # Custom catalog, written to a file
//! devhub render --config devhub.toml --out public/index.html
//!
//! # Validate a catalog before publishing
//! devhub check --config devhub.toml
//! ```

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::info;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "devhub")]
#[command(about = "Render the DevHub landing page to static HTML")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(ClapArgs, Debug)]
struct ConfigArgs {
    /// Path to devhub.toml (defaults to the built-in catalog)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the landing page
    Render {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Always render the featured events section
        #[arg(long, conflicts_with = "no_featured")]
        featured: bool,

        /// Never render the featured events section
        #[arg(long)]
        no_featured: bool,

        /// Emit only the landing section instead of a full document
        #[arg(long)]
        fragment: bool,
    },

    /// Validate the event catalog
    Check {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// List events in display order
    Events {
        #[command(flatten)]
        config: ConfigArgs,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout carries rendered HTML
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("Starting devhub v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Render {
            config,
            out,
            featured,
            no_featured,
            fragment,
        } => {
            let toggle = match (featured, no_featured) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            commands::render(config.config.as_deref(), out.as_deref(), toggle, fragment)
        }
        Command::Check { config } => commands::check(config.config.as_deref()),
        Command::Events { config, json } => commands::events(config.config.as_deref(), json),
    }
}
