//! PJY CLI - Content QA and catalog inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Report bilingual content completeness across the catalog
//! pjy-cli catalog check
//!
//! # Dump the normalized catalog as JSON
//! pjy-cli catalog dump
//!
//! # Dump a single product by slug
//! pjy-cli catalog dump -s 55-inch-all-in-one-touch-screen-machine
//! ```
//!
//! # Commands
//!
//! - `catalog check` - bilingual completeness report (the CLI counterpart
//!   of the admin preview page)
//! - `catalog dump` - normalized catalog as JSON

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pjy-cli")]
#[command(author, version, about = "PJY catalog CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the normalized catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Report bilingual content completeness
    Check,
    /// Dump normalized products as JSON
    Dump {
        /// Dump a single product by slug
        #[arg(short, long)]
        slug: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::Check => commands::catalog::check().await?,
            CatalogAction::Dump { slug } => commands::catalog::dump(slug.as_deref()).await?,
        },
    }
    Ok(())
}
