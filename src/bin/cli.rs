//! Product lookup CLI
//!
//! Local execution entry point.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use lookup::{error::Result, models::Config, pipeline, services::CatalogIndex, utils};

/// lookup - Batch product code lookup
#[derive(Parser, Debug)]
#[command(
    name = "lookup",
    version,
    about = "Batch product code lookup against supplier catalog pages"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Path to catalog rows file (JSON array of rows)
    #[arg(long, default_value = "data/catalog.json")]
    catalog: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a batch of product codes
    Lookup {
        /// Codes, separated by commas or newlines
        codes: String,

        /// Print results as pretty JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration and catalog files
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Arc::new(Config::load_or_default(&cli.config));

    match cli.command {
        Command::Lookup { codes, json } => {
            let catalog = CatalogIndex::load(&cli.catalog)?;
            let codes = utils::split_codes(&codes);
            if codes.is_empty() {
                log::warn!("No product codes given");
                return Ok(());
            }

            let (results, stats) = pipeline::run_lookup(config, &catalog, &codes).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for r in &results {
                    println!("{}\t{}\t{}\t{}", r.code, r.name, r.stock_status, r.price);
                }
            }

            log::info!(
                "{} found, {} not in catalog, {} failed",
                stats.found,
                stats.not_found,
                stats.failed
            );
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");

            let catalog = CatalogIndex::load(&cli.catalog)?;
            if catalog.is_empty() {
                log::warn!("Catalog is empty");
            }
            log::info!("✓ Catalog OK ({} entries)", catalog.len());

            log::info!("All validations passed!");
        }
    }

    Ok(())
}
