//! e-Paper Locator CLI
//!
//! Resolves daily e-paper editions against the configured asset origin.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use epaper_locator::{
    error::{AppError, Result},
    models::{Config, EditionReference},
    services::EditionLocator,
};

/// epaper - Daily Edition Locator
#[derive(Parser, Debug)]
#[command(name = "epaper", version, about = "Daily e-paper edition locator")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "locator.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit results as JSON instead of plain text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve today's edition
    Today,

    /// Resolve the edition for a specific date (YYYY-MM-DD or DD.MM.YYYY)
    Date {
        /// Date to look up
        date: String,
    },

    /// List editions for the last N days
    Archive {
        /// Number of days to check, ending today
        #[arg(long, default_value_t = 30)]
        days: usize,

        /// Only list editions that actually exist
        #[arg(long)]
        available_only: bool,
    },

    /// Show the canonical upload filename and path for today's edition
    Publish,

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Parse a date argument in either ISO or display format.
fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, "%d.%m.%Y"))
        .map_err(|e| AppError::date(input, e))
}

/// Print a single edition reference.
fn print_reference(reference: &EditionReference, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reference)?);
    } else {
        println!("{}", reference.format("{date}  {file}  {status}"));
        println!("    {}", reference.resolved_url);
    }
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    config.validate()?;
    let config = Arc::new(config);

    match cli.command {
        Command::Today => {
            let locator = EditionLocator::new(Arc::clone(&config))?;
            let reference = locator.resolve_for_today().await;
            print_reference(&reference, cli.json)?;

            if !reference.available && !cli.json {
                let instructions = locator.upload_instructions(reference.logical_date);
                println!();
                println!("No edition uploaded yet. To publish today's edition, place");
                println!("the PDF at: {}", instructions.path);
            }
        }

        Command::Date { date } => {
            let date = parse_date(&date)?;
            let locator = EditionLocator::new(Arc::clone(&config))?;
            let reference = locator.resolve_for_date(date).await;
            print_reference(&reference, cli.json)?;
        }

        Command::Archive {
            days,
            available_only,
        } => {
            let locator = EditionLocator::new(Arc::clone(&config))?;
            let anchor = Local::now().date_naive();

            log::info!("Checking the last {} days for editions...", days);
            let references = if available_only {
                locator.existing_editions(anchor, days).await
            } else {
                locator.resolve_range(anchor, days).await
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&references)?);
            } else {
                for reference in &references {
                    println!("{}", reference.format("{date}  {file}  {status}"));
                }
                let found = references.iter().filter(|r| r.available).count();
                log::info!("{} of {} days have an edition", found, references.len());
            }
        }

        Command::Publish => {
            let locator = EditionLocator::new(Arc::clone(&config))?;
            let instructions = locator.upload_instructions(Local::now().date_naive());

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&instructions)?);
            } else {
                println!("Upload filename: {}", instructions.filename);
                println!("Publish path:    {}", instructions.path);
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            // load_or_default already fell back on parse errors; re-load
            // strictly so a broken file is reported instead of masked.
            let strict = Config::load(&cli.config)?;
            strict.validate()?;
            log::info!("Config OK ({} base names)", strict.locator.base_names.len());
        }
    }

    Ok(())
}
