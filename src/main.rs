/// IRD Search - keyword search over annotated IRD feature files
///
/// The main entry point. It parses command-line arguments, sets up logging and
/// runs the search, mapping failures to a non-zero exit status.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use ird_search::app;
use ird_search::config::SearchConfig;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "ird_search",
    about = "Searches an annotated IRD feature file for tax-related keywords",
    long_about = "ird_search parses an annotated IRD feature file and searches the feature context
using a selection of keywords:
- GST
- IRD
- Inland
- Invoice
- Transaction

Every keyword found in a record context produces its own report block."
)]
struct Args {
    /// Annotated output file (tab-separated: location, feature, context[, file name[, MD5]])
    #[arg(value_name = "ANNOTATED_FILE")]
    annotated_file: PathBuf,
}

/// Main entry point function
fn main() -> ExitCode {
    let args = Args::parse();

    setup_logging();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Run the search against stdout
fn run(args: &Args) -> Result<()> {
    let config = SearchConfig::new(&args.annotated_file);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let summary = app::run(&config, &mut handle)
        .with_context(|| format!("search of {} failed", args.annotated_file.display()))?;
    handle.flush().context("failed to flush standard output")?;

    info!(
        "Finished: {} records, {} matches",
        summary.records, summary.matches
    );
    Ok(())
}

/// Set up logging on stderr; RUST_LOG overrides the default `warn` level
fn setup_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    builder.format(|buf, record| {
        use chrono::Local;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    builder.target(env_logger::Target::Stderr);
    builder.init();
}
