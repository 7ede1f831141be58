//! Map Harvest CLI
//!
//! Prompts for any run parameter not given as a flag, then runs one harvest.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use map_harvest::{
    error::Result,
    models::{Config, ResultCount, RunInputs, YearMonth},
    pipeline::{self, HarvestSummary},
    services::CatalogClient,
    storage::LocalStorage,
    utils::{http, prompt},
};

/// map-harvest - UMedia new map items report
#[derive(Parser, Debug)]
#[command(
    name = "map-harvest",
    version,
    about = "Harvest newly added map items into a CSV report"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Directory the reports directory and response cache live under
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Number of results to request (prompted for when omitted)
    #[arg(short, long)]
    rows: Option<ResultCount>,

    /// Selected year and month as YYYY-MM (prompted for when omitted)
    #[arg(short, long)]
    month: Option<YearMonth>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Resolve run parameters from flags, prompting for the missing ones.
fn collect_inputs<R: BufRead, W: Write>(
    cli: &Cli,
    input: &mut R,
    output: &mut W,
) -> Result<RunInputs> {
    let rows = match cli.rows {
        Some(rows) => rows,
        None => prompt::ask_parsed(input, output, prompt::RESULT_COUNT_PROMPT)?,
    };
    let year_month = match cli.month {
        Some(month) => month,
        None => prompt::ask_parsed(input, output, prompt::YEAR_MONTH_PROMPT)?,
    };

    Ok(RunInputs {
        rows,
        year_month,
        run_date: Local::now().date_naive(),
    })
}

/// Run one harvest. Inputs are resolved before any request is made.
async fn run<R: BufRead, W: Write>(
    cli: &Cli,
    input: &mut R,
    output: &mut W,
) -> Result<HarvestSummary> {
    let config = Config::load_or_default(&cli.config);
    config.validate()?;

    let inputs = collect_inputs(cli, input, output)?;

    let client = http::create_async_client(&config.api)?;
    let catalog = CatalogClient::new(client, config.api.clone());
    let storage = LocalStorage::new(&cli.root);

    let summary = pipeline::run_harvest(&config, &inputs, &catalog, &storage).await?;
    log::info!(
        "{} rows written to {}",
        summary.row_count,
        summary.report_path.display()
    );

    writeln!(output, "#### CSV report is created ####")?;
    Ok(summary)
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    run(&cli, &mut io::stdin().lock(), &mut io::stdout()).await?;
    Ok(())
}
