// src/pipeline/harvest.rs

//! Harvest pipeline: fetch, map, write.

use std::path::PathBuf;

use crate::error::Result;
use crate::models::{Config, RunInputs};
use crate::services::CatalogClient;
use crate::storage::ReportStorage;

use super::export::to_csv_bytes;
use super::map::RecordMapper;

/// What a harvest run produced.
#[derive(Debug, Clone)]
pub struct HarvestSummary {
    /// Number of data rows in the report
    pub row_count: usize,

    /// Location of the written report
    pub report_path: PathBuf,

    /// Location of the raw response cache, when enabled
    pub raw_response_path: Option<PathBuf>,
}

/// Run one harvest: a single search request, the mapping of every returned
/// record, and one CSV report named after `inputs.run_date`.
///
/// The first failure aborts the run; no report is written when fetching or
/// mapping fails.
pub async fn run_harvest(
    config: &Config,
    inputs: &RunInputs,
    catalog: &CatalogClient,
    storage: &dyn ReportStorage,
) -> Result<HarvestSummary> {
    log::info!(
        "Harvesting up to {} items (selected month {}, not applied to the query)",
        inputs.rows,
        inputs.year_month
    );

    let fetched = catalog.fetch(inputs.rows).await?;

    let raw_response_path = match config.output.raw_response_path() {
        Some(key) => Some(storage.write_raw_response(key, &fetched.raw).await?),
        None => None,
    };

    let rows = RecordMapper::from_config(config).map_all(&fetched.records)?;
    log::debug!("Mapped {} records", rows.len());

    let csv = to_csv_bytes(&rows)?;
    let report_key = format!(
        "{}/{}",
        config.output.reports_dir.trim_end_matches('/'),
        config.output.report_file_name(inputs.run_date)
    );
    let report_path = storage.write_report(&report_key, &csv).await?;

    Ok(HarvestSummary {
        row_count: rows.len(),
        report_path,
        raw_response_path,
    })
}
