//! Mining pipeline: fetch, extract, rank, persist
//!
//! This module contains the core mining logic, including:
//! - HTTP fetching of the listing page
//! - HTML extraction of (title, score) pairs
//! - Ranking and persistence of the result

mod extractor;
mod fetcher;

pub use extractor::extract_records;
pub use fetcher::{build_http_client, fetch_listing};

use crate::config::Config;
use crate::record::sort_by_score;
use crate::store::save_records;
use crate::Result;
use std::path::Path;

/// Outcome of one mining run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiningReport {
    /// Number of records extracted from the page
    pub records_mined: usize,

    /// Whether the CSV/JSON files were (over)written
    ///
    /// A run that extracts zero records skips writing entirely and leaves
    /// any previously saved files untouched.
    pub files_written: bool,
}

/// Runs a complete mining pipeline
///
/// Fetches the configured listing page, extracts records in document
/// order, sorts them best-score-first, and overwrites both output files.
/// A zero-record extraction is reported as success with nothing written.
///
/// # Arguments
///
/// * `config` - The tool configuration
///
/// # Returns
///
/// * `Ok(MiningReport)` - Pipeline completed
/// * `Err(ReelError)` - Fetch or persistence failed
pub async fn run_mining(config: &Config) -> Result<MiningReport> {
    let client = build_http_client(&config.source.user_agent)?;

    tracing::info!("Fetching listing page: {}", config.source.url);
    let html = fetch_listing(&client, &config.source.url).await?;
    tracing::debug!("Fetched {} bytes of HTML", html.len());

    let mut records = extract_records(&html);
    tracing::info!("Extracted {} records", records.len());

    if records.is_empty() {
        // Nothing to rank or save; keep whatever a previous run wrote.
        tracing::warn!("No records extracted; leaving saved files untouched");
        return Ok(MiningReport {
            records_mined: 0,
            files_written: false,
        });
    }

    sort_by_score(&mut records);

    save_records(
        &records,
        Path::new(&config.output.csv_path),
        Path::new(&config.output.json_path),
    )?;
    tracing::info!(
        "Saved {} records to '{}' and '{}'",
        records.len(),
        config.output.csv_path,
        config.output.json_path
    );

    Ok(MiningReport {
        records_mined: records.len(),
        files_written: true,
    })
}
