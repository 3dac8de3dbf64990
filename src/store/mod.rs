//! Persistence for mined records
//!
//! One record set, two encodings: a CSV file with a `Title,Score` header
//! and a pretty-printed JSON array of objects. Every save is a
//! whole-file overwrite; there is no append, merge, or versioning.

mod tabular;

pub use tabular::{parse_rows, write_row};

use crate::record::{parse_score, Record};
use crate::{ReelError, Result};
use std::path::Path;

/// Header row of the tabular file
const CSV_HEADER: [&str; 2] = ["Title", "Score"];

/// Saves the record set to both output files
///
/// Both writes are attempted even if the first fails, so a permission
/// problem on one path never silently skips the other; the first failure
/// is then propagated.
pub fn save_records(records: &[Record], csv_path: &Path, json_path: &Path) -> Result<()> {
    let csv_result = write_csv(records, csv_path);
    if let Err(e) = &csv_result {
        tracing::error!("Failed to write {}: {}", csv_path.display(), e);
    }

    let json_result = write_json(records, json_path);
    if let Err(e) = &json_result {
        tracing::error!("Failed to write {}: {}", json_path.display(), e);
    }

    csv_result?;
    json_result
}

fn write_csv(records: &[Record], path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    write_row(&mut buf, &CSV_HEADER)?;
    for record in records {
        let score = record.score.to_string();
        write_row(&mut buf, &[record.title.as_str(), score.as_str()])?;
    }
    std::fs::write(path, buf)?;
    Ok(())
}

fn write_json(records: &[Record], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json + "\n")?;
    Ok(())
}

/// Loads records back from the tabular file
///
/// A missing file is a recoverable `NoData` condition (the viewer shows
/// "no data found"). Row parsing is lenient, matching extraction policy:
/// a malformed or missing score field becomes 0, never an error. The
/// returned order is whatever the file holds; callers re-sort.
pub fn load_records(csv_path: &Path) -> Result<Vec<Record>> {
    if !csv_path.exists() {
        return Err(ReelError::NoData {
            path: csv_path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(csv_path)?;
    let mut rows = parse_rows(&content);

    // Our own files always start with the header; tolerate its absence in
    // externally produced ones.
    if rows.first().is_some_and(|r| is_header_row(r)) {
        rows.remove(0);
    }

    let records = rows
        .into_iter()
        .map(|row| {
            let title = row.first().cloned().unwrap_or_default();
            let score = row.get(1).map(|s| parse_score(s)).unwrap_or(0);
            Record { title, score }
        })
        .collect();

    Ok(records)
}

/// A row is only a header if its first cell says "title" AND its second
/// cell is not numeric, so a data row for a movie literally named
/// "Title" is kept.
fn is_header_row(row: &[String]) -> bool {
    let first_says_title = row
        .first()
        .is_some_and(|cell| cell.eq_ignore_ascii_case("title"));
    let second_is_numeric = row.get(1).is_some_and(|cell| {
        let trimmed = cell.trim();
        let digits = trimmed.strip_suffix('%').unwrap_or(trimmed);
        digits.trim().parse::<u32>().is_ok()
    });
    first_says_title && !second_is_numeric
}
