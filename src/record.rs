//! The mined record type and its ranking invariant

use serde::{Deserialize, Serialize};

/// One (title, score) pair extracted from the listing page
///
/// Scores are percentages in [0, 100]; a missing or unparsable score is
/// coerced to 0 at extraction time rather than rejected. Titles are not
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Score")]
    pub score: u32,
}

impl Record {
    pub fn new(title: impl Into<String>, score: u32) -> Self {
        Self {
            title: title.into(),
            score,
        }
    }
}

/// Normalizes score text to an integer
///
/// Strips a trailing percent sign and parses the rest; anything that does
/// not parse cleanly becomes 0 rather than an error. Both the extractor
/// and the CSV loader apply this same leniency.
pub fn parse_score(text: &str) -> u32 {
    let trimmed = text.trim();
    let digits = trimmed.strip_suffix('%').unwrap_or(trimmed);
    digits.trim().parse().unwrap_or(0)
}

/// Sorts records by score, highest first
///
/// The sort is stable: records with equal scores keep their relative
/// order, so repeated runs over identical input produce identical files.
pub fn sort_by_score(records: &mut [Record]) {
    records.sort_by(|a, b| b.score.cmp(&a.score));
}
