//! HTML extractor for (title, score) pairs
//!
//! The extractor is brittle by construction: it keys off the listing
//! site's current class names and silently produces an empty set if the
//! markup changes. That is an accepted limitation of mining a page that
//! offers no API, not a bug to fix here.

use crate::record::{parse_score, Record};
use scraper::{ElementRef, Html, Selector};

/// Class marking a movie title element in the listing markup
const TITLE_CLASS: &str = "article_movie_title";

/// Class marking a score element in the listing markup
const SCORE_CLASS: &str = "tMeterScore";

/// Extracts one record per title element, in document order
///
/// Each title is paired with the nearest *following* score element in the
/// document. If two titles precede a single score they share it; a title
/// with no following score at all gets a score of 0.
pub fn extract_records(html: &str) -> Vec<Record> {
    let document = Html::parse_document(html);

    // A selector list keeps the combined matches in document order, which
    // is what "nearest following" pairing relies on.
    let combined = match Selector::parse(&format!(".{}, .{}", TITLE_CLASS, SCORE_CLASS)) {
        Ok(sel) => sel,
        Err(_) => return Vec::new(),
    };

    let elements: Vec<ElementRef> = document.select(&combined).collect();

    // For each position, the score carried by the nearest following score
    // element (computed with one backward sweep).
    let mut next_score: Vec<Option<u32>> = vec![None; elements.len()];
    let mut carried = None;
    for (i, element) in elements.iter().enumerate().rev() {
        if is_score(element) {
            carried = Some(parse_score(&element_text(element)));
        }
        next_score[i] = carried;
    }

    let mut records = Vec::new();
    for (i, element) in elements.iter().enumerate() {
        if !is_score(element) {
            records.push(Record {
                title: element_text(element),
                score: next_score[i].unwrap_or(0),
            });
        }
    }

    records
}

fn is_score(element: &ElementRef) -> bool {
    element.value().classes().any(|c| c == SCORE_CLASS)
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
