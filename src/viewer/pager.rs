//! Pagination state machine and page rendering
//!
//! The pager owns exactly one piece of mutable state, the current page
//! index. Transitions are pure so they can be tested without a terminal.

use crate::record::Record;
use crate::viewer::input::Key;
use std::fmt::Write;
use std::ops::Range;

/// Titles longer than this are truncated for display only
const TITLE_DISPLAY_WIDTH: usize = 38;

/// What the render loop should do after a keypress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerAction {
    /// Redraw the (possibly unchanged) current page
    Redraw,
    /// Leave the viewer and return to the menu
    Exit,
}

/// Fixed-size paging over a loaded record set
#[derive(Debug, Clone)]
pub struct Pager {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Pager {
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            total,
        }
    }

    /// Zero-based index of the page currently shown
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Total page count; an empty record set still renders one empty page
    pub fn total_pages(&self) -> usize {
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(self.page_size)
        }
    }

    /// Record indices covered by the current page
    pub fn page_range(&self) -> Range<usize> {
        let start = self.page * self.page_size;
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    /// Applies one keypress to the pager state
    ///
    /// Up moves back a page, Down moves forward a page, both saturating
    /// at the ends; Enter exits; every other key is a no-op redraw.
    pub fn apply(&mut self, key: Key) -> PagerAction {
        match key {
            Key::ArrowUp => {
                if self.page > 0 {
                    self.page -= 1;
                }
                PagerAction::Redraw
            }
            Key::ArrowDown => {
                if self.page_range().end < self.total {
                    self.page += 1;
                }
                PagerAction::Redraw
            }
            Key::Enter => PagerAction::Exit,
            Key::Char(_) | Key::Other => PagerAction::Redraw,
        }
    }
}

/// Truncates a title to the display width without touching the record
pub fn truncate_title(title: &str) -> String {
    title.chars().take(TITLE_DISPLAY_WIDTH).collect()
}

/// Renders the current page as text
///
/// Header with `Page N/total`, a column rule, one line per record with
/// the title truncated to 38 chars, and the navigation hint.
pub fn render_page(records: &[Record], pager: &Pager) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "\nExtracted Movies (Sorted Best Score First)  Page {}/{}\n",
        pager.current_page() + 1,
        pager.total_pages()
    )
    .ok();
    writeln!(out, "{:<40}{:<20}", "Title", "Score").ok();
    writeln!(out, "{}", "=".repeat(60)).ok();

    for record in &records[pager.page_range()] {
        writeln!(out, "{:<40}{}%", truncate_title(&record.title), record.score).ok();
    }

    writeln!(
        out,
        "\n(Up) previous page  (Down) next page  (Enter) return to menu"
    )
    .ok();

    out
}
