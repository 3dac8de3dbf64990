//! Terminal viewer for previously mined records
//!
//! Loads the CSV back, re-sorts it, and runs a read-render loop until
//! Enter is pressed. The re-sort is deliberate even though the miner
//! already sorted before saving: the file is an external boundary and
//! may have been edited between runs.

pub mod input;
mod pager;

pub use input::Key;
pub use pager::{render_page, truncate_title, Pager, PagerAction};

use crate::config::Config;
use crate::record::sort_by_score;
use crate::store::load_records;
use crate::Result;
use std::io::Write;
use std::path::Path;

/// Runs the interactive viewer until the user returns to the menu
///
/// # Returns
///
/// * `Ok(())` - Viewer exited normally
/// * `Err(ReelError::NoData)` - No saved CSV; caller shows "no data found"
/// * `Err(ReelError)` - Read or terminal failure
pub fn run_viewer(config: &Config) -> Result<()> {
    let mut records = load_records(Path::new(&config.output.csv_path))?;
    sort_by_score(&mut records);
    tracing::debug!("Viewing {} records", records.len());

    let mut pager = Pager::new(records.len(), config.viewer.page_size);

    loop {
        input::clear_screen()?;
        let mut stdout = std::io::stdout();
        stdout.write_all(render_page(&records, &pager).as_bytes())?;
        stdout.flush()?;

        match pager.apply(input::read_key()?) {
            PagerAction::Exit => break,
            PagerAction::Redraw => {}
        }
    }

    Ok(())
}
