//! Interactive menu shell
//!
//! Three options in a loop: mine, view, exit. Mining and viewing both
//! end with an Enter acknowledgment before the menu comes back, and a
//! failed action reports its error instead of tearing the process down.

use crate::config::Config;
use crate::miner::run_mining;
use crate::viewer::{input, run_viewer};
use crate::{ReelError, Result};
use std::io::{BufRead, Write};

/// Runs the menu loop until the user picks exit (or stdin closes)
pub async fn run_shell(config: &Config) -> Result<()> {
    // Inline feedback shown under the menu on the next render.
    let mut notice: Option<String> = None;

    loop {
        input::clear_screen()?;
        println!("\nMovies Data Mining Tool\n");
        println!("  1. Start data mining");
        println!("  2. View extracted records (sorted best score first)");
        println!("  3. Exit");
        if let Some(msg) = notice.take() {
            println!("\n{}", msg);
        }

        let Some(choice) = prompt("\nSelect an option (1-3): ")? else {
            // stdin closed; treat like exit
            return Ok(());
        };

        match choice.trim() {
            "1" => {
                input::clear_screen()?;
                println!("\nStarting data mining...\n");
                match run_mining(config).await {
                    Ok(report) if report.files_written => {
                        println!(
                            "Successfully mined {} movies!\nData saved to '{}' and '{}'.",
                            report.records_mined, config.output.csv_path, config.output.json_path
                        );
                    }
                    Ok(_) => {
                        println!("No records found on the page; saved data left unchanged.");
                    }
                    Err(e) => {
                        println!("Mining failed: {}", e);
                    }
                }
                acknowledge()?;
            }
            "2" => {
                input::clear_screen()?;
                match run_viewer(config) {
                    Ok(()) => {}
                    Err(ReelError::NoData { .. }) => {
                        println!("\nNo data found! Please run the miner first.");
                    }
                    Err(e) => {
                        println!("\nViewing failed: {}", e);
                    }
                }
                acknowledge()?;
            }
            "3" => {
                println!("\nExiting. Have a great day!\n");
                return Ok(());
            }
            other => {
                notice = Some(format!(
                    "Invalid choice '{}'. Please enter a number between 1 and 3.",
                    other
                ));
            }
        }
    }
}

/// Prints a prompt and reads one line; `None` means stdin hit EOF
fn prompt(message: &str) -> Result<Option<String>> {
    print!("{}", message);
    std::io::stdout().flush()?;

    let mut line = String::new();
    let bytes = std::io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

/// Blocks until the user presses Enter
fn acknowledge() -> Result<()> {
    prompt("\nPress Enter to return to the menu...")?;
    Ok(())
}
