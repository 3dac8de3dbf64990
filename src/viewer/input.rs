//! Raw keypress capture
//!
//! A thin shim over crossterm. Everything above this module works with
//! the `Key` enum, so pager transitions stay testable without a
//! terminal.

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use std::io;

/// One logical keypress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Char(char),
    Other,
}

/// Restores cooked mode even on early return
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Blocks until one keypress and returns it as a `Key`
///
/// The terminal is switched to raw mode only for the duration of the
/// read, so interrupted runs leave the shell usable.
pub fn read_key() -> io::Result<Key> {
    let _guard = RawModeGuard::enable()?;

    loop {
        if let Event::Key(key_event) = event::read()? {
            // Windows reports both press and release; keep presses only.
            if key_event.kind != KeyEventKind::Press {
                continue;
            }
            return Ok(match key_event.code {
                KeyCode::Up => Key::ArrowUp,
                KeyCode::Down => Key::ArrowDown,
                KeyCode::Enter => Key::Enter,
                KeyCode::Char(c) => Key::Char(c),
                _ => Key::Other,
            });
        }
    }
}

/// Clears the terminal and homes the cursor
pub fn clear_screen() -> io::Result<()> {
    execute!(
        io::stdout(),
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
}
