//! Terminal mode management.
//!
//! Raw mode is acquired through a guard whose `Drop` restores cooked mode
//! and clears the screen, so every exit path (normal quit, error return,
//! panic unwind) leaves the terminal usable and free of frame garbage.

use std::io::{self, Write};

use crossterm::terminal;

/// Scoped raw-mode acquisition. Owned by the session's caller; restoration
/// runs exactly once, when the guard drops.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Switch the terminal into raw mode: byte-at-a-time input, no echo,
    /// no signal generation.
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        tracing::debug!("Raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!("Failed to restore terminal mode: {}", e);
        }
        // Clear the screen and home the cursor so a partially drawn frame
        // does not outlive the program.
        let mut stdout = io::stdout();
        let _ = stdout.write_all(b"\x1b[2J\x1b[H");
        let _ = stdout.flush();
        tracing::debug!("Terminal restored");
    }
}

/// Current terminal size as `(columns, rows)`.
pub fn window_size() -> io::Result<(usize, usize)> {
    let (cols, rows) = terminal::size()?;
    Ok((cols as usize, rows as usize))
}
