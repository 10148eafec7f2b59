//! Raw mode RAII guard.

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// Raw mode with a hidden cursor, both undone on drop.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let _ = execute!(io::stdout(), Hide);
        Ok(Self { active: true })
    }

    pub fn disable(&mut self) {
        if self.active {
            let _ = execute!(io::stdout(), Show);
            let _ = disable_raw_mode();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}
