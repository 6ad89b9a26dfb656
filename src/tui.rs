//! Terminal setup and management
//!
//! Handles terminal initialization, restoration, and provides RAII guards
//! for safe cleanup on exit or panic.

use crate::errors::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{stdout, Stdout};

/// Type alias for our terminal backend
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize terminal for TUI mode
///
/// Sets up raw mode and the alternate screen, plus mouse capture when
/// `mouse` is set.
///
/// # Errors
/// Returns error if terminal setup fails (e.g., not a TTY).
pub fn init(mouse: bool) -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Restore terminal to normal state
///
/// Safe to call multiple times, and whether or not mouse capture was enabled.
pub fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// RAII guard that restores terminal state on drop
///
/// Keeps the user's terminal usable even if the TUI panics.
pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_without_init_is_harmless() {
        // The guard is created before init, so it may drop with nothing to undo
        drop(TerminalGuard);
        drop(TerminalGuard);
    }
}
