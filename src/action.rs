//! Application actions and messages
//!
//! Keyboard and mouse input is translated into an [`Action`] first and then
//! applied by [`App::dispatch`](crate::app::App::dispatch), following the
//! message-passing pattern common in ratatui applications.

use crate::dialog::DialogKind;

/// Actions that can be triggered in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Press the button for a dialog kind
    Press(DialogKind),

    /// Confirm the open dialog
    Confirm,

    /// Close the open dialog without confirming
    Cancel,

    /// Move focus forward (buttons, or choices inside a dialog)
    FocusNext,

    /// Move focus backward
    FocusPrevious,

    /// Activate whatever has focus
    Activate,

    /// Toggle help overlay
    ToggleHelp,

    /// Quit the application
    Quit,

    /// No action (used for unhandled inputs)
    None,
}

impl Action {
    /// Check if this action should trigger a re-render
    pub fn should_render(&self) -> bool {
        !matches!(self, Action::None)
    }
}
