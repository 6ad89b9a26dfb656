//! Screen state machine
//!
//! Holds the status message and the currently open dialog. Transitions:
//!
//! - `Idle --press(kind)--> DialogOpen(kind)`
//! - `DialogOpen(kind) --confirm--> Idle` (runs the catalog's confirm action)
//! - `DialogOpen(kind) --cancel--> Idle` (status untouched)
//!
//! An open dialog is modal: presses are ignored until it closes.

use crate::dialog::{lookup, ConfirmEffect, DialogKind};

/// Status shown before any dialog has been confirmed
pub const DEFAULT_STATUS: &str = "Presiona un botón para una acción";

/// Which state the screen is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    DialogOpen(DialogKind),
}

/// Outcome of a state machine call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A dialog was opened
    Opened(DialogKind),
    /// A dialog was confirmed and replaced the status
    Confirmed {
        kind: DialogKind,
        status: &'static str,
    },
    /// A dialog was confirmed without changing the status
    Acknowledged(DialogKind),
    /// A dialog was closed without confirming
    Dismissed(DialogKind),
    /// Nothing changed
    Ignored,
}

impl Transition {
    pub fn changed(&self) -> bool {
        !matches!(self, Transition::Ignored)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenState {
    pub status_message: String,
    pub open_dialog: Option<DialogKind>,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenState {
    pub fn new() -> Self {
        Self {
            status_message: DEFAULT_STATUS.to_string(),
            open_dialog: None,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.open_dialog {
            Some(kind) => Phase::DialogOpen(kind),
            None => Phase::Idle,
        }
    }

    /// Open the dialog for `kind` (button press)
    pub fn press(&mut self, kind: DialogKind) -> Transition {
        if self.open_dialog.is_some() {
            return Transition::Ignored;
        }
        self.open_dialog = Some(kind);
        Transition::Opened(kind)
    }

    /// Confirm the open dialog, running its confirm action
    pub fn confirm(&mut self) -> Transition {
        let Some(kind) = self.open_dialog.take() else {
            return Transition::Ignored;
        };
        match (lookup(kind).on_confirm)() {
            ConfirmEffect::SetStatus(status) => {
                self.status_message = status.to_string();
                Transition::Confirmed { kind, status }
            }
            ConfirmEffect::Dismiss => Transition::Acknowledged(kind),
        }
    }

    /// Close the open dialog without confirming (cancel button or dismiss gesture)
    pub fn cancel(&mut self) -> Transition {
        match self.open_dialog.take() {
            Some(kind) => Transition::Dismissed(kind),
            None => Transition::Ignored,
        }
    }
}
