//! Modal dialogs and overlays
//!
//! This module contains all modal/popup rendering functions.

mod dialog;
mod help;
mod history;

pub use dialog::render_dialog;
pub use help::render_help;
pub use history::render_history;
