pub mod input;

/// Application events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Keyboard input
    Key(crossterm::event::KeyEvent),
    /// Mouse input (only delivered when mouse capture is enabled)
    Mouse(crossterm::event::MouseEvent),
    /// Terminal resized to (columns, rows)
    Resize(u16, u16),
}
