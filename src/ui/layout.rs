//! Screen geometry
//!
//! Pure functions of the terminal area. The renderer draws into these rects
//! and mouse handling hit-tests against the same ones, so a click always
//! lands on what is visible.

use super::helpers::centered_rect_fixed;
use crate::dialog::{DialogChoice, DialogContent, DialogKind};
use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

pub const BUTTON_WIDTH: u16 = 36;
pub const BUTTON_HEIGHT: u16 = 3;
pub const DIALOG_WIDTH: u16 = 60;
pub const DIALOG_HEIGHT: u16 = 9;

/// Horizontal gap between dialog choices
const CHOICE_GAP: u16 = 2;

/// Rects of the main screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub status: Rect,
    /// One per [`DialogKind`], in display order
    pub buttons: [Rect; 5],
    pub footer: Rect,
}

impl ScreenLayout {
    /// Button under a terminal cell, if any
    pub fn button_at(&self, column: u16, row: u16) -> Option<DialogKind> {
        let pos = Position::new(column, row);
        DialogKind::ALL
            .into_iter()
            .find(|kind| self.buttons[kind.index()].contains(pos))
    }
}

/// Rects of an open dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLayout {
    pub area: Rect,
    pub message: Rect,
    /// Choices with their button rects, confirm first (rightmost)
    pub choices: Vec<(DialogChoice, Rect)>,
}

impl DialogLayout {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    /// Dialog button under a terminal cell, if any
    pub fn choice_at(&self, column: u16, row: u16) -> Option<DialogChoice> {
        let pos = Position::new(column, row);
        self.choices
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(choice, _)| *choice)
    }
}

/// Text drawn for a dialog button
pub fn choice_text(label: &str) -> String {
    format!("[ {label} ]")
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Status + buttons
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = centered_rect_fixed(BUTTON_WIDTH, 2 + BUTTON_HEIGHT * 5, chunks[1]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status
            Constraint::Length(1), // Spacer
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .split(body);

    // Status may be wider than the buttons
    let status = Rect {
        x: chunks[1].x,
        y: rows[0].y,
        width: chunks[1].width,
        height: rows[0].height,
    };

    ScreenLayout {
        header: chunks[0],
        status,
        buttons: std::array::from_fn(|i| rows[i + 2]),
        footer: chunks[2],
    }
}

pub fn dialog_layout(screen: Rect, content: &DialogContent) -> DialogLayout {
    let area = centered_rect_fixed(DIALOG_WIDTH, DIALOG_HEIGHT, screen);
    let inner = area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
        ])
        .split(inner);

    let row = rows[2];
    let mut right = row.right();
    let mut choices = Vec::with_capacity(2);
    for &choice in content.choices() {
        let label = content.label_for(choice).unwrap_or_default();
        let width = choice_text(label).chars().count() as u16;
        let x = right.saturating_sub(width).max(row.x);
        choices.push((choice, Rect::new(x, row.y, right.saturating_sub(x), row.height)));
        right = x.saturating_sub(CHOICE_GAP);
    }

    DialogLayout {
        area,
        message: rows[0],
        choices,
    }
}
