//! Application state and logic
//!
//! This module contains the main `App` struct. The dialog state machine
//! lives in [`screen`]; keyboard and mouse translation into [`Action`]s are
//! in sub-modules.
//!
//! - [`App::new()`] - Constructor
//! - [`App::handle_event()`] - Event processing
//! - [`App::dispatch()`] - Apply an action
//! - [`App::rendered()`] - Mark frame as rendered

mod keyboard;
mod mouse;
pub mod screen;

pub use screen::{Phase, ScreenState, Transition};

use crate::action::Action;
use crate::config::{AppConfig, MAX_HISTORY};
use crate::dialog::{DialogChoice, DialogKind};
use crate::event::Event;
use ratatui::layout::Rect;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// A transition recorded for the debug log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Time since the app started
    pub elapsed: Duration,
    pub transition: Transition,
}

/// Application state and logic
pub struct App {
    /// Status message and open dialog
    pub screen: ScreenState,
    /// Index of the focused main-screen button
    pub focus: usize,
    /// Focused button inside the open dialog
    pub dialog_focus: DialogChoice,
    pub show_help: bool,
    pub debug_mode: bool,
    /// Show key hints in the footer
    pub show_hints: bool,
    pub should_quit: bool,
    /// Dirty flag: true if UI needs re-render (render-on-change optimization)
    pub needs_render: bool,
    /// Last known terminal area, used for mouse hit-testing
    pub area: Rect,
    /// Most recent transitions, newest first
    pub history: VecDeque<HistoryEntry>,
    started: Instant,
}

impl App {
    pub fn new(debug_mode: bool, config: &AppConfig, area: Rect) -> Self {
        Self {
            screen: ScreenState::new(),
            focus: 0,
            dialog_focus: DialogChoice::Confirm,
            show_help: false,
            debug_mode,
            show_hints: config.ui.hints,
            should_quit: false,
            needs_render: true, // Always render first frame
            area,
            history: VecDeque::with_capacity(MAX_HISTORY),
            started: Instant::now(),
        }
    }

    /// Handle incoming events
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                let action = self.action_for_key(key);
                self.dispatch(action);
            }
            Event::Mouse(mouse) => {
                let action = self.action_for_mouse(mouse);
                self.dispatch(action);
            }
            Event::Resize(cols, rows) => {
                self.area = Rect::new(0, 0, cols, rows);
                self.needs_render = true;
            }
        }
    }

    /// Apply an action to the application state
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Press(kind) => {
                let transition = self.screen.press(kind);
                if transition.changed() {
                    self.focus = kind.index();
                    self.dialog_focus = DialogChoice::Confirm;
                }
                self.record(transition);
            }
            Action::Confirm => {
                let transition = self.screen.confirm();
                self.record(transition);
            }
            Action::Cancel => {
                let transition = self.screen.cancel();
                self.record(transition);
            }
            Action::FocusNext => self.move_focus(true),
            Action::FocusPrevious => self.move_focus(false),
            Action::Activate => match self.screen.phase() {
                Phase::Idle => self.dispatch(Action::Press(DialogKind::ALL[self.focus])),
                Phase::DialogOpen(_) => match self.dialog_focus {
                    DialogChoice::Confirm => self.dispatch(Action::Confirm),
                    DialogChoice::Cancel => self.dispatch(Action::Cancel),
                },
            },
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                tracing::debug!(show_help = self.show_help, "Toggled help");
            }
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            Action::None => {}
        }
        self.needs_render = self.needs_render || action.should_render();
    }

    fn move_focus(&mut self, forward: bool) {
        match self.screen.open_dialog {
            None => {
                let len = DialogKind::ALL.len();
                self.focus = if forward {
                    (self.focus + 1) % len
                } else {
                    (self.focus + len - 1) % len
                };
            }
            Some(kind) => {
                let choices = kind.content().choices();
                let current = choices
                    .iter()
                    .position(|c| *c == self.dialog_focus)
                    .unwrap_or(0);
                let len = choices.len();
                let next = if forward {
                    (current + 1) % len
                } else {
                    (current + len - 1) % len
                };
                self.dialog_focus = choices[next];
            }
        }
    }

    fn record(&mut self, transition: Transition) {
        if !transition.changed() {
            tracing::trace!("Ignored action in phase {:?}", self.screen.phase());
            return;
        }

        match &transition {
            Transition::Opened(kind) => tracing::info!(?kind, "Dialog opened"),
            Transition::Confirmed { kind, status } => {
                tracing::info!(?kind, status = %status, "Dialog confirmed");
            }
            Transition::Acknowledged(kind) => tracing::info!(?kind, "Dialog acknowledged"),
            Transition::Dismissed(kind) => tracing::info!(?kind, "Dialog dismissed"),
            Transition::Ignored => {}
        }

        if self.history.len() >= MAX_HISTORY {
            self.history.pop_back();
        }
        self.history.push_front(HistoryEntry {
            elapsed: self.started.elapsed(),
            transition,
        });
    }

    /// Called after render to reset dirty flag
    pub fn rendered(&mut self) {
        self.needs_render = false;
    }
}
