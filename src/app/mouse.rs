//! Mouse input handling
//!
//! Clicks are hit-tested against the same layout the renderer draws, for
//! the last known terminal area.

use super::{App, Phase};
use crate::action::Action;
use crate::dialog::DialogChoice;
use crate::ui::layout::{dialog_layout, screen_layout};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

impl App {
    /// Translate a mouse event into an action
    pub fn action_for_mouse(&self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        let (col, row) = (mouse.column, mouse.row);

        if self.show_help {
            return Action::ToggleHelp;
        }

        match self.screen.phase() {
            Phase::Idle => screen_layout(self.area)
                .button_at(col, row)
                .map_or(Action::None, Action::Press),
            Phase::DialogOpen(kind) => {
                let layout = dialog_layout(self.area, &kind.content());
                match layout.choice_at(col, row) {
                    Some(DialogChoice::Confirm) => Action::Confirm,
                    Some(DialogChoice::Cancel) => Action::Cancel,
                    None if layout.contains(col, row) => Action::None,
                    // Click outside the dialog dismisses it
                    None => Action::Cancel,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screen::DEFAULT_STATUS;
    use crate::config::AppConfig;
    use crate::dialog::DialogKind;
    use crate::event::Event;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 30,
    };

    fn app() -> App {
        App::new(false, &AppConfig::default(), AREA)
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    fn choice_rect(kind: DialogKind, choice: DialogChoice) -> Rect {
        dialog_layout(AREA, &kind.content())
            .choices
            .into_iter()
            .find(|(c, _)| *c == choice)
            .map(|(_, rect)| rect)
            .unwrap()
    }

    #[test]
    fn test_click_button_opens_dialog() {
        let mut app = app();
        let rect = screen_layout(AREA).buttons[DialogKind::Deletion.index()];
        click(&mut app, rect.x + 2, rect.y + 1);
        assert_eq!(app.screen.phase(), Phase::DialogOpen(DialogKind::Deletion));
        assert_eq!(app.focus, DialogKind::Deletion.index());
    }

    #[test]
    fn test_click_confirm_choice() {
        let mut app = app();
        app.dispatch(Action::Press(DialogKind::CriticalError));
        let rect = choice_rect(DialogKind::CriticalError, DialogChoice::Confirm);
        click(&mut app, rect.x, rect.y);
        assert_eq!(app.screen.phase(), Phase::Idle);
        assert_eq!(app.screen.status_message, "Intento de Reintento");
    }

    #[test]
    fn test_click_cancel_choice() {
        let mut app = app();
        app.dispatch(Action::Press(DialogKind::Confirmation));
        let rect = choice_rect(DialogKind::Confirmation, DialogChoice::Cancel);
        click(&mut app, rect.x + 1, rect.y);
        assert_eq!(app.screen.phase(), Phase::Idle);
        assert_eq!(app.screen.status_message, DEFAULT_STATUS);
    }

    #[test]
    fn test_click_outside_dismisses() {
        let mut app = app();
        app.dispatch(Action::Press(DialogKind::Authentication));
        click(&mut app, 0, 0);
        assert_eq!(app.screen.phase(), Phase::Idle);
        assert_eq!(app.screen.status_message, DEFAULT_STATUS);
    }

    #[test]
    fn test_click_inside_dialog_body_keeps_it_open() {
        let mut app = app();
        app.dispatch(Action::Press(DialogKind::Information));
        let layout = dialog_layout(AREA, &DialogKind::Information.content());
        click(&mut app, layout.message.x, layout.message.y);
        assert_eq!(
            app.screen.phase(),
            Phase::DialogOpen(DialogKind::Information)
        );
    }

    #[test]
    fn test_non_left_clicks_ignored() {
        let app = app();
        let rect = screen_layout(AREA).buttons[0];
        let action = app.action_for_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: rect.x + 1,
            row: rect.y + 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(action, Action::None);
    }
}
