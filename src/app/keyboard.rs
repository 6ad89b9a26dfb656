//! Keyboard input handling for all modes

use super::{App, Phase};
use crate::action::Action;
use crate::dialog::DialogKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    /// Translate a key press into an action for the current mode
    pub fn action_for_key(&self, key: KeyEvent) -> Action {
        // Handle Ctrl+C always
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        // Help overlay swallows everything but its close keys
        if self.show_help {
            return match key.code {
                KeyCode::Char('?' | 'q') | KeyCode::Esc => Action::ToggleHelp,
                _ => Action::None,
            };
        }

        match self.screen.phase() {
            Phase::Idle => Self::key_idle(key),
            Phase::DialogOpen(kind) => Self::key_dialog(kind, key),
        }
    }

    /// Keys on the main screen
    fn key_idle(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c @ '1'..='5') => {
                DialogKind::from_shortcut(c).map_or(Action::None, Action::Press)
            }
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => Action::FocusNext,
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => Action::FocusPrevious,
            KeyCode::Enter | KeyCode::Char(' ') => Action::Activate,
            KeyCode::Char('?') => Action::ToggleHelp,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    /// Keys while a dialog is open
    fn key_dialog(kind: DialogKind, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('y' | 's') => Action::Confirm,
            // Only dialogs with a cancel button answer to 'n'
            KeyCode::Char('n') if kind.content().cancel_label.is_some() => Action::Cancel,
            KeyCode::Esc => Action::Cancel,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Action::FocusNext,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Action::FocusPrevious,
            KeyCode::Enter | KeyCode::Char(' ') => Action::Activate,
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screen::DEFAULT_STATUS;
    use crate::config::AppConfig;
    use crate::event::Event;
    use ratatui::layout::Rect;

    fn app() -> App {
        App::new(false, &AppConfig::default(), Rect::new(0, 0, 80, 30))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn test_digits_open_dialogs() {
        for kind in DialogKind::ALL {
            let mut app = app();
            press(&mut app, KeyCode::Char(kind.shortcut()));
            assert_eq!(app.screen.phase(), Phase::DialogOpen(kind));
        }
    }

    #[test]
    fn test_deletion_confirmed_with_y() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.screen.status_message, DEFAULT_STATUS);
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.screen.phase(), Phase::Idle);
        assert_eq!(app.screen.status_message, "Elemento Eliminado");
    }

    #[test]
    fn test_escape_dismisses_then_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen.phase(), Phase::Idle);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_n_ignored_on_information() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(
            app.screen.phase(),
            Phase::DialogOpen(DialogKind::Information)
        );
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen.phase(), Phase::Idle);
        assert_eq!(app.screen.status_message, DEFAULT_STATUS);
    }

    #[test]
    fn test_digits_ignored_while_dialog_open() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(
            app.screen.phase(),
            Phase::DialogOpen(DialogKind::Authentication)
        );
    }

    #[test]
    fn test_authenticate_then_cancel_retry() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen.status_message, "Usuario Autenticado");

        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen.phase(), Phase::Idle);
        assert_eq!(app.screen.status_message, "Usuario Autenticado");
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.screen.phase(), Phase::Idle);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_dialog() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit);
    }

    #[test]
    fn test_enter_presses_focused_button() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen.phase(), Phase::DialogOpen(DialogKind::Deletion));
    }
}
