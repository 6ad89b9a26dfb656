//! UI rendering module for botones-alerta
//!
//! One screen: a header, the status line, five stacked buttons and a footer
//! with key hints. The open dialog, the help overlay and the debug
//! transition log are drawn on top.

mod helpers;
pub mod layout;
mod modals;

use crate::app::{App, Phase};
use crate::config::colors;
use crate::dialog::DialogKind;
use layout::screen_layout;
use modals::{render_dialog, render_help, render_history};
use ratatui::{
    layout::{Alignment, Rect},
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Main render function
pub fn render(f: &mut Frame, app: &App) {
    let layout = screen_layout(f.area());

    render_header(f, layout.header);
    render_status(f, layout.status, app);
    for kind in DialogKind::ALL {
        render_button(f, layout.buttons[kind.index()], app, kind);
    }
    render_footer(f, layout.footer, app);

    // Render transition log if in debug mode
    if app.debug_mode && !app.history.is_empty() {
        render_history(f, app);
    }

    if let Phase::DialogOpen(kind) = app.screen.phase() {
        render_dialog(f, app, kind);
    }

    // Render help popup if active
    if app.show_help {
        render_help(f);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("Botones de Alerta")
        .style(Style::default().fg(colors::FG).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER))
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(app.screen.status_message.as_str())
        .style(
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(status, area);
}

fn render_button(f: &mut Frame, area: Rect, app: &App, kind: DialogKind) {
    // Focus is only shown while the buttons are reachable
    let focused = app.focus == kind.index() && app.screen.open_dialog.is_none();

    let (border_type, border_color) = if focused {
        (BorderType::Thick, colors::HIGHLIGHT)
    } else {
        (BorderType::Rounded, kind.accent())
    };

    let button = Paragraph::new(kind.label())
        .style(
            Style::default()
                .fg(colors::BUTTON_FG)
                .bg(kind.accent())
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(border_color)),
        );
    f.render_widget(button, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    if !app.show_hints {
        return;
    }

    let hints: &[(&str, &str)] = match app.screen.phase() {
        _ if app.show_help => &[("?/Esc", "cerrar ayuda")],
        Phase::Idle => &[
            ("1-5", "abrir"),
            ("j/k", "mover"),
            ("Enter", "pulsar"),
            ("?", "ayuda"),
            ("q", "salir"),
        ],
        Phase::DialogOpen(kind) if kind.content().cancel_label.is_none() => {
            &[("Enter/y", "aceptar"), ("Esc", "cerrar")]
        }
        Phase::DialogOpen(_) => &[
            ("y", "confirmar"),
            ("n", "cancelar"),
            ("←/→", "elegir"),
            ("Esc", "cerrar"),
        ],
    };

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, desc) in hints {
        spans.push(Span::styled(
            format!(" {key}"),
            Style::default().fg(colors::HIGHLIGHT),
        ));
        spans.push(Span::styled(
            format!(" {desc} "),
            Style::default().fg(colors::MUTED),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::config::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(app.area.width, app.area.height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        App::new(false, &AppConfig::default(), Rect::new(0, 0, 80, 30))
    }

    #[test]
    fn test_idle_screen_shows_status_and_buttons() {
        let screen = draw(&app());
        assert!(screen.contains("Presiona un botón para una acción"));
        for kind in DialogKind::ALL {
            assert!(screen.contains(kind.label()), "missing {}", kind.label());
        }
        assert!(screen.contains("salir"));
    }

    #[test]
    fn test_open_dialog_is_drawn() {
        let mut app = app();
        app.dispatch(Action::Press(DialogKind::Deletion));
        let screen = draw(&app);
        assert!(screen.contains("Eliminar Elemento"));
        assert!(screen.contains("[ Eliminar ]"));
        assert!(screen.contains("[ Cancelar ]"));
    }

    #[test]
    fn test_information_dialog_has_no_cancel() {
        let mut app = app();
        app.dispatch(Action::Press(DialogKind::Information));
        let screen = draw(&app);
        assert!(screen.contains("Aviso Importante"));
        assert!(screen.contains("[ Entendido ]"));
        assert!(!screen.contains("[ Cancelar ]"));
    }

    #[test]
    fn test_status_after_confirm_is_drawn() {
        let mut app = app();
        app.dispatch(Action::Press(DialogKind::Authentication));
        app.dispatch(Action::Confirm);
        let screen = draw(&app);
        assert!(screen.contains("Usuario Autenticado"));
        assert!(!screen.contains("Requiere Autenticación"));
    }

    #[test]
    fn test_hints_hidden_by_config() {
        let mut config = AppConfig::default();
        config.ui.hints = false;
        let app = App::new(false, &config, Rect::new(0, 0, 80, 30));
        assert!(!draw(&app).contains("salir"));
    }

    #[test]
    fn test_help_and_debug_log() {
        let mut app = App::new(true, &AppConfig::default(), Rect::new(0, 0, 100, 40));
        app.dispatch(Action::Press(DialogKind::Confirmation));
        app.dispatch(Action::Cancel);
        let screen = draw(&app);
        assert!(screen.contains("Transiciones"));

        app.dispatch(Action::ToggleHelp);
        assert!(draw(&app).contains("Ayuda"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let mut app = App::new(false, &AppConfig::default(), Rect::new(0, 0, 20, 6));
        let _ = draw(&app);
        app.dispatch(Action::Press(DialogKind::CriticalError));
        let _ = draw(&app);
    }
}
