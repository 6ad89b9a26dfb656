//! Alert dialog modal

use crate::app::App;
use crate::config::colors;
use crate::dialog::DialogKind;
use crate::ui::layout::{choice_text, dialog_layout};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_dialog(f: &mut Frame, app: &App, kind: DialogKind) {
    let content = kind.content();
    let layout = dialog_layout(f.area(), &content);

    let block = Block::default()
        .title(Line::from(format!(" {} ", content.title)).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(kind.accent()))
        .style(Style::default().bg(colors::BG));

    f.render_widget(Clear, layout.area);
    f.render_widget(block, layout.area);

    let message = Paragraph::new(content.message)
        .style(Style::default().fg(colors::FG))
        .wrap(Wrap { trim: true });
    f.render_widget(message, layout.message);

    for (choice, rect) in &layout.choices {
        let label = content.label_for(*choice).unwrap_or_default();
        let style = if *choice == app.dialog_focus {
            Style::default()
                .fg(colors::BUTTON_FG)
                .bg(kind.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(kind.accent())
        };
        f.render_widget(Paragraph::new(choice_text(label)).style(style), *rect);
    }
}
