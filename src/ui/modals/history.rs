//! Transition log modal (debug mode)

use crate::app::{App, Transition};
use crate::config::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::super::helpers::{centered_rect, format_elapsed};

fn describe(transition: &Transition) -> String {
    match transition {
        Transition::Opened(kind) => format!("{kind:?} abierto"),
        Transition::Confirmed { kind, status } => format!("{kind:?} confirmado → {status}"),
        Transition::Acknowledged(kind) => format!("{kind:?} aceptado"),
        Transition::Dismissed(kind) => format!("{kind:?} cerrado"),
        Transition::Ignored => String::from("-"),
    }
}

pub fn render_history(f: &mut Frame, app: &App) {
    let area = centered_rect(60, 50, f.area());

    let items: Vec<ListItem> = app
        .history
        .iter()
        .take(area.height.saturating_sub(2) as usize)
        .map(|entry| {
            let line = format!(
                "{} │ {}",
                format_elapsed(entry.elapsed),
                describe(&entry.transition)
            );
            ListItem::new(line).style(Style::default().fg(colors::FG))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Transiciones ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER))
            .border_type(ratatui::widgets::BorderType::Rounded)
            .style(Style::default().bg(colors::BG)),
    );

    f.render_widget(ratatui::widgets::Clear, area);
    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::DialogKind;

    #[test]
    fn test_describe() {
        assert_eq!(
            describe(&Transition::Confirmed {
                kind: DialogKind::Deletion,
                status: "Elemento Eliminado"
            }),
            "Deletion confirmado → Elemento Eliminado"
        );
        assert_eq!(
            describe(&Transition::Dismissed(DialogKind::Information)),
            "Information cerrado"
        );
    }
}
