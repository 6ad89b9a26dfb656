//! Help modal

use crate::config::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::super::helpers::centered_rect;

pub fn render_help(f: &mut Frame) {
    let area = centered_rect(55, 75, f.area());

    let help_text = r"
  Pantalla
  1-5          Abrir el diálogo del botón
  j/k, ↑/↓     Mover entre botones
  Enter, Space Pulsar el botón marcado

  Diálogo
  y, s         Confirmar
  n            Cancelar
  h/l, ←/→     Elegir botón
  Enter        Pulsar el botón marcado
  Esc          Cerrar sin confirmar

  Ratón
  Clic         Pulsar botón
  Clic fuera   Cerrar el diálogo

  ?            Esta ayuda
  q, Esc       Salir
  Ctrl+C       Salir siempre
";

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(colors::FG))
        .block(
            Block::default()
                .title(" Ayuda ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::HIGHLIGHT))
                .border_type(ratatui::widgets::BorderType::Double)
                .title_bottom(Line::from(" ?:cerrar ").centered())
                .style(Style::default().bg(colors::BG)),
        );

    f.render_widget(ratatui::widgets::Clear, area);
    f.render_widget(help, area);
}
