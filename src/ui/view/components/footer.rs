//! View footer component
//!
//! Renders the key bindings available in the current view

use super::super::state::ViewState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the footer with the active key hints.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let footer_text = if state.can_generate_insight() {
        "[Q] Izlaz | [R] Osvježi | [G] Generiraj uvid"
    } else {
        "[Q] Izlaz | [R] Osvježi"
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
