//! Insight output component
//!
//! Renders generated insight text, or whatever message the flow left behind

use super::super::state::ViewState;
use crate::dashboard::TargetId;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the insight panel for the individual view.
pub fn render_insight_panel(f: &mut Frame, area: Rect, state: &ViewState) {
    let lines: Vec<Line> = match state.text(TargetId::InsightOutput) {
        Some(text) => text.lines().map(|line| Line::from(line.to_string())).collect(),
        None if state.can_generate_insight() => vec![Line::from(Span::styled(
            "Pritisnite [G] za generiranje uvida.",
            Style::default().fg(Color::DarkGray),
        ))],
        None => Vec::new(),
    };

    let block = Block::default()
        .title("UVID")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let widget = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}
