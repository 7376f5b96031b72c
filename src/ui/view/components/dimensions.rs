//! Dimension list component
//!
//! Lists every radar spoke with its score, since the terminal radar has no
//! room for rim labels

use super::super::state::ViewState;
use super::super::utils::format_score;
use super::radar::spoke_summary;
use crate::charts::ChartSpec;
use crate::dashboard::TargetId;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the dimension scores behind the individual radar.
pub fn render_dimension_list(f: &mut Frame, area: Rect, state: &ViewState) {
    let lines: Vec<Line> = match state.chart(TargetId::IndividualChart) {
        Some(ChartSpec::Radar(chart)) => spoke_summary(chart)
            .into_iter()
            .map(|(label, value)| {
                let score_text = match value {
                    Some(value) => format_score(value),
                    None => "-".to_string(),
                };
                Line::from(vec![
                    Span::styled(
                        format!("{:>4}  ", score_text),
                        Style::default().fg(Color::LightCyan),
                    ),
                    Span::styled(label, Style::default().fg(Color::Gray)),
                ])
            })
            .collect(),
        _ => Vec::new(),
    };

    let block = Block::default()
        .title("DIMENZIJE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let widget = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
