//! Category summary component
//!
//! Renders the category distribution behind the matrix scatter

use super::super::state::ViewState;
use crate::charts::ChartSpec;
use crate::dashboard::TargetId;
use crate::domain::{category_color, summarize_by_category};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render category counts and shares for the plotted assessments.
pub fn render_category_summary(f: &mut Frame, area: Rect, state: &ViewState) {
    let lines: Vec<Line> = match state.chart(TargetId::MatrixChart) {
        Some(ChartSpec::Scatter(chart)) => {
            let categories = chart.series.data.iter().map(|point| point.category.clone());
            let mut lines: Vec<Line> = summarize_by_category(categories)
                .into_iter()
                .map(|share| {
                    Line::from(vec![
                        Span::styled(
                            format!("{:>3}  ", share.count),
                            Style::default().fg(Color::LightCyan),
                        ),
                        Span::styled(
                            format!("{} ", share.category),
                            Style::default().fg(category_color(&share.category)),
                        ),
                        Span::styled(
                            format!("({}%)", share.percentage),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ])
                })
                .collect();

            // The terminal scatter has no hover, so the per-point labels go
            // below the distribution instead.
            if !chart.series.data.is_empty() {
                lines.push(Line::from(""));
            }
            for point in &chart.series.data {
                lines.push(Line::from(Span::styled(
                    point.label.clone(),
                    Style::default().fg(category_color(&point.category)),
                )));
            }
            lines
        }
        _ => Vec::new(),
    };

    let block = Block::default()
        .title("KATEGORIJE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let widget = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}
