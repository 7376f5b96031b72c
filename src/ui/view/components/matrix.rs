//! Matrix scatter component
//!
//! Draws the adequacy/potential overview as a scatter chart

use super::super::state::ViewState;
use super::super::utils::format_score;
use crate::charts::ChartSpec;
use crate::dashboard::TargetId;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph};

fn axis_labels(min: f64, max: f64) -> Vec<Span<'static>> {
    vec![
        Span::from(format_score(min)),
        Span::from(format_score((min + max) / 2.0)),
        Span::from(format_score(max)),
    ]
}

fn chart_block() -> Block<'static> {
    Block::default()
        .title("MATRICA PROCJENA")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Render the matrix scatter, or an empty frame while nothing is bound.
pub fn render_matrix_chart(f: &mut Frame, area: Rect, state: &ViewState) {
    let Some(ChartSpec::Scatter(chart)) = state.chart(TargetId::MatrixChart) else {
        f.render_widget(Paragraph::new("").block(chart_block()), area);
        return;
    };

    let points: Vec<(f64, f64)> = chart.series.data.iter().map(|p| (p.x, p.y)).collect();
    let (x_min, x_max) = chart.x_scale.bounds_for(points.iter().map(|p| p.0));
    let (y_min, y_max) = chart.y_scale.bounds_for(points.iter().map(|p| p.1));

    let datasets = vec![
        Dataset::default()
            .name(chart.series.label.clone())
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(chart.series.background_color.terminal_color()))
            .data(&points),
    ];

    let x_title = chart.x_scale.title.clone().unwrap_or_default();
    let y_title = chart.y_scale.title.clone().unwrap_or_default();

    let widget = Chart::new(datasets)
        .block(chart_block())
        .x_axis(
            Axis::default()
                .title(Span::styled(x_title, Style::default().fg(Color::DarkGray)))
                .style(Style::default().fg(Color::DarkGray))
                .bounds([x_min, x_max])
                .labels(axis_labels(x_min, x_max)),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(y_title, Style::default().fg(Color::DarkGray)))
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y_min, y_max])
                .labels(axis_labels(y_min, y_max)),
        );

    f.render_widget(widget, area);
}
