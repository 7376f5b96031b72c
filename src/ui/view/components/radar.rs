//! Radar profile component
//!
//! Draws a dimension profile as a polygon over a polygonal grid. The
//! geometry lives in unit space: every axis is a spoke from the center,
//! starting at twelve o'clock and going clockwise, and a score maps to a
//! fraction of the rim radius.

use crate::charts::{ChartSpec, RadarChart};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph};
use std::f64::consts::{FRAC_PI_2, TAU};

const CHART_BOUND: f64 = 1.25;

struct SeriesGeometry {
    segments: Vec<Vec<(f64, f64)>>,
    vertices: Vec<(f64, f64)>,
    line_color: Color,
    point_color: Color,
    name: String,
}

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Render one radar profile, or an empty frame while nothing is bound.
pub fn render_radar_chart(f: &mut Frame, area: Rect, title: &str, chart: Option<&ChartSpec>) {
    let Some(ChartSpec::Radar(chart)) = chart else {
        f.render_widget(Paragraph::new("").block(chart_block(title)), area);
        return;
    };
    let axes = chart.data.labels.len();
    if axes == 0 {
        f.render_widget(Paragraph::new("").block(chart_block(title)), area);
        return;
    }

    let (min, max) = chart.scale.bounds_for(chart.values());
    let span = (max - min).max(f64::EPSILON);
    let angle_step = TAU / axes as f64;
    let angle_of = |i: usize| -FRAC_PI_2 + i as f64 * angle_step;
    let vertex_at = |i: usize, value: f64| {
        let radius = ((value - min) / span).clamp(0.0, 1.0);
        (radius * angle_of(i).cos(), radius * angle_of(i).sin())
    };

    // Grid rings, one per tick step from the center to the rim
    let step = if chart.scale.tick_step > 0.0 {
        chart.scale.tick_step
    } else {
        span
    };
    let mut rings: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut level = min + step;
    while level <= max + 1e-9 {
        let radius = (level - min) / span;
        rings.push(
            (0..=axes)
                .map(|i| {
                    let angle = angle_of(i % axes);
                    (radius * angle.cos(), radius * angle.sin())
                })
                .collect(),
        );
        level += step;
    }

    // Spokes from the center to each rim vertex
    let spokes: Vec<Vec<(f64, f64)>> = (0..axes)
        .map(|i| vec![(0.0, 0.0), (angle_of(i).cos(), angle_of(i).sin())])
        .collect();

    let geometries: Vec<SeriesGeometry> = chart
        .data
        .datasets
        .iter()
        .map(|series| {
            let mut segments: Vec<Vec<(f64, f64)>> = Vec::new();
            let mut current: Vec<(f64, f64)> = Vec::new();
            let mut vertices: Vec<(f64, f64)> = Vec::new();
            let mut gaps = false;

            for i in 0..axes {
                match series.data.get(i).copied().flatten() {
                    Some(value) => {
                        let point = vertex_at(i, value);
                        current.push(point);
                        vertices.push(point);
                    }
                    None => {
                        // A missing score breaks the outline at this spoke
                        gaps = true;
                        if current.len() > 1 {
                            segments.push(std::mem::take(&mut current));
                        } else {
                            current.clear();
                        }
                    }
                }
            }
            if !gaps && current.len() == axes && axes > 1 {
                // Close the polygon when every spoke has a score
                let first = current[0];
                current.push(first);
            }
            if current.len() > 1 {
                segments.push(current);
            }

            SeriesGeometry {
                segments,
                vertices,
                line_color: series.border_color.terminal_color(),
                point_color: series.point_background_color.terminal_color(),
                name: series.label.clone(),
            }
        })
        .collect();

    let mut datasets: Vec<Dataset> = Vec::new();
    for ring in &rings {
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(ring),
        );
    }
    for spoke in &spokes {
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(spoke),
        );
    }
    for geometry in &geometries {
        for segment in &geometry.segments {
            datasets.push(
                Dataset::default()
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(geometry.line_color))
                    .data(segment),
            );
        }
        // A named dataset puts the series into the chart legend; leave it
        // unnamed when the legend is off.
        let mut vertices = Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(geometry.point_color))
            .data(&geometry.vertices);
        if chart.legend {
            vertices = vertices.name(geometry.name.clone());
        }
        datasets.push(vertices);
    }

    let widget = Chart::new(datasets)
        .block(chart_block(title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([-CHART_BOUND, CHART_BOUND]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([-CHART_BOUND, CHART_BOUND]),
        );

    f.render_widget(widget, area);
}

/// Lines describing the score on every spoke, for the side panel.
pub fn spoke_summary(chart: &RadarChart) -> Vec<(String, Option<f64>)> {
    let series = chart.data.datasets.first();
    chart
        .data
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let value = series.and_then(|s| s.data.get(i).copied().flatten());
            (label.clone(), value)
        })
        .collect()
}
