//! View header component
//!
//! Renders the title and a status gauge for the active view

use super::super::state::ViewState;
use crate::dashboard::ViewMode;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render the header with title and view status.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("MATRICA VODSTVA v{}", version))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Gauge logic: a running insight request takes priority over the
    // static view status.
    let (status_text, gauge_color, progress_percent) = if state.insight_generating {
        // Animated gauge - loops every 20 ticks while the request runs
        let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
        (
            "GENERIRANJE - Uvid u pripremi".to_string(),
            Color::LightGreen,
            progress,
        )
    } else {
        let text = match state.config.mode {
            Some(ViewMode::Matrix) => "MATRICA - Pregled svih procjena".to_string(),
            Some(ViewMode::Individual) => match state.selected_name() {
                Some(name) => format!("PROFIL - {}", name),
                None => "PROFIL - Učitavanje".to_string(),
            },
            Some(ViewMode::Comparison) => "USPOREDBA - Profili usporedno".to_string(),
            None => "MIROVANJE".to_string(),
        };
        (text, Color::LightBlue, 100)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(status_text);

    f.render_widget(gauge, header_chunks[1]);
}
