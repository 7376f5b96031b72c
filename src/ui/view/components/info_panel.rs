//! View info panel component
//!
//! Renders connection and session information

use crate::charts::ChartSpec;
use crate::dashboard::TargetId;
use crate::environment::Environment;

use super::super::state::ViewState;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the info panel with connection details.
pub fn render_info_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let mut info_lines = Vec::new();

    // Environment with color coding
    let env_color = match state.environment {
        Environment::Local => Color::Green,
        Environment::Custom { api_base_url: _ } => Color::Yellow,
    };
    info_lines.push(Line::from(vec![Span::styled(
        format!("Okruženje: {}", state.environment),
        Style::default().fg(env_color),
    )]));

    let version = env!("CARGO_PKG_VERSION");
    info_lines.push(Line::from(vec![Span::styled(
        format!("Verzija: {}", version),
        Style::default().fg(Color::Cyan),
    )]));

    // Uptime with better formatting
    let uptime = state.start_time.elapsed();
    let uptime_string = if uptime.as_secs() >= 3600 {
        format!(
            "Vrijeme rada: {}h {}m {}s",
            uptime.as_secs() / 3600,
            (uptime.as_secs() % 3600) / 60,
            uptime.as_secs() % 60
        )
    } else {
        format!(
            "Vrijeme rada: {}m {}s",
            uptime.as_secs() / 60,
            uptime.as_secs() % 60
        )
    };
    info_lines.push(Line::from(vec![Span::styled(
        uptime_string,
        Style::default().fg(Color::LightGreen),
    )]));

    if let Some(mode) = state.config.mode {
        info_lines.push(Line::from(vec![Span::styled(
            format!("Prikaz: {}", mode),
            Style::default().fg(Color::LightYellow),
        )]));
    }

    // Record count, once the matrix chart is in
    if let Some(ChartSpec::Scatter(chart)) = state.chart(TargetId::MatrixChart) {
        info_lines.push(Line::from(vec![Span::styled(
            format!("Procjena: {}", chart.series.data.len()),
            Style::default().fg(Color::LightCyan),
        )]));
    }

    let info_block = Block::default()
        .title("SUSTAV")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}
