//! View main renderer

use super::components::{
    dimensions, footer, header, info_panel, insight, logs, matrix, radar, summary,
};
use super::state::ViewState;
use crate::dashboard::{TargetId, ViewMode};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_view(f: &mut Frame, state: &ViewState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(35),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    match state.config.mode {
        Some(ViewMode::Matrix) => {
            let content = split_horizontal(main_chunks[1], 30);
            info_panel::render_info_panel(f, content[0], state);
            matrix::render_matrix_chart(f, content[1], state);

            let bottom = split_horizontal(main_chunks[2], 35);
            summary::render_category_summary(f, bottom[0], state);
            logs::render_logs_panel(f, bottom[1], state);
        }
        Some(ViewMode::Individual) => {
            let content = split_horizontal(main_chunks[1], 30);
            dimensions::render_dimension_list(f, content[0], state);
            radar::render_radar_chart(
                f,
                content[1],
                "PROFIL",
                state.chart(TargetId::IndividualChart),
            );

            let bottom = split_horizontal(main_chunks[2], 60);
            insight::render_insight_panel(f, bottom[0], state);
            logs::render_logs_panel(f, bottom[1], state);
        }
        Some(ViewMode::Comparison) => {
            let content = split_horizontal(main_chunks[1], 50);
            radar::render_radar_chart(
                f,
                content[0],
                "PROFIL A",
                state.chart(TargetId::ComparisonChartA),
            );
            radar::render_radar_chart(
                f,
                content[1],
                "PROFIL B",
                state.chart(TargetId::ComparisonChartB),
            );

            let bottom = split_horizontal(main_chunks[2], 30);
            info_panel::render_info_panel(f, bottom[0], state);
            logs::render_logs_panel(f, bottom[1], state);
        }
        None => {
            info_panel::render_info_panel(f, main_chunks[1], state);
            logs::render_logs_panel(f, main_chunks[2], state);
        }
    }

    footer::render_footer(f, main_chunks[3], state);
}

fn split_horizontal(area: Rect, left_percent: u16) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent),
        ])
        .split(area)
}
