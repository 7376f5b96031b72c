//! Headless mode execution
//!
//! Drives the same dispatch as the TUI against a printing surface, so the
//! charts come out as JSON on stdout instead of a terminal drawing.

use super::SessionData;
use crate::charts::ChartSpec;
use crate::dashboard::{ChartSurface, TargetId, run_dashboard};
use crate::ui::view::targets_for_mode;
use crate::{print_cmd_info, print_cmd_warn};
use std::error::Error;

/// Surface that prints every binding as it happens.
///
/// Charts come out as their JSON description, the same value-for-value
/// content the TUI draws.
struct TextSurface {
    targets: Vec<TargetId>,
    bound: usize,
}

impl TextSurface {
    fn new(targets: Vec<TargetId>) -> Self {
        Self { targets, bound: 0 }
    }
}

impl ChartSurface for TextSurface {
    fn has_target(&self, target: TargetId) -> bool {
        self.targets.contains(&target)
    }

    fn bind_chart(&mut self, target: TargetId, chart: ChartSpec) {
        self.bound += 1;
        print_cmd_info!(&target.to_string(), "");
        match serde_json::to_string_pretty(&chart) {
            Ok(json) => println!("{}", json),
            Err(e) => print_cmd_warn!("Chart serialization failed", "{}", e),
        }
    }

    fn set_text(&mut self, target: TargetId, text: &str) {
        print_cmd_info!(&target.to_string(), "{}", text);
    }
}

/// Runs the application in headless mode
///
/// Performs one dashboard pass against the printing surface and exits.
/// A view that produces nothing (silent abort, missing selection) prints a
/// single status line; the exit code stays zero either way.
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_cmd_info!(
        "Session",
        "Environment: {}",
        session.environment.api_base_url()
    );

    let targets = targets_for_mode(session.config.mode).to_vec();
    let mut surface = TextSurface::new(targets);
    run_dashboard(&session.config, &session.api, &mut surface).await;

    if surface.bound == 0 {
        print_cmd_info!("Session", "Nema podataka za prikaz");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::build_matrix_chart;

    #[test]
    // The printing surface honors its target set like any other surface.
    fn test_text_surface_respects_targets() {
        let mut surface = TextSurface::new(vec![TargetId::MatrixChart]);
        assert!(surface.has_target(TargetId::MatrixChart));
        assert!(!surface.has_target(TargetId::IndividualChart));

        surface.bind_chart(
            TargetId::MatrixChart,
            ChartSpec::Scatter(build_matrix_chart(&[])),
        );
        assert_eq!(surface.bound, 1);
    }
}
