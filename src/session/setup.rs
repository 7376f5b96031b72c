//! Session setup and initialization

use crate::api::ApiClient;
use crate::config::{Config, get_config_path};
use crate::dashboard::{DashboardConfig, ViewMode};
use crate::domain::{default_dimension_keys, default_dimension_labels};
use crate::environment::Environment;
use std::error::Error;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Fully resolved view configuration.
    pub config: DashboardConfig,
    /// Environment the session talks to.
    pub environment: Environment,
    /// API client shared by the view loader and the insight worker.
    pub api: ApiClient,
}

/// Sets up a dashboard session.
///
/// This function handles the common setup required for both TUI and
/// headless modes:
/// 1. Resolves the environment (flag, `LEADERSHIP_API_URL`, saved config)
/// 2. Builds the validated `DashboardConfig` with the catalog defaults
/// 3. Creates the API client
///
/// # Arguments
/// * `mode` - The view the session should drive
/// * `selected_id` - Selection for the individual view
/// * `comparison_a` / `comparison_b` - Comparison slot identifiers
/// * `cli_url` - The `--api-url` flag, if given
/// * `dimension_keys` / `dimension_labels` - Optional overrides of the
///   dimension catalog; both default to the catalog in its order
pub fn setup_session(
    mode: ViewMode,
    selected_id: Option<String>,
    comparison_a: Option<String>,
    comparison_b: Option<String>,
    cli_url: Option<String>,
    dimension_keys: Option<Vec<String>>,
    dimension_labels: Option<Vec<String>>,
) -> Result<SessionData, Box<dyn Error>> {
    let saved_url = get_config_path()
        .ok()
        .filter(|path| path.exists())
        .and_then(|path| Config::load_from_file(&path).ok())
        .map(|config| config.api_url);

    let env_url = std::env::var("LEADERSHIP_API_URL").ok();
    let environment = Environment::resolve(
        cli_url.as_deref(),
        env_url.as_deref(),
        saved_url.as_deref(),
    );

    let config = DashboardConfig::new(
        Some(mode),
        dimension_keys.unwrap_or_else(default_dimension_keys),
        dimension_labels.unwrap_or_else(default_dimension_labels),
        selected_id,
        comparison_a,
        comparison_b,
    )?;

    let api = ApiClient::new(environment.clone());
    Ok(SessionData {
        config,
        environment,
        api,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Without overrides the session carries the full catalog.
    fn test_setup_uses_catalog_defaults() {
        let session = setup_session(
            ViewMode::Individual,
            Some("7f0c".to_string()),
            None,
            None,
            Some("https://procjene.example.hr".to_string()),
            None,
            None,
        )
        .unwrap();

        assert_eq!(session.config.mode, Some(ViewMode::Individual));
        assert_eq!(session.config.dimension_keys.len(), 9);
        assert_eq!(
            session.config.dimension_keys.len(),
            session.config.dimension_labels.len()
        );
        assert_eq!(
            session.environment.api_base_url(),
            "https://procjene.example.hr"
        );
    }

    #[test]
    // Overriding only one of the two lists breaks alignment and is rejected.
    fn test_setup_rejects_partial_override() {
        let result = setup_session(
            ViewMode::Matrix,
            None,
            None,
            None,
            Some("http://localhost:5000".to_string()),
            Some(vec!["A".to_string(), "B".to_string()]),
            None,
        );
        assert!(result.is_err());
    }
}
