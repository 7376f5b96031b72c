mod api;
mod assessment;
mod charts;
pub mod cli_messages;
mod config;
mod consts;
mod dashboard;
mod domain;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod session;
mod ui;
mod workers;

use crate::config::{Config, get_config_path};
use crate::dashboard::ViewMode;
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

/// Flags shared by every view command.
#[derive(clap::Args)]
struct ViewArgs {
    /// Base URL of the assessment API. Overrides LEADERSHIP_API_URL and the
    /// saved configuration.
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Print the charts as JSON instead of opening the terminal UI.
    #[arg(long)]
    headless: bool,

    /// Comma-separated dimension keys, replacing the built-in catalog.
    #[arg(long, value_delimiter = ',', value_name = "KEYS")]
    dimension_keys: Option<Vec<String>>,

    /// Comma-separated axis labels, aligned with the keys.
    #[arg(long, value_delimiter = ',', value_name = "LABELS")]
    dimension_labels: Option<Vec<String>>,

    /// Disable the background color in the terminal UI.
    #[arg(long)]
    no_background_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show the adequacy/potential matrix of all assessments
    Matrix {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Show the dimension profile of one assessment
    Individual {
        /// Identifier of the assessment to show
        #[arg(long, value_name = "ASSESSMENT_ID")]
        id: Option<String>,

        #[command(flatten)]
        view: ViewArgs,
    },
    /// Compare the profiles of two assessments side by side
    Comparison {
        /// Identifier for the left slot
        #[arg(long, value_name = "ASSESSMENT_ID")]
        a: Option<String>,

        /// Identifier for the right slot
        #[arg(long, value_name = "ASSESSMENT_ID")]
        b: Option<String>,

        #[command(flatten)]
        view: ViewArgs,
    },
    /// Save the API base URL to the configuration file
    SetApiUrl {
        /// Base URL of the assessment API, e.g. http://localhost:5000
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Remove the saved configuration
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Matrix { view } => start(ViewMode::Matrix, None, None, None, view).await,
        Command::Individual { id, view } => {
            start(ViewMode::Individual, id, None, None, view).await
        }
        Command::Comparison { a, b, view } => start(ViewMode::Comparison, None, a, b, view).await,
        Command::SetApiUrl { url } => {
            // Reject values the resolver would silently drop later.
            let environment = url
                .parse::<Environment>()
                .map_err(|_| format!("Invalid API URL: {}", url))?;
            let config_path = get_config_path()?;
            Config::new(environment.api_base_url()).save(&config_path)?;
            crate::print_cmd_success!(
                "API URL saved",
                "{} -> {}",
                environment.api_base_url(),
                config_path.display()
            );
            Ok(())
        }
        Command::Reset => {
            let config_path = get_config_path()?;
            Config::clear(&config_path)?;
            crate::print_cmd_success!("Configuration cleared", "{}", config_path.display());
            Ok(())
        }
    }
}

/// Starts one dashboard session in the requested mode.
///
/// An invalid configuration (misaligned dimension lists) is reported and
/// the run ends without rendering anything; it is not a process failure.
async fn start(
    mode: ViewMode,
    selected_id: Option<String>,
    comparison_a: Option<String>,
    comparison_b: Option<String>,
    view: ViewArgs,
) -> Result<(), Box<dyn Error>> {
    let session = match setup_session(
        mode,
        selected_id,
        comparison_a,
        comparison_b,
        view.api_url,
        view.dimension_keys,
        view.dimension_labels,
    ) {
        Ok(session) => session,
        Err(error) => {
            crate::print_cmd_warn!("Invalid configuration", "{}", error);
            return Ok(());
        }
    };

    if view.headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session, !view.no_background_color).await
    }
}
