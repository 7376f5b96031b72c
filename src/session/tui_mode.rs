//! TUI mode execution

use super::SessionData;
use crate::consts::ui_consts::EVENT_QUEUE_SIZE;
use crate::ui;
use crate::ui::view::targets_for_mode;
use crate::workers::start_view_loader;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};
use tokio::sync::mpsc;

/// Runs the application in TUI mode
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. The initial view load in the background
/// 3. UI application initialization and execution
///
/// # Arguments
/// * `session` - Session data from setup
/// * `with_background` - Whether to enable background colors
pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    let (update_sender, update_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);

    // Kick off the first load right away; results arriving during the
    // splash screen are buffered and applied when the view appears.
    let targets = targets_for_mode(session.config.mode).to_vec();
    let _ = start_view_loader(
        session.config.clone(),
        session.api.clone(),
        targets,
        update_sender.clone(),
    );

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it
    let app = ui::App::new(
        session.config,
        session.environment,
        session.api,
        update_sender,
        update_receiver,
        with_background,
    );

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}
