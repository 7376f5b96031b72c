//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::api::ApiClient;
use crate::consts::ui_consts::{INPUT_POLL_INTERVAL, SPLASH_DURATION};
use crate::dashboard::DashboardConfig;
use crate::environment::Environment;
use crate::events::{EventType, Worker};
use crate::ui::splash::render_splash;
use crate::ui::view::{ViewState, render_view, targets_for_mode};
use crate::workers::{UiUpdate, UpdateSender, start_insight_worker, start_view_loader};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::mpsc;

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The configured chart view.
    View,
}

/// Application state
pub struct App {
    /// State of the active view. Exists from the start so that chart
    /// updates arriving during the splash screen are not lost.
    state: ViewState,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Client handed to background tasks on refresh and insight requests.
    api: ApiClient,

    /// Receives updates from background tasks.
    update_receiver: mpsc::Receiver<UiUpdate>,

    /// Cloned into every background task this loop spawns.
    update_sender: UpdateSender,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        config: DashboardConfig,
        environment: Environment,
        api: ApiClient,
        update_sender: UpdateSender,
        update_receiver: mpsc::Receiver<UiUpdate>,
        with_background_color: bool,
    ) -> Self {
        let state = ViewState::new(config, environment, Instant::now(), with_background_color);
        Self {
            state,
            current_screen: Screen::Splash,
            api,
            update_receiver,
            update_sender,
        }
    }

    /// Re-run the configured view in the background.
    fn refresh(&self) {
        let targets = targets_for_mode(self.state.config.mode).to_vec();
        let _ = start_view_loader(
            self.state.config.clone(),
            self.api.clone(),
            targets,
            self.update_sender.clone(),
        );
    }

    /// Kick off an insight request if the view supports one.
    fn request_insight(&mut self) {
        if !self.state.can_generate_insight() || self.state.insight_generating {
            return;
        }
        self.state.insight_generating = true;
        let targets = targets_for_mode(self.state.config.mode).to_vec();
        let _ = start_insight_worker(
            self.state.config.clone(),
            self.api.clone(),
            targets,
            self.update_sender.clone(),
        );
    }

    fn apply_update(&mut self, update: UiUpdate) {
        match update {
            UiUpdate::ChartBound(target, chart) => self.state.bind_chart(target, chart),
            UiUpdate::TextSet(target, text) => self.state.set_text(target, &text),
            UiUpdate::Activity(event) => {
                // The insight task finishing, either way, ends the
                // generating animation.
                if event.worker == Worker::InsightFetcher
                    && matches!(event.event_type, EventType::Success | EventType::Error)
                {
                    self.state.insight_generating = false;
                }
                self.state.add_event(event);
            }
        }
    }
}

use crate::dashboard::ChartSurface;

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    // UI event loop
    loop {
        // Queue all incoming updates for processing
        while let Ok(update) = app.update_receiver.try_recv() {
            app.apply_update(update);
        }

        if app.current_screen == Screen::View {
            app.state.update();
        }
        terminal.draw(|f| render(f, app.current_screen, &app.state))?;

        // Handle splash-to-view transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= SPLASH_DURATION {
            app.current_screen = Screen::View;
            continue;
        }

        // Poll for key events
        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }

                match app.current_screen {
                    Screen::Splash => {
                        // Any key press will skip the splash screen
                        app.current_screen = Screen::View;
                    }
                    Screen::View => match key.code {
                        KeyCode::Char('r') => app.refresh(),
                        KeyCode::Char('g') => app.request_insight(),
                        _ => {}
                    },
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: Screen, state: &ViewState) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::View => render_view(f, state),
    }
}
