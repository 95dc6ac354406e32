//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::api::Backend as ApiBackend;
use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, PAGE_SCROLL_LINES, SPLASH_DURATION_SECS};
use crate::environment::Environment;
use crate::events::{Event as FetchEvent, EventSender};
use crate::fetcher::{spawn_content_fetch, spawn_weather_fetch};
use crate::source::Source;
use crate::theme::Theme;
use crate::ui::dashboard::{render_dashboard, DashboardState, UIConfig};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{backend::Backend, Frame, Terminal};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the content feed.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The environment in which the application is running.
    environment: Environment,
    /// Backend the fetch tasks talk to.
    backend: Arc<dyn ApiBackend>,
    /// Theme decided at startup (persisted value, terminal hint, or dark).
    theme: Theme,
    /// Where the theme preference is persisted.
    config_path: PathBuf,
    /// Display options from the CLI.
    ui_config: UIConfig,
    /// The current screen being displayed in the application.
    current_screen: Screen,
    /// Handed to every spawned fetch task.
    event_sender: EventSender,
    /// Receives events from fetch tasks.
    event_receiver: mpsc::Receiver<FetchEvent>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        backend: Arc<dyn ApiBackend>,
        theme: Theme,
        config_path: PathBuf,
        ui_config: UIConfig,
    ) -> Self {
        let (sender, receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        Self {
            environment,
            backend,
            theme,
            config_path,
            ui_config,
            current_screen: Screen::Splash,
            event_sender: EventSender::new(sender),
            event_receiver: receiver,
        }
    }

    /// Builds the dashboard state and kicks off the weather fetch.
    fn open_dashboard(&mut self) {
        let today = chrono::Local::now().date_naive();
        let state = DashboardState::new(
            self.environment,
            self.theme,
            today,
            self.config_path.clone(),
            &self.ui_config,
        );
        spawn_weather_fetch(self.backend.clone(), self.event_sender.clone());
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(SPLASH_DURATION_SECS);

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Apply queued events, then make sure the current selection has a
        // fetch. `begin` refuses keys that are cached or already in flight,
        // so switching back to a seen pair never refetches and concurrent
        // requests for one key are deduplicated.
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
            let key = state.current_key();
            if state.cache.begin(key) {
                spawn_content_fetch(app.backend.clone(), key, app.event_sender.clone());
            }
        }

        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.open_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any key press will skip the splash screen
                        app.open_dashboard();
                    }
                    Screen::Dashboard(state) => handle_dashboard_key(state, key.code),
                }
            }
        }
    }
}

fn handle_dashboard_key(state: &mut DashboardState, code: KeyCode) {
    match code {
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(source) = c.to_digit(10).and_then(|d| Source::from_digit(d as usize)) {
                state.select_source(source);
            }
        }
        KeyCode::Tab => state.select_next_source(),
        KeyCode::BackTab => state.select_prev_source(),
        KeyCode::Left | KeyCode::Char('h') => state.select_prev_date(),
        KeyCode::Right | KeyCode::Char('l') => state.select_next_date(),
        KeyCode::Down | KeyCode::Char('j') => state.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => state.scroll_up(1),
        KeyCode::PageDown => state.scroll_down(PAGE_SCROLL_LINES),
        KeyCode::PageUp => state.scroll_up(PAGE_SCROLL_LINES),
        KeyCode::Char('t') => state.toggle_theme(),
        KeyCode::Char('m') => state.toggle_sidebar(),
        KeyCode::Char('r') => state.refresh(),
        _ => {}
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
