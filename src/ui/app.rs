//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::dashboard_consts::refresh::TIME_RANGE_PRESETS;
use crate::environment::Environment;
use crate::events::Event as DashboardEvent;
use crate::export;
use crate::refresher::{Command, DashboardUpdate, ReportKind, View};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use chrono::Local;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub time_range: u32,
}

impl UIConfig {
    pub fn new(with_background_color: bool, time_range: u32) -> Self {
        Self {
            with_background_color,
            time_range,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying bot analytics.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The backend environment the session points at.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from the refresher.
    event_receiver: mpsc::Receiver<DashboardEvent>,

    /// Receives successful refresh batches.
    update_receiver: mpsc::Receiver<DashboardUpdate>,

    /// Sends commands to the refresher.
    command_sender: mpsc::Sender<Command>,

    /// Broadcasts shutdown signal to the refresher.
    shutdown_sender: broadcast::Sender<()>,

    /// Whether a refresh cycle is in flight (shared with the refresher).
    busy: Arc<AtomicBool>,

    /// UI options applied when the dashboard screen is created.
    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<DashboardEvent>,
        update_receiver: mpsc::Receiver<DashboardUpdate>,
        command_sender: mpsc::Sender<Command>,
        shutdown_sender: broadcast::Sender<()>,
        busy: Arc<AtomicBool>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            environment,
            current_screen: Screen::Splash,
            event_receiver,
            update_receiver,
            command_sender,
            shutdown_sender,
            busy,
            ui_config,
        }
    }

    fn enter_dashboard(&mut self) {
        let state = DashboardState::new(
            self.environment,
            self.busy.clone(),
            self.ui_config.clone(),
        );
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Send a command without blocking the draw loop; a full queue only drops
/// redundant input.
fn send_command(sender: &mpsc::Sender<Command>, command: Command) {
    if let Err(e) = sender.try_send(command) {
        log::debug!("dropping command, refresher queue full: {}", e);
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Queue all incoming refresher events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Apply any completed refresh batches
        while let Ok(update) = app.update_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.apply_update(update);
            }
        }

        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.enter_dashboard();
                continue;
            }
        }

        // Poll for terminal events
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Skip events that are not KeyEventKind::Press
                    if key.kind == event::KeyEventKind::Release {
                        continue;
                    }

                    // Handle exit events
                    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                        let _ = app.shutdown_sender.send(());
                        return Ok(());
                    }

                    match &mut app.current_screen {
                        Screen::Splash => {
                            // Any key press will skip the splash screen
                            app.enter_dashboard();
                        }
                        Screen::Dashboard(state) => {
                            handle_dashboard_key(state, &app.command_sender, key.code)
                        }
                    }
                }
                // A hidden view stops the refresh timer; a visible one
                // restarts it.
                Event::FocusLost => send_command(
                    &app.command_sender,
                    Command::VisibilityChanged { hidden: true },
                ),
                Event::FocusGained => send_command(
                    &app.command_sender,
                    Command::VisibilityChanged { hidden: false },
                ),
                _ => {}
            }
        }
    }
}

fn handle_dashboard_key(
    state: &mut DashboardState,
    commands: &mpsc::Sender<Command>,
    code: KeyCode,
) {
    match code {
        KeyCode::Char('r') => {
            // Manual refresh is a no-op while a cycle is in flight.
            if state.refresh_in_flight() {
                log::debug!("refresh already in progress, ignoring");
            } else {
                send_command(commands, Command::Refresh);
            }
        }
        KeyCode::Char('e') => {
            let path = export::default_export_path(Local::now().date_naive());
            match export::write_counters_csv(&state.targets, &path) {
                Ok(()) => state
                    .notifications
                    .push_success(format!("Report saved to {}", path.display())),
                Err(e) => {
                    log::error!("CSV export failed: {}", e);
                    state
                        .notifications
                        .push_error("Could not write the CSV report.".to_string());
                }
            }
        }
        KeyCode::Char('a') => {
            let next = match state.view {
                View::Overview => View::Analytics,
                View::Analytics => View::Overview,
            };
            state.set_view(next);
            send_command(commands, Command::SetView(next));
        }
        KeyCode::Char('1') => send_command(commands, Command::SetTimeRange(TIME_RANGE_PRESETS[0])),
        KeyCode::Char('2') => send_command(commands, Command::SetTimeRange(TIME_RANGE_PRESETS[1])),
        KeyCode::Char('3') => send_command(commands, Command::SetTimeRange(TIME_RANGE_PRESETS[2])),
        KeyCode::Char('g') => send_command(commands, Command::ExportReport(ReportKind::Overview)),
        KeyCode::Char('c') => {
            send_command(commands, Command::ExportReport(ReportKind::Conversations))
        }
        KeyCode::Char('p') => send_command(commands, Command::ExportReport(ReportKind::Products)),
        KeyCode::Char('x') => {
            send_command(commands, Command::ExportReport(ReportKind::AiPerformance))
        }
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
