//! Session setup and initialization

use crate::consts::dashboard_consts::{COMMAND_QUEUE_SIZE, EVENT_QUEUE_SIZE, UPDATE_QUEUE_SIZE};
use crate::environment::Environment;
use crate::events::{Event, EventSender};
use crate::feed::FeedClient;
use crate::refresher::{Command, DashboardUpdate, Refresher};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Receives refresher events.
    pub event_receiver: mpsc::Receiver<Event>,
    /// Receives completed refresh batches.
    pub update_receiver: mpsc::Receiver<DashboardUpdate>,
    /// Sends commands to the refresher.
    pub command_sender: mpsc::Sender<Command>,
    /// Join handle for the refresher task.
    pub refresher_handle: JoinHandle<()>,
    /// Shutdown sender to stop the refresher.
    pub shutdown_sender: broadcast::Sender<()>,
    /// Whether a refresh cycle is in flight.
    pub busy: Arc<AtomicBool>,
    /// The backend environment this session points at.
    pub environment: Environment,
    /// Trailing conversation window, in days.
    pub time_range: u32,
}

/// Sets up a dashboard session.
///
/// Wires the composition root explicitly: one feed client, one refresher
/// task, and the channels the UI talks to it over.
pub fn setup_session(
    environment: Environment,
    base_url: Option<String>,
    time_range: u32,
) -> SessionData {
    let feed = match base_url {
        Some(url) => FeedClient::with_base_url(environment, url),
        None => FeedClient::new(environment),
    };

    let busy = Arc::new(AtomicBool::new(false));
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (update_sender, update_receiver) = mpsc::channel::<DashboardUpdate>(UPDATE_QUEUE_SIZE);
    let (command_sender, command_receiver) = mpsc::channel::<Command>(COMMAND_QUEUE_SIZE);
    let (shutdown_sender, _) = broadcast::channel(1);

    let refresher = Refresher::new(
        Box::new(feed),
        time_range,
        busy.clone(),
        update_sender,
        EventSender::new(event_sender),
    );
    let shutdown_receiver = shutdown_sender.subscribe();
    let refresher_handle = tokio::spawn(refresher.run(command_receiver, shutdown_receiver));

    SessionData {
        event_receiver,
        update_receiver,
        command_sender,
        refresher_handle,
        shutdown_sender,
        busy,
        environment,
        time_range,
    }
}
