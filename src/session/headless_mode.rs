//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::feed::types::BotState;
use std::error::Error;

/// Runs the application in headless mode
///
/// The same refresher drives the session; events and batch summaries are
/// logged to the console instead of drawn.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    // Print session start message
    print_session_starting("headless", session.environment);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();

    // Event loop: log events and batch summaries until shutdown
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                println!("{}", event);
            }
            Some(update) = session.update_receiver.recv() => {
                let bot = match update.status.status {
                    BotState::Online => "online",
                    BotState::Offline => "offline",
                };
                println!(
                    "overview: {} users, {} active, {} conversations, {} messages today, bot {}",
                    update.overview.total_users,
                    update.overview.active_users,
                    update.overview.active_conversations,
                    update.overview.messages_today,
                    bot,
                );
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    // Wait for the refresher to finish
    print_session_shutdown();
    let _ = session.refresher_handle.await;
    print_session_exit_success();

    Ok(())
}
