//! Client execution logic with reconnection support.

use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};

use crate::{
    config::ChatConfig, endpoint::websocket_url, error::ClientError, ui::UserCommand,
    usecase::ChatState,
};

use super::{
    session::{SessionEnd, run_session},
    state::{ConnectionState, SessionEvent},
};

/// Run the chat client, reconnecting at a fixed interval until the user quits.
///
/// `state` outlives every session, so the room list, mood and username survive
/// a reconnect while the current room does not. Sessions never overlap.
pub async fn run_client(
    config: ChatConfig,
    state: Arc<Mutex<ChatState>>,
    mut commands: mpsc::UnboundedReceiver<UserCommand>,
    events: mpsc::UnboundedSender<SessionEvent>,
) -> Result<(), ClientError> {
    let url = websocket_url(&config.server)?;
    let policy = config.reconnect;
    let mut failures: u32 = 0;

    loop {
        tracing::info!("Attempting to connect to {} ({})", url, ConnectionState::Connecting);
        events
            .send(SessionEvent::State(ConnectionState::Connecting))
            .ok();

        match run_session(&url, &state, &mut commands, &events).await {
            Ok(SessionEnd::Quit) => {
                tracing::info!("Client session ended normally");
                return Ok(());
            }
            Ok(SessionEnd::Lost(e)) => {
                tracing::warn!("Connection lost: {}", e);
                failures = 0;
            }
            Err(e) => {
                tracing::warn!("Failed to connect: {}", e);
                failures = count_failure(failures);
            }
        }

        state.lock().await.reset_connection();
        events
            .send(SessionEvent::State(ConnectionState::Disconnected))
            .ok();

        if !policy.should_attempt_reconnect(failures) {
            tracing::error!("Failed to reconnect after {} attempts. Exiting.", failures);
            return Err(ClientError::ReconnectLimitReached(failures));
        }

        tracing::info!("Reconnecting in {:?}...", policy.interval);
        if wait_for_reconnect(policy.interval, &mut commands, &events).await {
            tracing::info!("Quit while disconnected");
            return Ok(());
        }
    }
}

/// Consecutive failures saturate instead of wrapping on an unlimited policy
fn count_failure(failures: u32) -> u32 {
    failures.saturating_add(1)
}

/// Sleep until the next attempt. Returns `true` if the user quit meanwhile.
async fn wait_for_reconnect(
    interval: std::time::Duration,
    commands: &mut mpsc::UnboundedReceiver<UserCommand>,
    events: &mpsc::UnboundedSender<SessionEvent>,
) -> bool {
    let sleep = tokio::time::sleep(interval);
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            _ = &mut sleep => return false,
            command = commands.recv() => match command {
                None | Some(UserCommand::Quit) => return true,
                Some(_) => {
                    events
                        .send(SessionEvent::Notice(
                            "Not connected. Waiting to reconnect...".to_string(),
                        ))
                        .ok();
                }
            },
        }
    }
}
