//! A single WebSocket chat session.

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use reqwest::Url;
use tokio::sync::{Mutex, mpsc};
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use crate::{
    error::ClientError,
    infrastructure::dto::websocket::{ClientEnvelope, encode_client_envelope},
    ui::UserCommand,
    usecase::ChatState,
};

use super::state::{ConnectionState, SessionEvent};

/// How a session that did connect came to an end
#[derive(Debug)]
pub enum SessionEnd {
    /// The user quit, or the command channel closed
    Quit,
    /// The socket closed or failed
    Lost(ClientError),
}

/// Run one WebSocket session until the user quits or the connection drops.
///
/// Returns `Err` only when the connection could not be opened. `getRooms` is
/// the first frame sent on every new connection. The reader and writer tasks
/// are aborted before returning, so nothing from this socket touches `state`
/// afterwards.
pub async fn run_session(
    url: &Url,
    state: &Arc<Mutex<ChatState>>,
    commands: &mut mpsc::UnboundedReceiver<UserCommand>,
    events: &mpsc::UnboundedSender<SessionEvent>,
) -> Result<SessionEnd, ClientError> {
    let (ws_stream, _response) = connect_async(url.as_str())
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to {}", url);
    events
        .send(SessionEvent::State(ConnectionState::Connected))
        .ok();

    let (mut write, mut read) = ws_stream.split();
    let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel::<ClientEnvelope>();

    outbound_tx.send(state.lock().await.request_rooms()).ok();

    // Writer: serialize envelopes in order
    let mut write_task = tokio::spawn(async move {
        while let Some(envelope) = outbound_rx.recv().await {
            let json = match encode_client_envelope(&envelope) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize envelope: {}", e);
                    continue;
                }
            };

            if let Err(e) = write.send(Message::Text(json.into())).await {
                tracing::warn!("Failed to send envelope: {}", e);
                return ClientError::ConnectionError(e.to_string());
            }
        }

        ClientError::ConnectionError("Outbound channel closed".to_string())
    });

    // Reader: dispatch inbound frames into the shared state
    let reader_state = Arc::clone(state);
    let reader_events = events.clone();
    let mut read_task = tokio::spawn(async move {
        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    let chat_events = reader_state.lock().await.apply_frame(text.as_str());
                    for event in chat_events {
                        reader_events.send(SessionEvent::Chat(event)).ok();
                    }
                }
                Ok(Message::Binary(data)) => {
                    tracing::debug!("Ignoring binary frame ({} bytes)", data.len());
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    return ClientError::ConnectionError("Server closed the connection".to_string());
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    return ClientError::ConnectionError(e.to_string());
                }
                _ => {}
            }
        }

        ClientError::ConnectionError("Connection lost".to_string())
    });

    let end = loop {
        tokio::select! {
            read_result = &mut read_task => {
                write_task.abort();
                break SessionEnd::Lost(join_error(read_result));
            }
            write_result = &mut write_task => {
                read_task.abort();
                break SessionEnd::Lost(join_error(write_result));
            }
            command = commands.recv() => {
                let Some(command) = command else {
                    break SessionEnd::Quit;
                };
                if command == UserCommand::Quit {
                    break SessionEnd::Quit;
                }
                let outcome = handle_command(command, &mut *state.lock().await);
                match outcome {
                    Ok(Some(envelope)) => {
                        outbound_tx.send(envelope).ok();
                    }
                    Ok(None) => {}
                    Err(notice) => {
                        events.send(SessionEvent::Notice(notice)).ok();
                    }
                }
            }
        }
    };

    read_task.abort();
    write_task.abort();

    Ok(end)
}

fn join_error(result: Result<ClientError, tokio::task::JoinError>) -> ClientError {
    result.unwrap_or_else(|e| ClientError::ConnectionError(e.to_string()))
}

/// Turn a prompt command into the envelope to send, or a notice for the user
fn handle_command(
    command: UserCommand,
    state: &mut ChatState,
) -> Result<Option<ClientEnvelope>, String> {
    match command {
        UserCommand::ListRooms => Ok(Some(state.request_rooms())),
        UserCommand::Join(room_id) => Ok(Some(state.join_room(&room_id))),
        UserCommand::Create { name, interests } => state
            .create_room(&name, interests)
            .map(Some)
            .map_err(|e| e.to_string()),
        UserCommand::ChangeMood(mood) => Ok(state.change_mood(mood)),
        UserCommand::SelectTags(tags) => {
            state.select_tags(tags);
            Ok(None)
        }
        UserCommand::Say(text) => state
            .send_message(&text)
            .map(Some)
            .map_err(|e| e.to_string()),
        UserCommand::ShowInterests | UserCommand::Help | UserCommand::Quit => Ok(None),
    }
}
