//! WebSocket handler bridging sockets to the relay.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use curtain_core::ClientEvent;
use futures::{sink::SinkExt, stream::StreamExt};
use tracing::{debug, warn};

use crate::state::AppState;

/// WebSocket upgrade handler.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Handle individual WebSocket connection.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();
    let (session, mut outbox) = state.relay.connect();
    debug!(session = %session, sessions = state.relay.session_count(), "WebSocket session opened");

    // Forward this session's outbox to the socket
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = outbox.recv().await {
            let json = match msg.to_json() {
                Ok(json) => json,
                Err(e) => {
                    warn!(session = %session, error = %e, "Failed to encode message");
                    continue;
                }
            };
            debug!(session = %session, message = %json, "Sending message to WebSocket client");
            if sender.send(Message::Text(json.into())).await.is_err() {
                debug!(session = %session, "WebSocket send failed, client disconnected");
                break;
            }
        }
    });

    // Handle incoming messages from client
    let relay = state.relay.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => match ClientEvent::from_json(text.as_str()) {
                    Ok(event) => relay.receive(session, event),
                    Err(e) => warn!(session = %session, error = %e, "Ignoring undecodable frame"),
                },
                Message::Close(_) => {
                    debug!(session = %session, "WebSocket client sent close frame");
                    break;
                }
                _ => {}
            }
        }
    });

    // Whichever side finishes first ends the session
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    state.relay.disconnect(session);
}
