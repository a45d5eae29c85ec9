//! WebSocket handler — chat message relay.
//!
//! DESIGN
//! ======
//! On upgrade, mints a client ID, registers an outbound channel in the hub,
//! and enters a `select!` loop:
//! - Inbound client frames → decode + relay to every other client
//! - Relay frames from peers → forward to this client
//!
//! Frames that fail to decode are logged and dropped, never relayed. There
//! is no reply envelope: the wire carries bare two-field messages in both
//! directions.
//!
//! LIFECYCLE
//! =========
//! 1. Upgrade → register in the hub
//! 2. Client frames → decode → relay to peers
//! 3. Peer frames → forward to client
//! 4. Close → deregister

use axum::extract::State;
use axum::extract::ws::{Message as WsMessage, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use messages::Message;

use crate::services;
use crate::state::{AppState, CLIENT_CHANNEL_CAPACITY};

pub async fn handle_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| run_ws(socket, state))
}

// =============================================================================
// CONNECTION
// =============================================================================

async fn run_ws(mut socket: WebSocket, state: AppState) {
    let client_id = Uuid::new_v4();

    // Per-connection channel for receiving relay frames from peers.
    let (client_tx, mut client_rx) = mpsc::channel::<Message>(CLIENT_CHANNEL_CAPACITY);
    services::hub::register(&state, client_id, client_tx).await;

    info!(%client_id, "ws: client connected");

    loop {
        tokio::select! {
            msg = socket.recv() => {
                let Some(msg) = msg else { break };
                let Ok(msg) = msg else { break };
                match msg {
                    WsMessage::Text(text) => {
                        process_inbound_text(&state, client_id, &text).await;
                    }
                    WsMessage::Close(_) => break,
                    _ => {}
                }
            }
            Some(message) = client_rx.recv() => {
                if send_message(&mut socket, &message).await.is_err() {
                    break;
                }
            }
        }
    }

    services::hub::unregister(&state, client_id).await;
    info!(%client_id, "ws: client disconnected");
}

// =============================================================================
// INBOUND
// =============================================================================

/// Decode one inbound text frame and relay it to the sender's peers.
///
/// Kept separate from the websocket transport so tests can exercise relay
/// behavior end-to-end against in-memory hub channels.
async fn process_inbound_text(state: &AppState, client_id: Uuid, text: &str) {
    let message = match messages::decode_message(text) {
        Ok(m) => m,
        Err(e) => {
            warn!(%client_id, error = %e, "ws: dropping undecodable frame");
            return;
        }
    };

    let delivered = services::hub::relay(state, &message, Some(client_id)).await;
    info!(
        %client_id,
        sender = %message.sender,
        kind = ?message.sender_kind(),
        delivered,
        "ws: relayed message"
    );
}

// =============================================================================
// OUTBOUND
// =============================================================================

async fn send_message(socket: &mut WebSocket, message: &Message) -> Result<(), ()> {
    let json = messages::encode_message(message);
    socket
        .send(WsMessage::Text(json.into()))
        .await
        .map_err(|_| ())
}

#[cfg(test)]
#[path = "ws_test.rs"]
mod tests;
