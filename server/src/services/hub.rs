//! Hub service — connected-client registry and message relay.
//!
//! DESIGN
//! ======
//! The hub is the in-memory connection manager: each client registers an
//! outbound channel on upgrade and is removed on disconnect. Relay is a
//! fan-out over the registered channels, excluding the originating client.
//! The widget renders its own messages optimistically, so echoing a message
//! back to its sender would double-render it.

use messages::Message;
use tokio::sync::mpsc;
use tracing::info;
use uuid::Uuid;

use crate::state::AppState;

/// Register a connected client's outbound channel.
pub async fn register(state: &AppState, client_id: Uuid, tx: mpsc::Sender<Message>) {
    let mut clients = state.clients.write().await;
    clients.insert(client_id, tx);
    info!(%client_id, connected = clients.len(), "hub: client registered");
}

/// Remove a client from the hub. Safe to call for an unknown ID.
pub async fn unregister(state: &AppState, client_id: Uuid) {
    let mut clients = state.clients.write().await;
    clients.remove(&client_id);
    info!(%client_id, connected = clients.len(), "hub: client removed");
}

/// Relay a message to every registered client except `exclude`.
///
/// Returns the number of clients the message was queued for. Best-effort: a
/// client whose channel is full misses this frame.
pub async fn relay(state: &AppState, message: &Message, exclude: Option<Uuid>) -> usize {
    let clients = state.clients.read().await;

    let mut delivered = 0;
    for (client_id, tx) in &*clients {
        if exclude == Some(*client_id) {
            continue;
        }
        if tx.try_send(message.clone()).is_ok() {
            delivered += 1;
        }
    }
    delivered
}

/// Number of currently registered clients.
pub async fn client_count(state: &AppState) -> usize {
    state.clients.read().await.len()
}

#[cfg(test)]
#[path = "hub_test.rs"]
mod tests;
