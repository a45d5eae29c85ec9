//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the hub of connected clients: one outbound channel per client,
//! keyed by the client ID minted at upgrade time. Messages flow through
//! these channels and are never stored.

use std::collections::HashMap;
use std::sync::Arc;

use messages::Message;
use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

/// Outbound channel capacity per client. A client that falls this far
/// behind starts missing relay frames (delivery is best-effort).
pub const CLIENT_CHANNEL_CAPACITY: usize = 256;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — the client map is Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    /// Connected clients: `client_id` -> sender for relayed messages.
    pub clients: Arc<RwLock<HashMap<Uuid, mpsc::Sender<Message>>>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
