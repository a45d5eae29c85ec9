//! Root application component and socket wiring.

use leptos::prelude::*;

use messages::Message;

use crate::components::chat_widget::ChatWidget;
use crate::state::chat::ChatState;

/// Sending half of the socket client, shared with components via context.
///
/// Inert when no socket task is running (non-browser builds): `send`
/// reports delivery failure and nothing else happens.
#[derive(Clone, Default)]
pub struct SocketSender {
    #[cfg(feature = "csr")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl SocketSender {
    /// Wrap the sending half of a running socket client.
    #[cfg(feature = "csr")]
    pub(crate) fn new(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Queue a message for transmission.
    ///
    /// Returns `false` when no socket task is running or the channel has
    /// closed. The failure is the caller's to log, not recover from: there
    /// is no retry and no reconnection.
    pub fn send(&self, message: &Message) -> bool {
        #[cfg(feature = "csr")]
        if let Some(tx) = &self.tx {
            return crate::net::socket::send_message(tx, message);
        }
        let _ = message;
        false
    }
}

/// Root application component.
///
/// Owns the single client session: the chat log state and the websocket
/// task, both constructed once at page load and never torn down.
#[component]
pub fn App() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    provide_context(chat);

    #[cfg(feature = "csr")]
    let sender = SocketSender::new(crate::net::socket::spawn_socket_client(chat));
    #[cfg(not(feature = "csr"))]
    let sender = SocketSender::default();
    provide_context(RwSignal::new(sender));

    view! { <ChatWidget/> }
}
