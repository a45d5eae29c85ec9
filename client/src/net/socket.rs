//! WebSocket client for the chat wire.
//!
//! Connects once at mount, forwards outbound frames from a channel, and
//! dispatches inbound frames into chat state. There is deliberately no
//! reconnection and no backoff: a dropped socket stays dropped for the
//! lifetime of the page (accepted limitation of the system).
//!
//! All websocket logic is gated behind the `csr` feature since it requires
//! a browser environment.

#[cfg(feature = "csr")]
use leptos::prelude::{RwSignal, Update};

#[cfg(feature = "csr")]
use messages::Message;

#[cfg(feature = "csr")]
use crate::state::chat::ChatState;

/// Queue an encoded message on the socket channel.
///
/// Returns `false` if the channel is closed (no active connection).
#[cfg(feature = "csr")]
pub fn send_message(tx: &futures::channel::mpsc::UnboundedSender<String>, message: &Message) -> bool {
    tx.unbounded_send(messages::encode_message(message)).is_ok()
}

/// Spawn the websocket client lifecycle as a local async task and return
/// the sending half of its outbound channel.
#[cfg(feature = "csr")]
pub fn spawn_socket_client(chat: RwSignal<ChatState>) -> futures::channel::mpsc::UnboundedSender<String> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();
    leptos::task::spawn_local(socket_client_loop(chat, rx));

    tx
}

/// Single connection lifecycle: open, run until the socket drops, stop.
#[cfg(feature = "csr")]
async fn socket_client_loop(
    chat: RwSignal<ChatState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    let url = socket_url();
    match connect_and_run(&url, chat, rx).await {
        Ok(()) => leptos::logging::log!("socket closed"),
        Err(e) => leptos::logging::warn!("socket error: {e}"),
    }
}

/// Derive the websocket URL from the page location at load time.
#[cfg(feature = "csr")]
fn socket_url() -> String {
    let location = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let scheme = if location.starts_with("https") { "wss" } else { "ws" };
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:8081".to_owned());
    format!("{scheme}://{host}/ws")
}

/// Connect to the relay and process frames until the socket drops.
#[cfg(feature = "csr")]
async fn connect_and_run(
    url: &str,
    chat: RwSignal<ChatState>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message as WsMessage;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    // Forward outgoing frames from the channel to the socket.
    let send_task = async {
        while let Some(json) = rx.next().await {
            if ws_write.send(WsMessage::Text(json)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: dispatch incoming frames into chat state.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(WsMessage::Text(text)) => dispatch_inbound(&text, chat),
                Ok(WsMessage::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("socket recv error: {e}");
                    break;
                }
            }
        }
    };

    // When either side finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

/// Decode one inbound frame and append it to the log.
///
/// A malformed frame halts handling of that frame only: the error is
/// logged, nothing is rendered, and later frames are unaffected.
#[cfg(feature = "csr")]
fn dispatch_inbound(text: &str, chat: RwSignal<ChatState>) {
    match messages::decode_message(text) {
        Ok(message) => chat.update(|c| c.apply_inbound(message)),
        Err(e) => leptos::logging::error!("malformed inbound frame: {e}"),
    }
}
