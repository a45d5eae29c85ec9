use super::*;
use tokio::time::{Duration, timeout};

async fn recv_relayed(rx: &mut mpsc::Receiver<Message>) -> Message {
    timeout(Duration::from_millis(500), rx.recv())
        .await
        .expect("relay receive timed out")
        .expect("relay channel closed unexpectedly")
}

async fn assert_no_relay(rx: &mut mpsc::Receiver<Message>) {
    assert!(
        timeout(Duration::from_millis(80), rx.recv()).await.is_err(),
        "expected no relayed message"
    );
}

// =============================================================
// Registration
// =============================================================

#[tokio::test]
async fn register_then_unregister_updates_count() {
    let state = AppState::new();
    let client_id = Uuid::new_v4();
    let (tx, _rx) = mpsc::channel(8);

    register(&state, client_id, tx).await;
    assert_eq!(client_count(&state).await, 1);

    unregister(&state, client_id).await;
    assert_eq!(client_count(&state).await, 0);
}

#[tokio::test]
async fn unregister_unknown_client_is_a_no_op() {
    let state = AppState::new();
    unregister(&state, Uuid::new_v4()).await;
    assert_eq!(client_count(&state).await, 0);
}

// =============================================================
// Relay
// =============================================================

#[tokio::test]
async fn relay_without_exclusion_reaches_everyone() {
    let state = AppState::new();
    let (tx_a, mut rx_a) = mpsc::channel(8);
    let (tx_b, mut rx_b) = mpsc::channel(8);
    register(&state, Uuid::new_v4(), tx_a).await;
    register(&state, Uuid::new_v4(), tx_b).await;

    let message = Message { sender: "cascade".into(), text: "hi".into() };
    let delivered = relay(&state, &message, None).await;

    assert_eq!(delivered, 2);
    assert_eq!(recv_relayed(&mut rx_a).await, message);
    assert_eq!(recv_relayed(&mut rx_b).await, message);
}

#[tokio::test]
async fn relay_excludes_the_originating_client() {
    let state = AppState::new();
    let sender_id = Uuid::new_v4();
    let (tx_sender, mut rx_sender) = mpsc::channel(8);
    let (tx_peer, mut rx_peer) = mpsc::channel(8);
    register(&state, sender_id, tx_sender).await;
    register(&state, Uuid::new_v4(), tx_peer).await;

    let message = Message::from_human("hello");
    let delivered = relay(&state, &message, Some(sender_id)).await;

    assert_eq!(delivered, 1);
    assert_eq!(recv_relayed(&mut rx_peer).await, message);
    assert_no_relay(&mut rx_sender).await;
}

#[tokio::test]
async fn relay_skips_full_channel_without_blocking() {
    let state = AppState::new();
    let (tx_full, mut rx_full) = mpsc::channel(1);
    let (tx_open, mut rx_open) = mpsc::channel(8);
    register(&state, Uuid::new_v4(), tx_full.clone()).await;
    register(&state, Uuid::new_v4(), tx_open).await;

    let backlog = Message { sender: "cascade".into(), text: "backlog".into() };
    tx_full
        .try_send(backlog.clone())
        .expect("first send should fill the channel");

    let message = Message { sender: "cascade".into(), text: "fresh".into() };
    let delivered = relay(&state, &message, None).await;

    // The full channel misses the frame; the open one gets it.
    assert_eq!(delivered, 1);
    assert_eq!(recv_relayed(&mut rx_open).await, message);
    assert_eq!(recv_relayed(&mut rx_full).await, backlog);
    assert_no_relay(&mut rx_full).await;
}

#[tokio::test]
async fn relay_to_empty_hub_delivers_nothing() {
    let state = AppState::new();
    let delivered = relay(&state, &Message::from_human("anyone there?"), None).await;
    assert_eq!(delivered, 0);
}
