//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the websocket endpoint and the static chat page under a single Axum
//! router. The page at `/` hosts the widget; everything dynamic flows over
//! `/ws`.

pub mod ws;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Resolve the directory holding the static chat page.
fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../static"))
}

/// Websocket endpoint + health check, with the chat page served at `/`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let page_service = ServeDir::new(static_dir()).append_index_html_on_directories(true);

    Router::new()
        .route("/ws", get(ws::handle_ws))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .fallback_service(page_service)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
