//! Axum router construction for the dashboard API.
//!
//! Assembles all routes (REST + `WebSocket`) into a single [`Router`]
//! with CORS middleware enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the complete Axum router for the dashboard server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /ws/events` -- `WebSocket` live event stream
/// - `GET /api/room` -- current room snapshot
/// - `GET /api/events` -- query the event log
/// - `GET /api/notes` -- latest meeting notes
/// - `GET /api/moderation` -- moderation summary
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // WebSocket
        .route("/ws/events", get(ws::ws_events))
        // REST API
        .route("/api/room", get(handlers::get_room))
        .route("/api/events", get(handlers::list_events))
        .route("/api/notes", get(handlers::get_notes))
        .route("/api/moderation", get(handlers::get_moderation))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
