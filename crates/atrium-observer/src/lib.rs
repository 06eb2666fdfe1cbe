//! Dashboard API server for the Atrium meeting room.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`WebSocket` endpoint** (`/ws/events`) for real-time event
//!   streaming via [`tokio::sync::broadcast`]
//! - **REST endpoints** for querying session state (room snapshot,
//!   event log, meeting notes, moderation summary)
//! - **Minimal HTML dashboard** (`GET /`) showing room status and
//!   links to API endpoints
//!
//! # Architecture
//!
//! The server reads from an in-memory [`DashboardSnapshot`] that the
//! engine refreshes after each session step, so REST reads never block
//! the room's critical section. Live events arrive through
//! [`ChannelGateway`], the room's broadcast seam: the room publishes
//! each emitted event and the gateway fans it out to all connected
//! `WebSocket` clients with automatic lag handling.
//!
//! [`DashboardSnapshot`]: state::DashboardSnapshot
//! [`ChannelGateway`]: gateway::ChannelGateway

pub mod error;
pub mod gateway;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod ws;

// Re-export primary types for convenience.
pub use error::ObserverError;
pub use gateway::ChannelGateway;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::{AppState, DashboardSnapshot, EventBroadcast};
