//! Shared application state for the dashboard server.
//!
//! [`AppState`] holds the broadcast channel for live event delivery and
//! the in-memory [`DashboardSnapshot`] that the REST endpoints serve.
//! The engine refreshes the snapshot after each session step, so REST
//! reads never touch the room itself.

use std::sync::Arc;

use atrium_types::{Event, ModerationSummary, NotesSummary, RoomId, RoomSnapshot};
use tokio::sync::{RwLock, broadcast};

/// Capacity of the broadcast channel for live events.
///
/// A subscriber that falls behind by more than this many messages
/// receives a [`broadcast::error::RecvError::Lagged`] and skips ahead
/// to the newest event.
const BROADCAST_CAPACITY: usize = 256;

/// JSON-serializable event envelope pushed over the `WebSocket`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EventBroadcast {
    /// The room the event was emitted in.
    pub room_id: RoomId,
    /// The event itself.
    pub event: Event,
}

/// In-memory view of the session served by the REST endpoints.
///
/// Updated by the engine after each scripted step; all REST reads are
/// served from this snapshot so the dashboard never blocks the room.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    /// The latest room snapshot, if the session has started.
    pub room: Option<RoomSnapshot>,
    /// The event log in emission order.
    pub events: Vec<Event>,
    /// The latest synthesized meeting notes, if any.
    pub notes: Option<NotesSummary>,
    /// Aggregated moderation counts over the event log.
    pub moderation: ModerationSummary,
    /// Whether a session recording is currently active.
    pub recording_active: bool,
}

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The
/// broadcast sender fans events out to all connected `WebSocket`
/// clients; the snapshot is a read-write lock over the dashboard view.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Broadcast sender for live event envelopes.
    pub tx: broadcast::Sender<EventBroadcast>,
    /// The current dashboard snapshot.
    pub snapshot: Arc<RwLock<DashboardSnapshot>>,
}

impl AppState {
    /// Create a new application state with an empty snapshot.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            tx,
            snapshot: Arc::new(RwLock::new(DashboardSnapshot::default())),
        }
    }

    /// Subscribe to the live event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<EventBroadcast> {
        self.tx.subscribe()
    }

    /// Publish an event envelope to all connected clients.
    ///
    /// Returns the number of receivers that got the message. Zero
    /// receivers (no clients connected) is normal, not an error.
    pub fn broadcast(&self, envelope: &EventBroadcast) -> usize {
        self.tx.send(envelope.clone()).unwrap_or(0)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
