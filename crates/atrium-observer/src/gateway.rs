//! The broadcast gateway backed by the dashboard's event channel.
//!
//! The room publishes every emitted event through its
//! [`BroadcastGateway`] seam; this implementation fans those events out
//! to all connected `WebSocket` clients. Delivery is best-effort: a
//! full or unsubscribed channel never surfaces as a room error.

use std::sync::Arc;

use atrium_room::BroadcastGateway;
use atrium_types::{Event, RoomId};
use tracing::trace;

use crate::state::{AppState, EventBroadcast};

/// Pushes room events into the dashboard broadcast channel.
#[derive(Debug, Clone)]
pub struct ChannelGateway {
    state: Arc<AppState>,
}

impl ChannelGateway {
    /// Build a gateway that publishes into the given application state.
    pub const fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

impl BroadcastGateway for ChannelGateway {
    fn publish(&self, room: &RoomId, event: &Event) {
        let delivered = self.state.broadcast(&EventBroadcast {
            room_id: room.clone(),
            event: event.clone(),
        });
        trace!(room = %room, sequence = event.sequence, delivered, "event broadcast");
    }
}
