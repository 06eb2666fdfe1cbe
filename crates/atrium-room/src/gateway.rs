//! Outbound event push to dashboard clients.
//!
//! The room calls [`BroadcastGateway::publish`] once per emitted event.
//! Delivery is fire-and-forget: the room does not wait for an
//! acknowledgment, and a dropped broadcast never rolls back room state.
//! Implementations absorb their own failures (logging at most) -- the
//! trait deliberately returns nothing.

use atrium_types::{Event, RoomId};

/// Best-effort push channel toward connected dashboard clients.
pub trait BroadcastGateway: Send + Sync {
    /// Push one event to whoever is listening.
    ///
    /// Must not panic and must not block for longer than an in-memory
    /// channel send. Failures are absorbed by the implementation.
    fn publish(&self, room: &RoomId, event: &Event);
}

/// A gateway that drops everything.
///
/// Default for tests and for rooms running without a dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGateway;

impl BroadcastGateway for NullGateway {
    fn publish(&self, _room: &RoomId, _event: &Event) {}
}
