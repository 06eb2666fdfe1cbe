//! Error types for the `atrium-room` crate.
//!
//! All variants are caller-input errors: the offending call is rejected
//! and the room's participant set, event log, and proximity state are
//! exactly as they were before the call.

use atrium_types::{ParticipantId, RoomId};

/// Errors that can occur during room operations.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// A participant with this id is already in the room.
    #[error("participant id already present: {0}")]
    DuplicateId(ParticipantId),

    /// No participant with this id is in the room.
    #[error("unknown participant: {0}")]
    UnknownParticipant(ParticipantId),

    /// The gesture name is not in the configured catalog.
    #[error("unknown gesture: {0:?}")]
    UnknownGesture(String),

    /// The room has been closed; mutating operations are rejected.
    #[error("room {0} is closed")]
    RoomClosed(RoomId),

    /// The event sequence counter would overflow.
    #[error("event sequence overflow in room {0}")]
    SequenceOverflow(RoomId),
}
