//! The closed event set emitted by a meeting room.
//!
//! Every state change in a room produces exactly one immutable [`Event`]
//! appended to the room's log. Events are the source of truth for the
//! session: the recorder buffers them, the dashboard streams them, and
//! the notes synthesizer derives its summary from them.
//!
//! The payload is a closed tagged enum ([`EventKind`]) rather than a
//! free-form JSON blob, so every consumer matches exhaustively and a
//! new event kind is a compile error at each consumer until handled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::ParticipantId;
use crate::structs::{ModerationResult, Position};

/// An immutable event in a room's append-only log.
///
/// Sequence numbers are assigned by the room, start at 1, and are
/// strictly increasing with no gaps. Timestamps come from the room's
/// injected clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Event {
    /// Monotonically increasing sequence number within the room.
    pub sequence: u64,
    /// Wall-clock time when the event was emitted.
    pub timestamp: DateTime<Utc>,
    /// The type-specific payload.
    #[serde(flatten)]
    pub kind: EventKind,
}

/// Type-specific event payloads.
///
/// Serialized with an internal `type` tag so a recording's transcript
/// reads as a flat array of `{type, sequence, timestamp, ...}` objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum EventKind {
    /// A participant entered the room.
    Join {
        /// The joining participant.
        participant: ParticipantId,
    },

    /// A participant left the room.
    Leave {
        /// The leaving participant.
        participant: ParticipantId,
    },

    /// A participant moved to a new position.
    Move {
        /// The moving participant.
        participant: ParticipantId,
        /// The position after the move.
        position: Position,
    },

    /// A participant performed a gesture.
    Gesture {
        /// The gesturing participant.
        participant: ParticipantId,
        /// Normalized gesture name from the catalog (e.g. `wave`).
        gesture: String,
        /// The participant the gesture was directed at, if any.
        target: Option<ParticipantId>,
    },

    /// A participant sent a chat message.
    ///
    /// The message is always delivered; moderation only flags it. The
    /// original text is never altered.
    Chat {
        /// The sending participant.
        participant: ParticipantId,
        /// The message text, verbatim.
        text: String,
        /// The moderation classification attached at emission time.
        moderation: ModerationResult,
    },

    /// Two participants crossed below the proximity threshold.
    ///
    /// Edge-triggered: emitted once per crossing, not on every move
    /// while the pair remains close.
    Proximity {
        /// One participant of the pair (the order is not meaningful).
        a: ParticipantId,
        /// The other participant of the pair.
        b: ParticipantId,
        /// Their distance at the time of the crossing.
        distance: f64,
    },
}

impl EventKind {
    /// Return the primary participant this event concerns, if any.
    pub const fn participant(&self) -> Option<&ParticipantId> {
        match self {
            Self::Join { participant }
            | Self::Leave { participant }
            | Self::Move { participant, .. }
            | Self::Gesture { participant, .. }
            | Self::Chat { participant, .. } => Some(participant),
            Self::Proximity { .. } => None,
        }
    }

    /// The event's tag name as it appears on the wire.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Join { .. } => "join",
            Self::Leave { .. } => "leave",
            Self::Move { .. } => "move",
            Self::Gesture { .. } => "gesture",
            Self::Chat { .. } => "chat",
            Self::Proximity { .. } => "proximity",
        }
    }

    /// Whether the event involves the given participant, including
    /// either side of a proximity pair and gesture targets.
    pub fn involves(&self, id: &ParticipantId) -> bool {
        match self {
            Self::Proximity { a, b, .. } => a == id || b == id,
            Self::Gesture {
                participant,
                target,
                ..
            } => participant == id || target.as_ref() == Some(id),
            _ => self.participant() == Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn chat_event_serializes_with_flat_type_tag() {
        let event = Event {
            sequence: 3,
            timestamp: Utc::now(),
            kind: EventKind::Chat {
                participant: ParticipantId::new("alice"),
                text: "hello".to_owned(),
                moderation: ModerationResult::clean(),
            },
        };
        let value = serde_json::to_value(&event).unwrap_or_default();
        assert_eq!(value.get("type").and_then(|v| v.as_str()), Some("chat"));
        assert_eq!(value.get("sequence").and_then(serde_json::Value::as_u64), Some(3));
        assert_eq!(value.get("text").and_then(|v| v.as_str()), Some("hello"));
    }

    #[test]
    fn proximity_has_no_primary_participant() {
        let kind = EventKind::Proximity {
            a: ParticipantId::new("a"),
            b: ParticipantId::new("b"),
            distance: 1.5,
        };
        assert!(kind.participant().is_none());
    }

    #[test]
    fn event_round_trips_through_json() {
        let event = Event {
            sequence: 1,
            timestamp: Utc::now(),
            kind: EventKind::Gesture {
                participant: ParticipantId::new("wei"),
                gesture: "thumbs_up".to_owned(),
                target: Some(ParticipantId::new("hans")),
            },
        };
        let json = serde_json::to_string(&event).unwrap_or_default();
        let parsed: Result<Event, _> = serde_json::from_str(&json);
        assert_eq!(parsed.ok(), Some(event));
    }
}
