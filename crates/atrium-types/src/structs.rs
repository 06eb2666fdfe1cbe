//! Core data structures for rooms, participants, and derived artifacts.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Language, SeverityBand};
use crate::events::Event;
use crate::ids::{ParticipantId, RecordingId, RoomId};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A point in the room's 3D space.
///
/// Coordinates are real-valued distance units; the dashboard projects
/// `x`/`z` onto its top-down canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Position {
    /// Left-right axis.
    pub x: f64,
    /// Vertical axis.
    pub y: f64,
    /// Depth axis.
    pub z: f64,
}

impl Position {
    /// Create a position from its coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

// ---------------------------------------------------------------------------
// Participant
// ---------------------------------------------------------------------------

/// Per-user state inside a room.
///
/// Mutated only through [`Room`] operations; created on join, removed
/// on leave. The room hands out clones in snapshots, never references
/// into its own map.
///
/// [`Room`]: https://docs.rs/atrium-room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Participant {
    /// Identifier, unique within the room.
    pub id: ParticipantId,
    /// Human-readable display name.
    pub display_name: String,
    /// Preferred language.
    pub language: Language,
    /// Current position in the room.
    pub position: Position,
    /// Whether the participant is currently speaking.
    pub is_speaking: bool,
    /// Whether the participant is muted.
    pub is_muted: bool,
    /// When the participant joined the room.
    pub joined_at: DateTime<Utc>,
}

impl Participant {
    /// Return the identity profile for this participant.
    pub fn profile(&self) -> ParticipantProfile {
        ParticipantProfile {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
            language: self.language,
        }
    }
}

/// Immutable identity subset of a participant, kept in recording
/// metadata after the live state is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ParticipantProfile {
    /// Identifier, unique within the room.
    pub id: ParticipantId,
    /// Human-readable display name.
    pub display_name: String,
    /// Preferred language.
    pub language: Language,
}

// ---------------------------------------------------------------------------
// Moderation
// ---------------------------------------------------------------------------

/// Classification attached to every chat event.
///
/// Moderation never mutates or blocks the message; it only flags it for
/// downstream consumers (warn, mute) to act on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ModerationResult {
    /// Whether any matched term met the configured toxicity threshold.
    pub is_toxic: bool,
    /// Highest severity among matched terms, in `[0, 1]`. Zero when
    /// nothing matched.
    pub severity: f64,
    /// Matched terms, in the order they appear in the term table.
    pub matched_terms: Vec<String>,
}

impl ModerationResult {
    /// A result with no matches (the classification of benign text).
    pub const fn clean() -> Self {
        Self {
            is_toxic: false,
            severity: 0.0,
            matched_terms: Vec::new(),
        }
    }
}

/// Aggregated moderation counts for a finalized recording.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ModerationSummary {
    /// Total chat messages in the transcript.
    pub total_messages: u32,
    /// Messages classified as toxic.
    pub flagged_messages: u32,
    /// Flagged-message counts bucketed by severity band.
    pub by_band: BTreeMap<SeverityBand, u32>,
}

// ---------------------------------------------------------------------------
// Recording
// ---------------------------------------------------------------------------

/// Snapshot of a room's identity taken when a recording is finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RoomMetadata {
    /// The recorded room.
    pub room_id: RoomId,
    /// The room's human-readable title.
    pub title: String,
    /// When the session started.
    pub started_at: DateTime<Utc>,
    /// When the recording was finalized.
    pub ended_at: DateTime<Utc>,
    /// Final participant list (identity only, join order preserved).
    pub participants: Vec<ParticipantProfile>,
}

/// A finalized, immutable session recording.
///
/// Always carries room metadata, even when the transcript is empty, so
/// a recording with zero events still saves meaningfully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Recording {
    /// Unique recording identifier.
    pub id: RecordingId,
    /// Room identity at finalization time.
    pub metadata: RoomMetadata,
    /// The captured event transcript, in emission order.
    pub transcript: Vec<Event>,
    /// Aggregated moderation counts over the transcript.
    pub moderation: ModerationSummary,
}

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

/// Derived meeting summary computed from a [`Recording`].
///
/// Stateless and recomputable at any time; never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NotesSummary {
    /// Topics surfaced from the chat transcript.
    pub topics: BTreeSet<String>,
    /// Action items, in the order they were detected.
    pub action_items: Vec<String>,
    /// Participant count per language, from recording metadata.
    pub language_breakdown: BTreeMap<Language, u32>,
    /// When this summary was generated.
    pub generated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Room snapshot
// ---------------------------------------------------------------------------

/// Read-only copy of a room's current state.
///
/// Snapshots remain available after the room is closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RoomSnapshot {
    /// The room's identifier.
    pub room_id: RoomId,
    /// The room's human-readable title.
    pub title: String,
    /// Whether the room still accepts mutating operations.
    pub is_open: bool,
    /// Participants in join order.
    pub participants: Vec<Participant>,
}

impl RoomSnapshot {
    /// Distinct languages currently in use, in stable order.
    pub fn languages_in_use(&self) -> BTreeSet<Language> {
        self.participants.iter().map(|p| p.language).collect()
    }
}
