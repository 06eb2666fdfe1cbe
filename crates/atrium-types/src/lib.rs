//! Shared type definitions for the Atrium meeting-room engine.
//!
//! This crate is the single source of truth for all types used across the
//! Atrium workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the live dashboard.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe wrappers for room, participant, and recording identifiers
//! - [`enums`] -- Enumeration types (languages, severity bands)
//! - [`events`] -- The closed event set emitted by a room
//! - [`structs`] -- Core entity structs (participants, recordings, summaries)

pub mod enums;
pub mod events;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Language, SeverityBand};
pub use events::{Event, EventKind};
pub use ids::{ParticipantId, RecordingId, RoomId};
pub use structs::{
    ModerationResult, ModerationSummary, NotesSummary, Participant, ParticipantProfile, Position,
    Recording, RoomMetadata, RoomSnapshot,
};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::RoomId::export_all();
        let _ = crate::ids::ParticipantId::export_all();
        let _ = crate::ids::RecordingId::export_all();

        // Enums
        let _ = crate::enums::Language::export_all();
        let _ = crate::enums::SeverityBand::export_all();

        // Events
        let _ = crate::events::Event::export_all();
        let _ = crate::events::EventKind::export_all();

        // Structs
        let _ = crate::structs::Position::export_all();
        let _ = crate::structs::Participant::export_all();
        let _ = crate::structs::ParticipantProfile::export_all();
        let _ = crate::structs::ModerationResult::export_all();
        let _ = crate::structs::ModerationSummary::export_all();
        let _ = crate::structs::RoomMetadata::export_all();
        let _ = crate::structs::Recording::export_all();
        let _ = crate::structs::NotesSummary::export_all();
        let _ = crate::structs::RoomSnapshot::export_all();
    }
}
