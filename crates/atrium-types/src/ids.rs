//! Typed identifier wrappers for rooms, participants, and recordings.
//!
//! Room and participant identifiers are caller-supplied strings (the
//! transport layer hands them to us verbatim), so they wrap [`String`]
//! rather than a generated UUID. Wrapping them in distinct newtypes
//! prevents accidental mixing at compile time. Recording identifiers
//! are generated app-side and use UUID v7 (time-ordered) so saved
//! files sort chronologically.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around [`String`] with standard derives.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub String);

        impl $name {
            /// Create a new identifier from anything string-like.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

define_string_id! {
    /// Unique identifier for a meeting room (one per session).
    RoomId
}

define_string_id! {
    /// Identifier for a participant, unique within a room.
    ParticipantId
}

/// Unique identifier for a finalized session recording.
///
/// Uses UUID v7 (time-ordered) so recordings sort by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RecordingId(pub Uuid);

impl RecordingId {
    /// Create a new recording identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for RecordingId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for RecordingId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
