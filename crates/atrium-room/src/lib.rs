//! Session state engine for the Atrium virtual meeting room.
//!
//! This crate owns the live state of one meeting session: who is in the
//! room, where they stand, which gestures and chat messages they send,
//! and which pairs of participants are currently near each other. Every
//! accepted operation appends typed events to an ordered log, feeding
//! the recorder and the dashboard gateway.
//!
//! # Modules
//!
//! - [`room`] -- The [`Room`] engine itself: join/leave/move, gestures,
//!   chat with moderation, snapshots, and recording control.
//! - [`proximity`] -- Edge-triggered tracking of participant pairs
//!   crossing below the proximity threshold.
//! - [`moderation`] -- Term-table chat classification behind a
//!   deterministic `classify` contract.
//! - [`gestures`] -- The configurable gesture catalog and name
//!   normalization.
//! - [`geometry`] -- Euclidean distance over 3D positions.
//! - [`config`] -- Typed YAML configuration for the whole session.
//! - [`clock`] -- The [`Clock`] seam for event timestamps.
//! - [`gateway`] -- The [`BroadcastGateway`] seam toward the dashboard.
//! - [`error`] -- Error types for room operations.
//!
//! # Architecture
//!
//! The room is a plain synchronous state machine with its collaborators
//! (filter, recorder, clock, gateway) injected at construction. Async
//! concerns live in the observer crate; the engine binary serializes
//! access to the room and drives it from its session script.
//!
//! [`Room`]: room::Room
//! [`Clock`]: clock::Clock
//! [`BroadcastGateway`]: gateway::BroadcastGateway

pub mod clock;
pub mod config;
pub mod error;
pub mod gateway;
pub mod geometry;
pub mod gestures;
pub mod moderation;
pub mod proximity;
pub mod room;

// Re-export primary types at crate root.
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, SessionConfig};
pub use error::RoomError;
pub use gateway::{BroadcastGateway, NullGateway};
pub use gestures::{DEFAULT_GESTURES, GestureCatalog};
pub use moderation::ModerationFilter;
pub use proximity::ProximityTracker;
pub use room::Room;
