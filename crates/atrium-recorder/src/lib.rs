//! Session recording for the Atrium meeting-room engine.
//!
//! A room forwards every event it emits to a [`SessionRecorder`]. While
//! a recording is active the recorder buffers events in memory; `stop()`
//! finalizes the buffer into an immutable [`Recording`](atrium_types::Recording)
//! that always carries room metadata, even when no events were captured.
//! Persistence goes through the [`RecordingSink`] trait; the bundled
//! [`FileSink`] writes one JSON file per session.
//!
//! Saving performs I/O and is expected to run outside the room's
//! critical section: finalize first (cheap, in-memory), then hand the
//! owned [`Recording`](atrium_types::Recording) to [`save`].

pub mod error;
pub mod recorder;
pub mod sink;

// Re-export primary types at crate root.
pub use error::RecorderError;
pub use recorder::{SessionRecorder, summarize_moderation};
pub use sink::{FileSink, RecordingSink, save};
