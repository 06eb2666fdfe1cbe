//! Durable sinks for finalized recordings.
//!
//! Persistence is kept behind the [`RecordingSink`] trait so the engine
//! core only knows "write this recording somewhere durable". The file
//! sink writes one pretty-printed JSON object per session, named after
//! the room and the save timestamp, into a pre-existing writable
//! directory.

use std::path::{Path, PathBuf};

use atrium_types::Recording;

use crate::error::RecorderError;

/// A durable destination for finalized recordings.
///
/// Implementations must not mutate the recording; a failed write leaves
/// the in-memory value untouched so the caller can retry.
pub trait RecordingSink: Send + Sync {
    /// Serialize and persist the recording.
    ///
    /// Returns the location the recording was written to.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::Io`] or [`RecorderError::Serialization`]
    /// verbatim; errors are never swallowed here.
    fn write(&self, recording: &Recording) -> Result<PathBuf, RecorderError>;
}

/// Serialize and persist a recording through the given sink.
///
/// Thin wrapper so call sites read as `save(&recording, &sink)`. The
/// recording stays in memory regardless of the outcome, so a failed
/// save can be retried without data loss.
///
/// # Errors
///
/// Propagates the sink's error verbatim.
pub fn save(recording: &Recording, sink: &dyn RecordingSink) -> Result<PathBuf, RecorderError> {
    sink.write(recording)
}

/// Writes recordings as JSON files into a directory.
///
/// File names follow `recording_<room>_<YYYYMMDD_HHMMSS>.json`, using
/// the recording's `ended_at` timestamp so a re-save of the same
/// recording is idempotent (same name, same content).
#[derive(Debug, Clone)]
pub struct FileSink {
    /// Target directory; must exist and be writable.
    dir: PathBuf,
}

impl FileSink {
    /// Create a sink targeting the given directory.
    ///
    /// The directory is an external, pre-existing location; it is not
    /// created here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this sink writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file name a recording will be saved under.
    fn file_name(recording: &Recording) -> String {
        format!(
            "recording_{}_{}.json",
            recording.metadata.room_id,
            recording.metadata.ended_at.format("%Y%m%d_%H%M%S")
        )
    }
}

impl RecordingSink for FileSink {
    fn write(&self, recording: &Recording) -> Result<PathBuf, RecorderError> {
        let path = self.dir.join(Self::file_name(recording));
        let json = serde_json::to_string_pretty(recording)?;
        std::fs::write(&path, json)?;
        tracing::info!(
            path = %path.display(),
            events = recording.transcript.len(),
            "recording saved"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use atrium_types::{
        Event, EventKind, ModerationSummary, ParticipantId, Recording, RecordingId, RoomId,
        RoomMetadata,
    };
    use chrono::Utc;

    use super::*;

    fn make_recording() -> Recording {
        Recording {
            id: RecordingId::new(),
            metadata: RoomMetadata {
                room_id: RoomId::new("standup"),
                title: "Standup".to_owned(),
                started_at: Utc::now(),
                ended_at: Utc::now(),
                participants: Vec::new(),
            },
            transcript: vec![Event {
                sequence: 1,
                timestamp: Utc::now(),
                kind: EventKind::Join {
                    participant: ParticipantId::new("alice"),
                },
            }],
            moderation: ModerationSummary::default(),
        }
    }

    #[test]
    fn file_sink_writes_parseable_json() {
        let dir = tempfile::tempdir().ok();
        assert!(dir.is_some());
        if let Some(dir) = dir {
            let sink = FileSink::new(dir.path());
            let recording = make_recording();
            let path = save(&recording, &sink);
            assert!(path.is_ok());
            if let Ok(path) = path {
                let contents = std::fs::read_to_string(path).unwrap_or_default();
                let parsed: Result<Recording, _> = serde_json::from_str(&contents);
                assert_eq!(parsed.ok(), Some(recording));
            }
        }
    }

    #[test]
    fn file_name_includes_room_and_timestamp() {
        let recording = make_recording();
        let name = FileSink::file_name(&recording);
        assert!(name.starts_with("recording_standup_"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn missing_directory_surfaces_io_error() {
        let sink = FileSink::new("/nonexistent/atrium/recordings");
        let err = sink.write(&make_recording());
        assert!(matches!(err, Err(RecorderError::Io { .. })));
    }
}
