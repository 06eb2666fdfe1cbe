//! In-memory event buffering for session recordings.
//!
//! The recorder subscribes to a room's event stream: the room forwards
//! every emitted event unconditionally, and [`SessionRecorder::record`]
//! is a silent no-op while no recording is active, so the room never
//! branches on recorder state.
//!
//! `stop()` finalizes the buffer into an immutable
//! [`Recording`] together with the room metadata supplied by the
//! caller. A recording with zero events is valid: it still carries the
//! metadata, so there is always something meaningful to save.

use atrium_types::{Event, EventKind, ModerationSummary, Recording, RecordingId, RoomMetadata, SeverityBand};

use crate::error::RecorderError;

/// Buffers room events while active and finalizes them into a
/// [`Recording`] on demand.
#[derive(Debug, Default)]
pub struct SessionRecorder {
    /// Whether events are currently being buffered.
    active: bool,
    /// Events captured since `start()`, in emission order.
    buffer: Vec<Event>,
}

impl SessionRecorder {
    /// Create an inactive recorder with an empty buffer.
    pub const fn new() -> Self {
        Self {
            active: false,
            buffer: Vec::new(),
        }
    }

    /// Whether a recording is currently active.
    pub const fn is_recording(&self) -> bool {
        self.active
    }

    /// Number of events buffered so far.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Begin buffering events.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::AlreadyRecording`] if a recording is
    /// already active. Calling `start()` twice is a programmer error
    /// and is rejected, not ignored.
    pub fn start(&mut self) -> Result<(), RecorderError> {
        if self.active {
            return Err(RecorderError::AlreadyRecording);
        }
        self.active = true;
        tracing::debug!("recording started");
        Ok(())
    }

    /// Append an event to the transcript buffer.
    ///
    /// No-op while inactive, so callers can forward events
    /// unconditionally.
    pub fn record(&mut self, event: &Event) {
        if self.active {
            self.buffer.push(event.clone());
        }
    }

    /// Finalize the buffer into an immutable [`Recording`].
    ///
    /// The caller supplies the room metadata snapshot; the recorder
    /// aggregates the moderation summary from the buffered transcript.
    /// After `stop()` the recorder is inactive with an empty buffer and
    /// can be started again for a new recording.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::NotRecording`] if no recording is
    /// active.
    pub fn stop(&mut self, metadata: RoomMetadata) -> Result<Recording, RecorderError> {
        if !self.active {
            return Err(RecorderError::NotRecording);
        }
        self.active = false;
        let transcript = core::mem::take(&mut self.buffer);
        let moderation = summarize_moderation(&transcript);
        tracing::info!(
            room = %metadata.room_id,
            events = transcript.len(),
            flagged = moderation.flagged_messages,
            "recording finalized"
        );
        Ok(Recording {
            id: RecordingId::new(),
            metadata,
            transcript,
            moderation,
        })
    }
}

/// Aggregate chat moderation results over a transcript.
///
/// Counts use saturating arithmetic; a transcript long enough to
/// saturate a `u32` is far beyond a single meeting session.
pub fn summarize_moderation(transcript: &[Event]) -> ModerationSummary {
    let mut summary = ModerationSummary::default();
    for event in transcript {
        if let EventKind::Chat { moderation, .. } = &event.kind {
            summary.total_messages = summary.total_messages.saturating_add(1);
            if moderation.is_toxic {
                summary.flagged_messages = summary.flagged_messages.saturating_add(1);
                let band = SeverityBand::from_severity(moderation.severity);
                let count = summary.by_band.entry(band).or_insert(0);
                *count = count.saturating_add(1);
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use atrium_types::{Language, ModerationResult, ParticipantId, ParticipantProfile, RoomId};
    use chrono::Utc;

    use super::*;

    fn make_metadata() -> RoomMetadata {
        RoomMetadata {
            room_id: RoomId::new("kickoff"),
            title: "Kickoff".to_owned(),
            started_at: Utc::now(),
            ended_at: Utc::now(),
            participants: vec![ParticipantProfile {
                id: ParticipantId::new("alice"),
                display_name: "Alice".to_owned(),
                language: Language::English,
            }],
        }
    }

    fn chat_event(sequence: u64, toxic: bool, severity: f64) -> Event {
        Event {
            sequence,
            timestamp: Utc::now(),
            kind: EventKind::Chat {
                participant: ParticipantId::new("alice"),
                text: "hi".to_owned(),
                moderation: ModerationResult {
                    is_toxic: toxic,
                    severity,
                    matched_terms: Vec::new(),
                },
            },
        }
    }

    #[test]
    fn double_start_is_rejected() {
        let mut recorder = SessionRecorder::new();
        assert!(recorder.start().is_ok());
        assert!(matches!(
            recorder.start(),
            Err(RecorderError::AlreadyRecording)
        ));
    }

    #[test]
    fn stop_without_start_is_rejected() {
        let mut recorder = SessionRecorder::new();
        assert!(matches!(
            recorder.stop(make_metadata()),
            Err(RecorderError::NotRecording)
        ));
    }

    #[test]
    fn record_is_noop_while_inactive() {
        let mut recorder = SessionRecorder::new();
        recorder.record(&chat_event(1, false, 0.0));
        assert_eq!(recorder.buffered(), 0);
    }

    #[test]
    fn empty_recording_still_carries_metadata() {
        // Regression test for the "no data to save" failure mode.
        let mut recorder = SessionRecorder::new();
        let _ = recorder.start();
        let recording = recorder.stop(make_metadata());
        assert!(recording.is_ok());
        if let Ok(recording) = recording {
            assert!(recording.transcript.is_empty());
            assert_eq!(recording.metadata.room_id.as_str(), "kickoff");
            assert_eq!(recording.moderation.total_messages, 0);
        }
    }

    #[test]
    fn stop_resets_for_a_new_recording() {
        let mut recorder = SessionRecorder::new();
        let _ = recorder.start();
        recorder.record(&chat_event(1, false, 0.0));
        let first = recorder.stop(make_metadata()).ok();
        assert_eq!(first.map(|r| r.transcript.len()), Some(1));

        assert!(recorder.start().is_ok());
        assert_eq!(recorder.buffered(), 0);
    }

    #[test]
    fn moderation_summary_buckets_by_band() {
        let mut recorder = SessionRecorder::new();
        let _ = recorder.start();
        recorder.record(&chat_event(1, false, 0.0));
        recorder.record(&chat_event(2, true, 0.8));
        recorder.record(&chat_event(3, true, 0.5));
        let recording = recorder.stop(make_metadata()).ok();
        let summary = recording.map(|r| r.moderation).unwrap_or_default();
        assert_eq!(summary.total_messages, 3);
        assert_eq!(summary.flagged_messages, 2);
        assert_eq!(summary.by_band.get(&SeverityBand::High).copied(), Some(1));
        assert_eq!(summary.by_band.get(&SeverityBand::Medium).copied(), Some(1));
    }
}
