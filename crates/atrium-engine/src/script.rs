//! The scripted demo session.
//!
//! Drives a full multilingual meeting through the room engine: seven
//! participants in seven languages join, exchange gestures, move into
//! proximity of each other, and chat (one message trips the moderation
//! filter). The whole session is recorded, saved to disk, and
//! summarized into meeting notes. After every step the dashboard
//! snapshot is refreshed so connected clients watch the session unfold.

use std::path::PathBuf;
use std::time::Duration;

use atrium_notes::NotesSynthesizer;
use atrium_observer::state::AppState;
use atrium_recorder::{FileSink, save, summarize_moderation};
use atrium_room::Room;
use atrium_types::{Language, ParticipantId, Position};
use tracing::info;

use crate::error::EngineError;

/// The demo roster: id, display name, language, starting position.
const ROSTER: [(&str, &str, Language, f64, f64, f64); 7] = [
    ("alice", "Alice", Language::English, -4.0, 0.0, 0.0),
    ("mehmet", "Mehmet", Language::Turkish, 4.0, 0.0, 0.0),
    ("carlos", "Carlos", Language::Spanish, 0.0, 0.0, -4.0),
    ("marie", "Marie", Language::French, -2.0, 0.0, 2.0),
    ("hans", "Hans", Language::German, 2.0, 0.0, 2.0),
    ("giulia", "Giulia", Language::Italian, -4.0, 0.0, 4.0),
    ("wei", "Wei", Language::Chinese, 4.0, 0.0, -4.0),
];

/// One gesture per participant, in roster order.
const GESTURES: [(&str, &str); 7] = [
    ("alice", "wave"),
    ("mehmet", "thumbs_up"),
    ("carlos", "clap"),
    ("marie", "peace"),
    ("hans", "point"),
    ("giulia", "wave"),
    ("wei", "thumbs_up"),
];

/// Moves that bring participants within the proximity threshold.
const MOVES: [(&str, f64, f64, f64); 3] = [
    ("mehmet", 1.0, 0.0, 0.0),
    ("marie", 0.0, 0.0, 0.0),
    ("wei", 2.0, 0.0, -1.0),
];

/// Chat lines; Hans's message trips the moderation filter.
const CHATS: [(&str, &str); 4] = [
    ("alice", "I will draft the English UI copy by Thursday"),
    ("mehmet", "need to validate the Turkish date and time formats"),
    ("hans", "the current layout is stupid, the German text overflows"),
    ("wei", "todo: confirm Chinese character rendering in the headset"),
];

/// Run the scripted session against the given room.
///
/// Records the whole session, saves it under `output_dir`, synthesizes
/// meeting notes into the dashboard snapshot, and closes the room.
/// `step_delay` paces the script so dashboard clients can follow along;
/// tests pass [`Duration::ZERO`].
///
/// Returns the path the recording was saved to.
///
/// # Errors
///
/// Propagates any rejected room operation, recorder misuse, or save
/// failure. The script only issues valid operations, so an error here
/// is a bug, not an expected outcome.
pub async fn run_session(
    room: &mut Room,
    state: &AppState,
    output_dir: PathBuf,
    step_delay: Duration,
) -> Result<PathBuf, EngineError> {
    room.start_recording()?;
    info!("recording started, session script begins");

    for (id, name, language, x, y, z) in ROSTER {
        room.join(
            ParticipantId::new(id),
            name,
            language,
            Position::new(x, y, z),
        )?;
        refresh_dashboard(room, state).await;
        tokio::time::sleep(step_delay).await;
    }
    info!(participants = room.participant_count(), "roster joined");

    for (id, gesture) in GESTURES {
        room.gesture(&ParticipantId::new(id), gesture, None)?;
        refresh_dashboard(room, state).await;
        tokio::time::sleep(step_delay).await;
    }

    for (id, x, y, z) in MOVES {
        let events = room.move_to(&ParticipantId::new(id), Position::new(x, y, z))?;
        if events.len() > 1 {
            info!(
                participant = id,
                crossings = events.len().saturating_sub(1),
                "proximity crossings"
            );
        }
        refresh_dashboard(room, state).await;
        tokio::time::sleep(step_delay).await;
    }

    for (id, text) in CHATS {
        room.chat(&ParticipantId::new(id), text)?;
        refresh_dashboard(room, state).await;
        tokio::time::sleep(step_delay).await;
    }

    // Finalize in memory first; the file write happens outside any
    // room interaction so slow disks never stall the session.
    let recording = room.stop_recording()?;
    let sink = FileSink::new(output_dir);
    let path = save(&recording, &sink)?;

    let notes = NotesSynthesizer::default().synthesize(&recording);
    info!(
        topics = notes.topics.len(),
        action_items = notes.action_items.len(),
        languages = notes.language_breakdown.len(),
        "meeting notes synthesized"
    );

    room.close();
    refresh_dashboard(room, state).await;
    {
        let mut snap = state.snapshot.write().await;
        snap.notes = Some(notes);
    }

    info!(
        events = room.events().len(),
        recording = %path.display(),
        "session script complete"
    );
    Ok(path)
}

/// Refresh the dashboard snapshot from the room's current state.
async fn refresh_dashboard(room: &Room, state: &AppState) {
    let mut snap = state.snapshot.write().await;
    snap.room = Some(room.snapshot());
    snap.events = room.events().to_vec();
    snap.moderation = summarize_moderation(room.events());
    snap.recording_active = room.is_recording();
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use atrium_observer::ChannelGateway;
    use atrium_recorder::SessionRecorder;
    use atrium_room::{ModerationFilter, SessionConfig, SystemClock};
    use atrium_types::EventKind;

    use super::*;

    fn make_room(state: &Arc<AppState>) -> Room {
        let config = SessionConfig::default();
        Room::new(
            &config,
            ModerationFilter::new(
                &config.moderation.terms,
                config.moderation.toxicity_threshold,
            ),
            SessionRecorder::new(),
            Arc::new(SystemClock),
            Arc::new(ChannelGateway::new(Arc::clone(state))),
        )
    }

    #[tokio::test]
    async fn full_session_runs_to_completion() {
        let state = Arc::new(AppState::new());
        let mut room = make_room(&state);
        let dir = tempfile::tempdir().ok();
        assert!(dir.is_some());
        if let Some(dir) = dir {
            let path = run_session(
                &mut room,
                &state,
                dir.path().to_path_buf(),
                Duration::ZERO,
            )
            .await;
            assert!(path.is_ok());
            if let Ok(path) = path {
                assert!(path.exists());
            }

            // Room ran the whole script and was closed at the end.
            assert!(!room.is_open());
            assert_eq!(room.participant_count(), 7);
            assert!(
                room.events()
                    .iter()
                    .any(|e| matches!(e.kind, EventKind::Proximity { .. }))
            );

            let snap = state.snapshot.read().await;
            assert_eq!(snap.events.len(), room.events().len());
            assert_eq!(snap.moderation.flagged_messages, 1);
            assert!(!snap.recording_active);
            let languages = snap
                .notes
                .as_ref()
                .map(|n| n.language_breakdown.len())
                .unwrap_or_default();
            assert_eq!(languages, 7);
        }
    }
}
