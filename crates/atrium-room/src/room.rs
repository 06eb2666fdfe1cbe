//! The authoritative state engine for one meeting session.
//!
//! A [`Room`] owns the participant map, the append-only event log, and
//! the proximity edge-trigger state. Every mutating operation either
//! fails up front (leaving all state untouched) or appends one or more
//! events; each appended event is forwarded to the session recorder and
//! pushed through the broadcast gateway.
//!
//! The room itself performs no I/O and holds no locks: callers that
//! share a room across tasks serialize access externally (one logical
//! owner per room), which keeps sequence numbers strictly increasing
//! and lets proximity edge-triggering see a consistent prior state.

use std::collections::BTreeMap;
use std::sync::Arc;

use atrium_recorder::{RecorderError, SessionRecorder};
use atrium_types::{
    Event, EventKind, Language, Participant, ParticipantId, Position, Recording, RoomId,
    RoomMetadata, RoomSnapshot,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::config::SessionConfig;
use crate::error::RoomError;
use crate::gateway::BroadcastGateway;
use crate::geometry;
use crate::gestures::GestureCatalog;
use crate::moderation::ModerationFilter;
use crate::proximity::ProximityTracker;

/// Live state of one meeting session.
///
/// Created once per session with its collaborators injected; destroyed
/// by an explicit [`Room::close`], after which only reads remain valid.
pub struct Room {
    /// Room identifier.
    id: RoomId,
    /// Human-readable title.
    title: String,
    /// Distance below which two participants count as nearby.
    proximity_threshold: f64,
    /// Whether mutating operations are still accepted.
    open: bool,
    /// When the session started (clock time at construction).
    started_at: DateTime<Utc>,
    /// Current participants keyed by id.
    participants: BTreeMap<ParticipantId, Participant>,
    /// Participant ids in join order (only current members).
    join_order: Vec<ParticipantId>,
    /// Append-only event log for the session.
    event_log: Vec<Event>,
    /// Sequence number of the most recently emitted event.
    next_sequence: u64,
    /// Edge-trigger state for pairwise proximity.
    proximity: ProximityTracker,
    /// Gesture catalog (from configuration).
    catalog: GestureCatalog,
    /// Chat moderation filter.
    filter: ModerationFilter,
    /// Event recorder fed by every emission.
    recorder: SessionRecorder,
    /// Time source for event timestamps.
    clock: Arc<dyn Clock>,
    /// Best-effort push channel toward the dashboard.
    gateway: Arc<dyn BroadcastGateway>,
}

impl core::fmt::Debug for Room {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Room")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("open", &self.open)
            .field("participants", &self.participants.len())
            .field("events", &self.event_log.len())
            .finish_non_exhaustive()
    }
}

impl Room {
    /// Create an open, empty room.
    ///
    /// Identity, proximity threshold, and gesture catalog come from the
    /// configuration; the moderation filter, recorder, clock, and
    /// gateway are injected so there are no hidden singletons.
    pub fn new(
        config: &SessionConfig,
        filter: ModerationFilter,
        recorder: SessionRecorder,
        clock: Arc<dyn Clock>,
        gateway: Arc<dyn BroadcastGateway>,
    ) -> Self {
        let started_at = clock.now();
        Self {
            id: RoomId::new(config.room.id.clone()),
            title: config.room.title.clone(),
            proximity_threshold: config.room.proximity_threshold,
            open: true,
            started_at,
            participants: BTreeMap::new(),
            join_order: Vec::new(),
            event_log: Vec::new(),
            next_sequence: 0,
            proximity: ProximityTracker::new(),
            catalog: GestureCatalog::from_names(&config.gestures.catalog),
            filter,
            recorder,
            clock,
            gateway,
        }
    }

    // -----------------------------------------------------------------
    // Mutating operations
    // -----------------------------------------------------------------

    /// Add a participant to the room.
    ///
    /// Appends a `Join` event, then runs a full proximity scan of the
    /// newcomer against every existing participant (crossings append
    /// `Proximity` events). Returns the `Join` event.
    ///
    /// # Errors
    ///
    /// Returns [`RoomError::DuplicateId`] if the id is already present,
    /// or [`RoomError::RoomClosed`] if the room is closed.
    pub fn join(
        &mut self,
        id: ParticipantId,
        display_name: impl Into<String>,
        language: Language,
        position: Position,
    ) -> Result<Event, RoomError> {
        self.ensure_open()?;
        if self.participants.contains_key(&id) {
            return Err(RoomError::DuplicateId(id));
        }
        // Worst case this call emits one Join plus one Proximity per
        // existing participant; reject up front rather than mid-way.
        self.ensure_sequence_capacity(self.participant_count_u64().saturating_add(1))?;

        let participant = Participant {
            id: id.clone(),
            display_name: display_name.into(),
            language,
            position,
            is_speaking: false,
            is_muted: false,
            joined_at: self.clock.now(),
        };
        info!(room = %self.id, participant = %id, language = %language, "participant joined");
        self.participants.insert(id.clone(), participant);
        self.join_order.push(id.clone());

        let join_event = self.emit(EventKind::Join {
            participant: id.clone(),
        })?;
        self.scan_proximity(&id, position)?;
        Ok(join_event)
    }

    /// Remove a participant from the room.
    ///
    /// Appends a `Leave` event and drops all proximity state involving
    /// the leaver, so later scans ignore them.
    ///
    /// # Errors
    ///
    /// Returns [`RoomError::UnknownParticipant`] if the id is absent,
    /// or [`RoomError::RoomClosed`] if the room is closed.
    pub fn leave(&mut self, id: &ParticipantId) -> Result<Event, RoomError> {
        self.ensure_open()?;
        if !self.participants.contains_key(id) {
            return Err(RoomError::UnknownParticipant(id.clone()));
        }
        self.ensure_sequence_capacity(1)?;

        self.participants.remove(id);
        self.join_order.retain(|p| p != id);
        self.proximity.forget(id);
        info!(room = %self.id, participant = %id, "participant left");
        self.emit(EventKind::Leave {
            participant: id.clone(),
        })
    }

    /// Move a participant to a new position.
    ///
    /// Appends a `Move` event, then re-scans only the moved participant
    /// against all others (O(n) per move). Each pair whose distance
    /// crosses below the threshold appends one `Proximity` event.
    /// Returns the `Move` event followed by any `Proximity` events.
    ///
    /// # Errors
    ///
    /// Returns [`RoomError::UnknownParticipant`] if the id is absent,
    /// or [`RoomError::RoomClosed`] if the room is closed.
    pub fn move_to(
        &mut self,
        id: &ParticipantId,
        position: Position,
    ) -> Result<Vec<Event>, RoomError> {
        self.ensure_open()?;
        if !self.participants.contains_key(id) {
            return Err(RoomError::UnknownParticipant(id.clone()));
        }
        self.ensure_sequence_capacity(self.participant_count_u64())?;

        if let Some(participant) = self.participants.get_mut(id) {
            participant.position = position;
        }
        let move_event = self.emit(EventKind::Move {
            participant: id.clone(),
            position,
        })?;

        let mut events = vec![move_event];
        events.extend(self.scan_proximity(id, position)?);
        Ok(events)
    }

    /// Record a gesture performed by a participant.
    ///
    /// The gesture name is normalized (trimmed, lowercased) and checked
    /// against the catalog. No state changes besides the event.
    ///
    /// # Errors
    ///
    /// Returns [`RoomError::UnknownGesture`] for names outside the
    /// catalog, [`RoomError::UnknownParticipant`] for a bad actor or
    /// target id, or [`RoomError::RoomClosed`] if the room is closed.
    pub fn gesture(
        &mut self,
        id: &ParticipantId,
        gesture: &str,
        target: Option<&ParticipantId>,
    ) -> Result<Event, RoomError> {
        self.ensure_open()?;
        if !self.participants.contains_key(id) {
            return Err(RoomError::UnknownParticipant(id.clone()));
        }
        if let Some(target_id) = target {
            if !self.participants.contains_key(target_id) {
                return Err(RoomError::UnknownParticipant(target_id.clone()));
            }
        }
        let name = self
            .catalog
            .normalize(gesture)
            .ok_or_else(|| RoomError::UnknownGesture(gesture.to_owned()))?;
        self.ensure_sequence_capacity(1)?;

        debug!(room = %self.id, participant = %id, gesture = %name, "gesture performed");
        self.emit(EventKind::Gesture {
            participant: id.clone(),
            gesture: name,
            target: target.cloned(),
        })
    }

    /// Deliver a chat message.
    ///
    /// The message is classified by the moderation filter and the
    /// result rides on the event; moderation only flags, it never
    /// blocks delivery or alters the text.
    ///
    /// # Errors
    ///
    /// Returns [`RoomError::UnknownParticipant`] if the id is absent,
    /// or [`RoomError::RoomClosed`] if the room is closed.
    pub fn chat(&mut self, id: &ParticipantId, text: &str) -> Result<Event, RoomError> {
        self.ensure_open()?;
        if !self.participants.contains_key(id) {
            return Err(RoomError::UnknownParticipant(id.clone()));
        }
        self.ensure_sequence_capacity(1)?;

        let moderation = self.filter.classify(text);
        if moderation.is_toxic {
            warn!(
                room = %self.id,
                participant = %id,
                severity = moderation.severity,
                terms = ?moderation.matched_terms,
                "toxic message flagged"
            );
        }
        self.emit(EventKind::Chat {
            participant: id.clone(),
            text: text.to_owned(),
            moderation,
        })
    }

    /// Set a participant's speaking flag.
    ///
    /// State-only: observable through snapshots, no event is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`RoomError::UnknownParticipant`] if the id is absent,
    /// or [`RoomError::RoomClosed`] if the room is closed.
    pub fn set_speaking(&mut self, id: &ParticipantId, speaking: bool) -> Result<(), RoomError> {
        self.ensure_open()?;
        let participant = self
            .participants
            .get_mut(id)
            .ok_or_else(|| RoomError::UnknownParticipant(id.clone()))?;
        participant.is_speaking = speaking;
        Ok(())
    }

    /// Set a participant's mute flag.
    ///
    /// State-only: observable through snapshots, no event is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`RoomError::UnknownParticipant`] if the id is absent,
    /// or [`RoomError::RoomClosed`] if the room is closed.
    pub fn set_muted(&mut self, id: &ParticipantId, muted: bool) -> Result<(), RoomError> {
        self.ensure_open()?;
        let participant = self
            .participants
            .get_mut(id)
            .ok_or_else(|| RoomError::UnknownParticipant(id.clone()))?;
        participant.is_muted = muted;
        Ok(())
    }

    /// Close the room.
    ///
    /// All subsequent mutating operations fail with
    /// [`RoomError::RoomClosed`]; snapshots and event reads stay valid.
    /// Closing an already-closed room is a no-op.
    pub fn close(&mut self) {
        if self.open {
            info!(room = %self.id, events = self.event_log.len(), "room closed");
        }
        self.open = false;
    }

    // -----------------------------------------------------------------
    // Recording
    // -----------------------------------------------------------------

    /// Begin recording the event stream.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::AlreadyRecording`] if already active.
    pub fn start_recording(&mut self) -> Result<(), RecorderError> {
        self.recorder.start()
    }

    /// Finalize the active recording into an immutable
    /// [`Recording`], stamped with the current room metadata.
    ///
    /// Saving the returned value performs I/O and should happen outside
    /// whatever lock serializes this room.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::NotRecording`] if no recording is
    /// active.
    pub fn stop_recording(&mut self) -> Result<Recording, RecorderError> {
        let metadata = self.metadata_snapshot();
        self.recorder.stop(metadata)
    }

    /// Whether a recording is currently active.
    pub const fn is_recording(&self) -> bool {
        self.recorder.is_recording()
    }

    // -----------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------

    /// The room's identifier.
    pub const fn id(&self) -> &RoomId {
        &self.id
    }

    /// The room's human-readable title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the room still accepts mutating operations.
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Number of participants currently in the room.
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Look up a participant by id.
    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.get(id)
    }

    /// The append-only event log, in emission order.
    pub fn events(&self) -> &[Event] {
        &self.event_log
    }

    /// Sequence number of the most recently emitted event (0 if none).
    pub const fn last_sequence(&self) -> u64 {
        self.next_sequence
    }

    /// Read-only copy of the room's current state.
    ///
    /// Valid after close; participants appear in join order.
    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            room_id: self.id.clone(),
            title: self.title.clone(),
            is_open: self.open,
            participants: self
                .join_order
                .iter()
                .filter_map(|id| self.participants.get(id).cloned())
                .collect(),
        }
    }

    /// Room identity snapshot used for recording metadata.
    pub fn metadata_snapshot(&self) -> RoomMetadata {
        RoomMetadata {
            room_id: self.id.clone(),
            title: self.title.clone(),
            started_at: self.started_at,
            ended_at: self.clock.now(),
            participants: self
                .join_order
                .iter()
                .filter_map(|id| self.participants.get(id).map(Participant::profile))
                .collect(),
        }
    }

    // -----------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------

    /// Reject the call if the room is closed.
    fn ensure_open(&self) -> Result<(), RoomError> {
        if self.open {
            Ok(())
        } else {
            Err(RoomError::RoomClosed(self.id.clone()))
        }
    }

    /// Reject the call if emitting `needed` more events would overflow
    /// the sequence counter. Checked before any mutation so a failing
    /// call is all-or-nothing.
    fn ensure_sequence_capacity(&self, needed: u64) -> Result<(), RoomError> {
        self.next_sequence
            .checked_add(needed)
            .map(|_| ())
            .ok_or_else(|| RoomError::SequenceOverflow(self.id.clone()))
    }

    /// Current participant count widened for sequence math.
    fn participant_count_u64(&self) -> u64 {
        u64::try_from(self.participants.len()).unwrap_or(u64::MAX)
    }

    /// Append an event to the log, forward it to the recorder, and push
    /// it through the gateway (best-effort).
    fn emit(&mut self, kind: EventKind) -> Result<Event, RoomError> {
        let sequence = self
            .next_sequence
            .checked_add(1)
            .ok_or_else(|| RoomError::SequenceOverflow(self.id.clone()))?;
        self.next_sequence = sequence;
        let event = Event {
            sequence,
            timestamp: self.clock.now(),
            kind,
        };
        self.event_log.push(event.clone());
        self.recorder.record(&event);
        self.gateway.publish(&self.id, &event);
        Ok(event)
    }

    /// Re-scan one participant against all others and emit a
    /// `Proximity` event for each fresh below-threshold crossing.
    fn scan_proximity(
        &mut self,
        id: &ParticipantId,
        position: Position,
    ) -> Result<Vec<Event>, RoomError> {
        let observations: Vec<(ParticipantId, f64)> = self
            .participants
            .iter()
            .filter(|(other_id, _)| *other_id != id)
            .map(|(other_id, other)| {
                (other_id.clone(), geometry::distance(position, other.position))
            })
            .collect();

        let mut events = Vec::new();
        for (other_id, dist) in observations {
            if self
                .proximity
                .observe(id, &other_id, dist, self.proximity_threshold)
            {
                debug!(room = %self.id, a = %id, b = %other_id, distance = dist, "proximity crossing");
                events.push(self.emit(EventKind::Proximity {
                    a: id.clone(),
                    b: other_id,
                    distance: dist,
                })?);
            }
        }
        Ok(events)
    }
}
