//! REST API endpoint handlers for the dashboard server.
//!
//! All handlers read from the in-memory [`DashboardSnapshot`] via the
//! shared [`AppState`]; none of them touch the room itself.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/room` | Current room snapshot |
//! | `GET` | `/api/events` | Query the event log |
//! | `GET` | `/api/notes` | Latest synthesized meeting notes |
//! | `GET` | `/api/moderation` | Moderation summary and flagged messages |
//!
//! [`DashboardSnapshot`]: crate::state::DashboardSnapshot

use std::sync::Arc;

use atrium_types::{Event, EventKind, ParticipantId};
use axum::Json;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};

use crate::error::ObserverError;
use crate::state::AppState;

/// Event tag names accepted by the `kind` query parameter.
const EVENT_KINDS: [&str; 6] = ["join", "leave", "move", "gesture", "chat", "proximity"];

/// Default number of events returned by `GET /api/events`.
const DEFAULT_EVENT_LIMIT: usize = 100;

/// Hard cap on the number of events returned by `GET /api/events`.
const MAX_EVENT_LIMIT: usize = 1000;

/// Query parameters for the `GET /api/events` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct EventsQuery {
    /// Filter by event kind (`join`, `leave`, `move`, `gesture`,
    /// `chat`, `proximity`).
    pub kind: Option<String>,
    /// Filter by participant id (either side of a proximity pair and
    /// gesture targets count as involvement).
    pub participant: Option<String>,
    /// Maximum number of events to return (default 100, max 1000).
    pub limit: Option<usize>,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing session status and API links.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.snapshot.read().await;
    let (title, status, participant_count) = snapshot.room.as_ref().map_or_else(
        || (String::from("(no session)"), "WAITING", 0),
        |room| {
            (
                room.title.clone(),
                if room.is_open { "OPEN" } else { "CLOSED" },
                room.participants.len(),
            )
        },
    );
    let event_count = snapshot.events.len();
    let flagged = snapshot.moderation.flagged_messages;
    let recording = if snapshot.recording_active { "ON" } else { "OFF" };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Atrium Observer</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        li::before {{ content: "GET "; color: #7ee787; font-weight: bold; }}
        .status {{ color: #3fb950; font-weight: bold; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
    </style>
</head>
<body>
    <h1>Atrium Observer</h1>
    <p class="subtitle">Meeting room dashboard server</p>

    <p>Room: {title} -- <span class="status">{status}</span></p>

    <div>
        <div class="metric">
            <div class="label">Participants</div>
            <div class="value">{participant_count}</div>
        </div>
        <div class="metric">
            <div class="label">Events</div>
            <div class="value">{event_count}</div>
        </div>
        <div class="metric">
            <div class="label">Flagged</div>
            <div class="value">{flagged}</div>
        </div>
        <div class="metric">
            <div class="label">Recording</div>
            <div class="value">{recording}</div>
        </div>
    </div>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li><a href="/api/room">/api/room</a> -- Current room snapshot</li>
        <li><a href="/api/events">/api/events</a> -- Query events (?kind=chat, ?participant=X)</li>
        <li><a href="/api/notes">/api/notes</a> -- Latest meeting notes</li>
        <li><a href="/api/moderation">/api/moderation</a> -- Moderation summary</li>
    </ul>

    <h2>WebSocket</h2>
    <ul>
        <li style="list-style:none;"><code>ws://host:port/ws/events</code> -- Live event stream</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /api/room -- current room snapshot
// ---------------------------------------------------------------------------

/// Return the current room snapshot: identity, open/closed status, and
/// the participant list in join order.
pub async fn get_room(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ObserverError> {
    let snapshot = state.snapshot.read().await;
    let room = snapshot
        .room
        .as_ref()
        .ok_or_else(|| ObserverError::NotFound(String::from("no room snapshot yet")))?;
    Ok(Json(serde_json::to_value(room)?))
}

// ---------------------------------------------------------------------------
// GET /api/events -- query the event log
// ---------------------------------------------------------------------------

/// Query the event log, most recent first.
///
/// # Query Parameters
///
/// - `kind`: one of `join`, `leave`, `move`, `gesture`, `chat`,
///   `proximity`.
/// - `participant`: a participant id; proximity pairs and gesture
///   targets count as involvement.
/// - `limit`: maximum number of events (default 100, max 1000).
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventsQuery>,
) -> Result<impl IntoResponse, ObserverError> {
    if let Some(kind) = params.kind.as_deref()
        && !EVENT_KINDS.contains(&kind)
    {
        return Err(ObserverError::InvalidQuery(format!(
            "unknown event kind: {kind}"
        )));
    }
    let limit = params
        .limit
        .unwrap_or(DEFAULT_EVENT_LIMIT)
        .min(MAX_EVENT_LIMIT);
    let participant_filter = params.participant.as_deref().map(ParticipantId::new);

    let snapshot = state.snapshot.read().await;
    let events: Vec<&Event> = snapshot
        .events
        .iter()
        .rev()
        .filter(|e| {
            if let Some(kind) = params.kind.as_deref()
                && e.kind.kind_name() != kind
            {
                return false;
            }
            if let Some(ref id) = participant_filter
                && !e.kind.involves(id)
            {
                return false;
            }
            true
        })
        .take(limit)
        .collect();

    Ok(Json(serde_json::json!({
        "count": events.len(),
        "events": events,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/notes -- latest synthesized meeting notes
// ---------------------------------------------------------------------------

/// Return the most recently synthesized meeting notes.
///
/// Before the first synthesis this returns `{"generated": false}`
/// rather than an error, since "no notes yet" is a normal state.
pub async fn get_notes(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ObserverError> {
    let snapshot = state.snapshot.read().await;
    match &snapshot.notes {
        Some(notes) => Ok(Json(serde_json::json!({
            "generated": true,
            "notes": notes,
        }))),
        None => Ok(Json(serde_json::json!({ "generated": false }))),
    }
}

// ---------------------------------------------------------------------------
// GET /api/moderation -- moderation summary and flagged messages
// ---------------------------------------------------------------------------

/// Return the aggregated moderation summary plus the flagged chat
/// events themselves, most recent first.
pub async fn get_moderation(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ObserverError> {
    let snapshot = state.snapshot.read().await;
    let flagged: Vec<&Event> = snapshot
        .events
        .iter()
        .rev()
        .filter(|e| matches!(&e.kind, EventKind::Chat { moderation, .. } if moderation.is_toxic))
        .collect();

    Ok(Json(serde_json::json!({
        "summary": snapshot.moderation,
        "flagged": flagged,
    })))
}
