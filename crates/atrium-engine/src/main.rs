//! Session engine binary for the Atrium meeting room.
//!
//! This is the main entry point that wires the room engine, session
//! recorder, notes synthesizer, and dashboard server together, then
//! drives the scripted multilingual demo session.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `atrium-config.yaml`
//! 3. Start the dashboard server
//! 4. Build the room with its injected collaborators
//! 5. Prepare the recording output directory
//! 6. Run the scripted session (join, gesture, move, chat, record, save,
//!    synthesize notes)
//! 7. Keep serving the dashboard until the process is terminated

mod error;
mod script;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use atrium_observer::state::AppState;
use atrium_observer::{ChannelGateway, ServerConfig, start_server};
use atrium_recorder::SessionRecorder;
use atrium_room::{ModerationFilter, Room, SessionConfig, SystemClock};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Default configuration file looked up in the working directory.
const CONFIG_PATH: &str = "atrium-config.yaml";

/// Pause between scripted session steps so dashboard clients can watch.
const STEP_DELAY: Duration = Duration::from_millis(500);

/// Application entry point for the session engine.
///
/// Initializes all subsystems, runs the demo session, then serves the
/// dashboard until the process is terminated.
///
/// # Errors
///
/// Returns an error if any initialization step or the session script
/// fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("atrium-engine starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        room_id = config.room.id,
        title = config.room.title,
        proximity_threshold = config.room.proximity_threshold,
        gestures = config.gestures.catalog.len(),
        moderation_terms = config.moderation.terms.len(),
        "configuration loaded"
    );

    // 3. Start the dashboard server.
    let state = Arc::new(AppState::new());
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    let server_state = Arc::clone(&state);
    let server = tokio::spawn(async move { start_server(&server_config, server_state).await });
    info!(
        host = config.server.host,
        port = config.server.port,
        "dashboard server starting"
    );

    // 4. Build the room with its injected collaborators.
    let filter = ModerationFilter::new(
        &config.moderation.terms,
        config.moderation.toxicity_threshold,
    );
    let gateway = Arc::new(ChannelGateway::new(Arc::clone(&state)));
    let mut room = Room::new(
        &config,
        filter,
        SessionRecorder::new(),
        Arc::new(SystemClock),
        gateway,
    );
    info!(room = %room.id(), "room created");

    // 5. Prepare the recording output directory.
    let output_dir = PathBuf::from(&config.recording.output_dir);
    std::fs::create_dir_all(&output_dir).map_err(|source| EngineError::RecordingDir { source })?;

    // 6. Run the scripted session.
    let saved_to = script::run_session(&mut room, &state, output_dir, STEP_DELAY).await?;
    info!(recording = %saved_to.display(), "session finished");

    // 7. Serve the dashboard until terminated.
    info!("session complete, dashboard remains available");
    server.await??;

    Ok(())
}

/// Load the session configuration.
///
/// Reads `atrium-config.yaml` from the working directory if present;
/// otherwise falls back to the built-in defaults.
fn load_config() -> Result<SessionConfig, EngineError> {
    let path = Path::new(CONFIG_PATH);
    if path.exists() {
        Ok(SessionConfig::from_file(path)?)
    } else {
        warn!(path = CONFIG_PATH, "config file not found, using defaults");
        Ok(SessionConfig::default())
    }
}
