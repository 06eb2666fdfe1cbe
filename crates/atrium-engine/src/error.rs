//! Error types for the session engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all failure
//! modes during engine startup and session execution.

/// Top-level error for the session engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: atrium_room::ConfigError,
    },

    /// A room operation in the session script was rejected.
    #[error("room error: {source}")]
    Room {
        /// The underlying room error.
        #[from]
        source: atrium_room::RoomError,
    },

    /// Recording control or persistence failed.
    #[error("recorder error: {source}")]
    Recorder {
        /// The underlying recorder error.
        #[from]
        source: atrium_recorder::RecorderError,
    },

    /// The dashboard server failed to start or serve.
    #[error("observer error: {source}")]
    Observer {
        /// The underlying server error.
        #[from]
        source: atrium_observer::ServerError,
    },

    /// Preparing the recording output directory failed.
    #[error("recording directory error: {source}")]
    RecordingDir {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
