//! Error types for the `atrium-recorder` crate.

/// Errors that can occur while recording or persisting a session.
#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    /// `start()` was called while a recording was already active.
    ///
    /// Rejected rather than silently ignored so the programmer error
    /// surfaces early.
    #[error("recording is already active")]
    AlreadyRecording,

    /// `stop()` was called with no active recording.
    #[error("no recording is active")]
    NotRecording,

    /// The sink failed to write the recording.
    ///
    /// Surfaced verbatim; the recording value remains in memory so the
    /// caller can retry without data loss.
    #[error("failed to write recording: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The recording could not be serialized to JSON.
    #[error("failed to serialize recording: {source}")]
    Serialization {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
