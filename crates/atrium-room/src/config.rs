//! Configuration loading and typed config structures for a session.
//!
//! The canonical configuration lives in `atrium-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure and provides a loader that reads and validates
//! the file. Every threshold and term table the engine uses is
//! configuration, not a hard-coded constant.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level session configuration.
///
/// Mirrors the structure of `atrium-config.yaml`. All fields have
/// defaults matching the demo deployment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SessionConfig {
    /// Room identity and spatial settings.
    #[serde(default)]
    pub room: RoomConfig,

    /// Moderation term table and threshold.
    #[serde(default)]
    pub moderation: ModerationConfig,

    /// Gesture catalog.
    #[serde(default)]
    pub gestures: GestureConfig,

    /// Recording output settings.
    #[serde(default)]
    pub recording: RecordingConfig,

    /// Dashboard server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

impl SessionConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&contents)?)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Room identity and spatial settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoomConfig {
    /// Room identifier.
    #[serde(default = "default_room_id")]
    pub id: String,

    /// Human-readable room title.
    #[serde(default = "default_room_title")]
    pub title: String,

    /// Distance below which two participants count as "nearby".
    #[serde(default = "default_proximity_threshold")]
    pub proximity_threshold: f64,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            id: default_room_id(),
            title: default_room_title(),
            proximity_threshold: default_proximity_threshold(),
        }
    }
}

/// Moderation term table and toxicity threshold.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModerationConfig {
    /// Minimum matched severity (in `[0, 1]`) for a message to count
    /// as toxic. The default of 0.0 makes any match toxic.
    #[serde(default = "default_toxicity_threshold")]
    pub toxicity_threshold: f64,

    /// Term -> severity table. Multi-word terms match as phrases.
    #[serde(default = "default_terms")]
    pub terms: BTreeMap<String, f64>,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            toxicity_threshold: default_toxicity_threshold(),
            terms: default_terms(),
        }
    }
}

/// Gesture catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GestureConfig {
    /// Recognized gesture names.
    #[serde(default = "default_gesture_catalog")]
    pub catalog: Vec<String>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            catalog: default_gesture_catalog(),
        }
    }
}

/// Recording output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecordingConfig {
    /// Directory recordings are saved into. Must exist and be writable.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

/// Dashboard server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The host address to bind to.
    #[serde(default = "default_server_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_server_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

fn default_room_id() -> String {
    "vr-main".to_owned()
}

fn default_room_title() -> String {
    "VR Meeting Room".to_owned()
}

const fn default_proximity_threshold() -> f64 {
    3.0
}

const fn default_toxicity_threshold() -> f64 {
    0.0
}

/// The demo term table: direct insults at 0.8, milder terms at 0.6.
fn default_terms() -> BTreeMap<String, f64> {
    [
        ("hate", 0.8),
        ("idiot", 0.8),
        ("stupid", 0.6),
        ("shut up", 0.6),
        ("useless", 0.6),
        ("dumb", 0.6),
    ]
    .into_iter()
    .map(|(term, severity)| (term.to_owned(), severity))
    .collect()
}

fn default_gesture_catalog() -> Vec<String> {
    crate::gestures::DEFAULT_GESTURES
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn default_output_dir() -> String {
    "recordings".to_owned()
}

fn default_server_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_server_port() -> u16 {
    8080
}
