//! Enumeration types shared across the Atrium engine.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Supported languages
// ---------------------------------------------------------------------------

/// A participant's preferred language.
///
/// The meeting room supports seven languages; the dashboard uses the
/// ISO 639-1 code (the serialized form) to pick flags and translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Language {
    /// English (`en`).
    #[serde(rename = "en")]
    English,
    /// Turkish (`tr`).
    #[serde(rename = "tr")]
    Turkish,
    /// Spanish (`es`).
    #[serde(rename = "es")]
    Spanish,
    /// French (`fr`).
    #[serde(rename = "fr")]
    French,
    /// German (`de`).
    #[serde(rename = "de")]
    German,
    /// Italian (`it`).
    #[serde(rename = "it")]
    Italian,
    /// Chinese (`zh`).
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    /// All supported languages, in a stable order.
    pub const ALL: [Self; 7] = [
        Self::English,
        Self::Turkish,
        Self::Spanish,
        Self::French,
        Self::German,
        Self::Italian,
        Self::Chinese,
    ];

    /// Return the ISO 639-1 code for this language.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Turkish => "tr",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Italian => "it",
            Self::Chinese => "zh",
        }
    }

    /// Return the English display name for this language.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Turkish => "Turkish",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Italian => "Italian",
            Self::Chinese => "Chinese",
        }
    }

    /// Look up a language by its ISO 639-1 code.
    ///
    /// Returns `None` for unrecognized codes.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.code() == code)
    }
}

impl core::fmt::Display for Language {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ---------------------------------------------------------------------------
// Moderation severity bands
// ---------------------------------------------------------------------------

/// Coarse severity band used when aggregating moderation results.
///
/// Individual [`ModerationResult`](crate::ModerationResult) values carry
/// a continuous severity in `[0, 1]`; the recording's moderation summary
/// buckets them into these bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SeverityBand {
    /// Severity below 0.4.
    Low,
    /// Severity in `[0.4, 0.7)`.
    Medium,
    /// Severity of 0.7 or above.
    High,
}

impl SeverityBand {
    /// Classify a continuous severity value into a band.
    pub fn from_severity(severity: f64) -> Self {
        if severity >= 0.7 {
            Self::High
        } else if severity >= 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
