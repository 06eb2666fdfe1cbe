//! On-demand notes synthesis from a finalized recording.

use std::collections::BTreeMap;

use atrium_types::{Language, NotesSummary, Recording};
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::extract::{KeywordExtractor, NotesExtractor};

/// Derives a [`NotesSummary`] from a [`Recording`].
///
/// Stateless apart from its extractor; the same recording always yields
/// the same topics, action items, and language breakdown. An empty
/// transcript yields empty collections, never an error.
pub struct NotesSynthesizer {
    extractor: Box<dyn NotesExtractor>,
}

impl NotesSynthesizer {
    /// Build a synthesizer around a custom extractor.
    pub const fn new(extractor: Box<dyn NotesExtractor>) -> Self {
        Self { extractor }
    }

    /// Synthesize notes, stamped with the current time.
    pub fn synthesize(&self, recording: &Recording) -> NotesSummary {
        self.synthesize_at(recording, Utc::now())
    }

    /// Synthesize notes with an explicit generation timestamp.
    pub fn synthesize_at(&self, recording: &Recording, generated_at: DateTime<Utc>) -> NotesSummary {
        let mut language_breakdown: BTreeMap<Language, u32> = BTreeMap::new();
        for profile in &recording.metadata.participants {
            let count = language_breakdown.entry(profile.language).or_insert(0);
            *count = count.saturating_add(1);
        }

        let summary = NotesSummary {
            topics: self.extractor.topics(&recording.transcript),
            action_items: self.extractor.action_items(&recording.transcript),
            language_breakdown,
            generated_at,
        };
        debug!(
            recording = %recording.id,
            topics = summary.topics.len(),
            action_items = summary.action_items.len(),
            languages = summary.language_breakdown.len(),
            "notes synthesized"
        );
        summary
    }
}

impl Default for NotesSynthesizer {
    fn default() -> Self {
        Self::new(Box::new(KeywordExtractor))
    }
}

impl core::fmt::Debug for NotesSynthesizer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NotesSynthesizer").finish_non_exhaustive()
    }
}
