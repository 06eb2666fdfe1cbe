//! Topic and action-item extraction from a session transcript.
//!
//! Extraction sits behind [`NotesExtractor`] so the keyword heuristic
//! shipped here can be swapped for a model-backed implementation
//! without touching the synthesizer or anything upstream of it.

use std::collections::BTreeSet;

use atrium_types::{Event, EventKind, ParticipantId};

/// Derives topics and action items from an ordered event transcript.
///
/// Implementations must be deterministic over the same transcript.
pub trait NotesExtractor: Send + Sync {
    /// Distinct topics surfaced from the transcript.
    fn topics(&self, transcript: &[Event]) -> BTreeSet<String>;

    /// Action items in the order they were detected.
    fn action_items(&self, transcript: &[Event]) -> Vec<String>;
}

/// Words too common to count as topics.
const STOPWORDS: [&str; 20] = [
    "about", "after", "again", "before", "could", "every", "going", "great", "hello", "other",
    "really", "right", "should", "thanks", "their", "there", "these", "think", "those", "would",
];

/// Phrases that mark a chat message as carrying an action item.
const ACTION_MARKERS: [&str; 6] = ["action:", "todo", "i will", "we will", "need to", "let's"];

/// Shortest token length considered topic-worthy.
const MIN_TOPIC_LEN: usize = 5;

/// Keyword-based heuristic extractor.
///
/// Topics are the distinct lowercased chat tokens of at least
/// [`MIN_TOPIC_LEN`] characters that are not stopwords. Action items
/// are chat messages containing one of the [`ACTION_MARKERS`],
/// attributed to their sender.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordExtractor;

impl KeywordExtractor {
    fn chats(transcript: &[Event]) -> impl Iterator<Item = (&ParticipantId, &str)> {
        transcript.iter().filter_map(|event| match &event.kind {
            EventKind::Chat {
                participant, text, ..
            } => Some((participant, text.as_str())),
            _ => None,
        })
    }
}

impl NotesExtractor for KeywordExtractor {
    fn topics(&self, transcript: &[Event]) -> BTreeSet<String> {
        let mut topics = BTreeSet::new();
        for (_, text) in Self::chats(transcript) {
            let lowered = text.to_lowercase();
            for token in lowered.split(|c: char| !c.is_alphanumeric()) {
                if token.len() >= MIN_TOPIC_LEN && !STOPWORDS.contains(&token) {
                    topics.insert(token.to_owned());
                }
            }
        }
        topics
    }

    fn action_items(&self, transcript: &[Event]) -> Vec<String> {
        let mut items = Vec::new();
        for (participant, text) in Self::chats(transcript) {
            let lowered = text.to_lowercase();
            if ACTION_MARKERS.iter().any(|marker| lowered.contains(marker)) {
                items.push(format!("{participant}: {text}"));
            }
        }
        items
    }
}
