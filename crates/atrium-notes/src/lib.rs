//! Meeting notes synthesis for recorded Atrium sessions.
//!
//! Notes are derived, never stored: given a finalized recording, the
//! synthesizer computes topics, action items, and a per-language
//! participant breakdown, and the caller can recompute them at any
//! time. The extraction heuristic lives behind a trait so a real NLP
//! model can replace the shipped keyword matcher without touching
//! callers.
//!
//! # Modules
//!
//! - [`synthesizer`] -- [`NotesSynthesizer`], the recording-to-summary
//!   derivation.
//! - [`extract`] -- The [`NotesExtractor`] seam and the keyword
//!   heuristic implementation.
//!
//! [`NotesSynthesizer`]: synthesizer::NotesSynthesizer
//! [`NotesExtractor`]: extract::NotesExtractor

pub mod extract;
pub mod synthesizer;

// Re-export primary types at crate root.
pub use extract::{KeywordExtractor, NotesExtractor};
pub use synthesizer::NotesSynthesizer;
