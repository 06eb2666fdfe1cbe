//! Chat message classification against a configurable term table.
//!
//! The filter is a deterministic, side-effect-free stand-in for a real
//! toxicity model: it lowercases the message, tokenizes it, and matches
//! tokens against a term -> severity table. A model-backed classifier
//! is a drop-in replacement behind the same `classify` contract.
//!
//! Classification never blocks or alters a message; the result rides on
//! the chat event for downstream consumers to act on.

use std::collections::{BTreeMap, BTreeSet};

use atrium_types::ModerationResult;

/// Classifies chat text as clean or toxic with a severity score.
#[derive(Debug, Clone, PartialEq)]
pub struct ModerationFilter {
    /// Term table in stable (sorted) order: term -> severity in `[0, 1]`.
    terms: Vec<(String, f64)>,
    /// Minimum matched severity for a message to count as toxic.
    threshold: f64,
}

impl ModerationFilter {
    /// Build a filter from a term table and a toxicity threshold.
    ///
    /// Terms are lowercased on the way in. Severities are clamped to
    /// `[0, 1]`. With the default threshold of 0.0, any match at all
    /// marks the message toxic.
    pub fn new(terms: &BTreeMap<String, f64>, threshold: f64) -> Self {
        Self {
            terms: terms
                .iter()
                .map(|(term, severity)| (term.to_lowercase(), severity.clamp(0.0, 1.0)))
                .collect(),
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    /// An empty filter that classifies everything as clean.
    pub const fn permissive() -> Self {
        Self {
            terms: Vec::new(),
            threshold: 0.0,
        }
    }

    /// Classify a message.
    ///
    /// Deterministic and total: arbitrary input (including the empty
    /// string) yields a result, never an error. Single-word terms match
    /// on token boundaries; multi-word terms match as substrings of the
    /// lowercased text.
    pub fn classify(&self, text: &str) -> ModerationResult {
        if self.terms.is_empty() || text.is_empty() {
            return ModerationResult::clean();
        }

        let normalized = text.to_lowercase();
        let tokens: BTreeSet<&str> = normalized
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|t| !t.is_empty())
            .collect();

        let mut matched_terms = Vec::new();
        let mut severity = 0.0_f64;
        for (term, term_severity) in &self.terms {
            let hit = if term.contains(' ') {
                normalized.contains(term.as_str())
            } else {
                tokens.contains(term.as_str())
            };
            if hit {
                matched_terms.push(term.clone());
                severity = severity.max(*term_severity);
            }
        }

        if matched_terms.is_empty() {
            return ModerationResult::clean();
        }

        ModerationResult {
            is_toxic: severity >= self.threshold,
            severity,
            matched_terms,
        }
    }
}

impl Default for ModerationFilter {
    fn default() -> Self {
        Self::permissive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries
            .iter()
            .map(|(term, severity)| ((*term).to_owned(), *severity))
            .collect()
    }

    #[test]
    fn neutral_table_classifies_everything_clean() {
        let filter = ModerationFilter::permissive();
        let result = filter.classify("this is fine");
        assert!(!result.is_toxic);
        assert!(result.matched_terms.is_empty());
    }

    #[test]
    fn matched_term_carries_its_severity() {
        let filter = ModerationFilter::new(&table(&[("idiot", 0.8)]), 0.0);
        let result = filter.classify("you idiot");
        assert!(result.is_toxic);
        assert!((result.severity - 0.8).abs() < f64::EPSILON);
        assert_eq!(result.matched_terms, vec!["idiot".to_owned()]);
    }

    #[test]
    fn empty_input_is_clean() {
        let filter = ModerationFilter::new(&table(&[("idiot", 0.8)]), 0.0);
        let result = filter.classify("");
        assert!(!result.is_toxic);
        assert!(result.matched_terms.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let filter = ModerationFilter::new(&table(&[("stupid", 0.6)]), 0.0);
        assert!(filter.classify("that is STUPID!").is_toxic);
    }

    #[test]
    fn single_word_terms_match_whole_tokens_only() {
        let filter = ModerationFilter::new(&table(&[("dumb", 0.6)]), 0.0);
        // "dumbbell" contains the letters but is a different word.
        assert!(!filter.classify("pass me the dumbbell").is_toxic);
        assert!(filter.classify("that idea is dumb").is_toxic);
    }

    #[test]
    fn multi_word_terms_match_as_phrases() {
        let filter = ModerationFilter::new(&table(&[("shut up", 0.6)]), 0.0);
        assert!(filter.classify("oh shut up already").is_toxic);
        assert!(!filter.classify("the shutters are up").is_toxic);
    }

    #[test]
    fn severity_is_the_maximum_across_matches() {
        let filter = ModerationFilter::new(&table(&[("stupid", 0.6), ("hate", 0.8)]), 0.0);
        let result = filter.classify("I hate this stupid bug");
        assert!((result.severity - 0.8).abs() < f64::EPSILON);
        assert_eq!(result.matched_terms.len(), 2);
    }

    #[test]
    fn threshold_gates_toxicity_but_keeps_matches() {
        let filter = ModerationFilter::new(&table(&[("stupid", 0.6)]), 0.7);
        let result = filter.classify("stupid bug");
        assert!(!result.is_toxic);
        assert_eq!(result.matched_terms, vec!["stupid".to_owned()]);
        assert!((result.severity - 0.6).abs() < f64::EPSILON);
    }
}
