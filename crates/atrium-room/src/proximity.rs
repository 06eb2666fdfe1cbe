//! Edge-triggered proximity detection between participant pairs.
//!
//! Emitting a proximity notification on every move while two
//! participants stand next to each other would flood the event log.
//! The tracker therefore remembers, per unordered participant pair,
//! whether the pair was within the threshold after the last
//! observation, and reports only the below-threshold *crossings*.

use std::collections::BTreeSet;

use atrium_types::ParticipantId;

/// Tracks which participant pairs are currently within the proximity
/// threshold.
///
/// Pairs are stored in canonical (sorted) order so `(a, b)` and
/// `(b, a)` are the same pair. A pair absent from the set is "not
/// within threshold".
#[derive(Debug, Clone, Default)]
pub struct ProximityTracker {
    /// Canonically ordered pairs currently within the threshold.
    within: BTreeSet<(ParticipantId, ParticipantId)>,
}

impl ProximityTracker {
    /// Create an empty tracker.
    pub const fn new() -> Self {
        Self {
            within: BTreeSet::new(),
        }
    }

    /// Record a fresh distance observation for a pair.
    ///
    /// Returns `true` exactly when the pair crossed from "at or above
    /// threshold" to "below threshold" -- the edge on which a proximity
    /// event should be emitted.
    pub fn observe(
        &mut self,
        a: &ParticipantId,
        b: &ParticipantId,
        distance: f64,
        threshold: f64,
    ) -> bool {
        let key = Self::key(a, b);
        if distance < threshold {
            self.within.insert(key)
        } else {
            self.within.remove(&key);
            false
        }
    }

    /// Forget all pairs involving a participant (on leave).
    pub fn forget(&mut self, id: &ParticipantId) {
        self.within.retain(|(a, b)| a != id && b != id);
    }

    /// Number of pairs currently within the threshold.
    pub fn pairs_within(&self) -> usize {
        self.within.len()
    }

    /// Canonical ordering for an unordered pair.
    fn key(a: &ParticipantId, b: &ParticipantId) -> (ParticipantId, ParticipantId) {
        if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_crossing_fires_once() {
        let mut tracker = ProximityTracker::new();
        let a = ParticipantId::new("alice");
        let b = ParticipantId::new("mehmet");

        // 5 -> 2 crosses the threshold of 3: fire.
        assert!(tracker.observe(&a, &b, 2.0, 3.0));
        // Still at 2: no re-fire.
        assert!(!tracker.observe(&a, &b, 2.0, 3.0));
        // Back out to 5: no fire, state reset.
        assert!(!tracker.observe(&a, &b, 5.0, 3.0));
        // Crossing again fires again.
        assert!(tracker.observe(&a, &b, 1.0, 3.0));
    }

    #[test]
    fn pair_order_does_not_matter() {
        let mut tracker = ProximityTracker::new();
        let a = ParticipantId::new("alice");
        let b = ParticipantId::new("mehmet");

        assert!(tracker.observe(&a, &b, 2.0, 3.0));
        // Same pair observed in reverse order is not a new crossing.
        assert!(!tracker.observe(&b, &a, 2.5, 3.0));
        assert_eq!(tracker.pairs_within(), 1);
    }

    #[test]
    fn exactly_at_threshold_is_not_within() {
        let mut tracker = ProximityTracker::new();
        let a = ParticipantId::new("alice");
        let b = ParticipantId::new("mehmet");
        assert!(!tracker.observe(&a, &b, 3.0, 3.0));
    }

    #[test]
    fn forget_clears_all_pairs_for_a_participant() {
        let mut tracker = ProximityTracker::new();
        let a = ParticipantId::new("alice");
        let b = ParticipantId::new("mehmet");
        let c = ParticipantId::new("wei");

        assert!(tracker.observe(&a, &b, 1.0, 3.0));
        assert!(tracker.observe(&a, &c, 1.0, 3.0));
        assert_eq!(tracker.pairs_within(), 2);

        tracker.forget(&a);
        assert_eq!(tracker.pairs_within(), 0);

        // A re-join crossing fires fresh.
        assert!(tracker.observe(&a, &b, 1.0, 3.0));
    }
}
