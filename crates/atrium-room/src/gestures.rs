//! Gesture name validation and normalization.
//!
//! The catalog is configuration, not code: the default set matches the
//! built-in dashboard buttons, and deployments extend it by listing
//! more names under `gestures.catalog` in the session config.

use std::collections::BTreeSet;

/// The gesture names every room understands out of the box.
pub const DEFAULT_GESTURES: [&str; 5] = ["wave", "thumbs_up", "clap", "point", "peace"];

/// Validates and normalizes gesture identifiers against a configured set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureCatalog {
    /// Recognized gesture names, already normalized.
    names: BTreeSet<String>,
}

impl GestureCatalog {
    /// Build a catalog from configured names.
    ///
    /// Names are normalized on the way in, so the config may list
    /// `"Wave"` and still match `"wave"` at runtime.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| normalize_name(n.as_ref()))
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    /// Normalize a raw gesture identifier and check it against the
    /// catalog.
    ///
    /// Returns the canonical name, or `None` if the gesture is not in
    /// the catalog.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let name = normalize_name(raw);
        self.names.contains(&name).then_some(name)
    }

    /// All recognized gesture names, in stable order.
    pub const fn names(&self) -> &BTreeSet<String> {
        &self.names
    }
}

impl Default for GestureCatalog {
    fn default() -> Self {
        Self::from_names(DEFAULT_GESTURES)
    }
}

/// Lowercase and trim a raw gesture identifier.
fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_five_gestures() {
        let catalog = GestureCatalog::default();
        assert_eq!(catalog.names().len(), 5);
        assert_eq!(catalog.normalize("wave"), Some("wave".to_owned()));
    }

    #[test]
    fn normalization_trims_and_lowercases() {
        let catalog = GestureCatalog::default();
        assert_eq!(catalog.normalize(" WAVE "), Some("wave".to_owned()));
        assert_eq!(catalog.normalize("Thumbs_Up"), Some("thumbs_up".to_owned()));
    }

    #[test]
    fn unknown_gesture_is_rejected() {
        let catalog = GestureCatalog::default();
        assert_eq!(catalog.normalize("backflip"), None);
    }

    #[test]
    fn catalog_is_extensible_through_config() {
        let catalog = GestureCatalog::from_names(["wave", "bow"]);
        assert_eq!(catalog.normalize("bow"), Some("bow".to_owned()));
        assert_eq!(catalog.normalize("clap"), None);
    }
}
