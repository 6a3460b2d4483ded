//! Domain types for retrack.
//!
//! Tracked paths are repository-relative strings as they appear in the
//! workflow text and the hosting API, never local filesystem paths; they are
//! kept as `String` so the text patcher can anchor on them verbatim.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tracked mapping entries
// ---------------------------------------------------------------------------

/// One source-to-destination mapping entry in the tracked config.
///
/// Identity is exact string equality of `source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedSpec {
    pub source: String,
    pub destination: String,
}

// ---------------------------------------------------------------------------
// Changes
// ---------------------------------------------------------------------------

/// A detected deletion or rename of a path between two commits.
///
/// Keyed by the old path in a [`ChangeSet`]; any other change status
/// (added, modified, copied, …) is never recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    /// The path no longer exists at the head commit.
    Deleted,
    /// The path moved; `new_path` may be empty when the diff did not carry
    /// one, which downstream treats as a deletion.
    Renamed { new_path: String },
}

/// Maps old paths to their [`FileChange`], built from a commit comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet(HashMap<String, FileChange>);

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, old_path: String, change: FileChange) {
        self.0.insert(old_path, change);
    }

    pub fn lookup(&self, path: &str) -> Option<&FileChange> {
        self.0.get(path)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, FileChange)> for ChangeSet {
    fn from_iter<T: IntoIterator<Item = (String, FileChange)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Decisions
// ---------------------------------------------------------------------------

/// The reconciler's per-spec outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// No matching change; the entry's text must stay byte-identical.
    Unchanged(TrackedSpec),
    /// The source was deleted (or renamed without a new path); the entry's
    /// block is removed from the config text.
    Dropped(TrackedSpec),
    /// The source was renamed; `new` carries the new source path and the
    /// original destination text untouched.
    Retargeted { old: TrackedSpec, new: TrackedSpec },
}

impl Decision {
    /// Whether applying this decision alters the config text.
    pub fn alters_text(&self) -> bool {
        !matches!(self, Decision::Unchanged(_))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(source: &str, destination: &str) -> TrackedSpec {
        TrackedSpec {
            source: source.to_string(),
            destination: destination.to_string(),
        }
    }

    #[test]
    fn change_set_lookup_by_old_path() {
        let set: ChangeSet = [
            ("a/x.yaml".to_string(), FileChange::Deleted),
            (
                "b/y.yaml".to_string(),
                FileChange::Renamed {
                    new_path: "b/z.yaml".to_string(),
                },
            ),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
        assert_eq!(set.lookup("a/x.yaml"), Some(&FileChange::Deleted));
        assert!(matches!(
            set.lookup("b/y.yaml"),
            Some(FileChange::Renamed { new_path }) if new_path == "b/z.yaml"
        ));
        assert_eq!(set.lookup("c/untouched.yaml"), None);
    }

    #[test]
    fn unchanged_decisions_do_not_alter_text() {
        assert!(!Decision::Unchanged(spec("a", "b")).alters_text());
        assert!(Decision::Dropped(spec("a", "b")).alters_text());
        assert!(Decision::Retargeted {
            old: spec("a", "b"),
            new: spec("a2", "b"),
        }
        .alters_text());
    }

    #[test]
    fn tracked_spec_yaml_roundtrip() {
        let entry = spec("specs/api.yaml", "generated/api.json");
        let yaml = serde_yaml::to_string(&entry).expect("serialize");
        let back: TrackedSpec = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(back, entry);
    }
}
