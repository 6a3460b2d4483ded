//! Mapping reconciliation — one decision per tracked entry.

use retrack_core::{ChangeSet, Decision, FileChange, TrackedSpec};

/// Produce one [`Decision`] per spec, preserving input order.
///
/// Each spec's source is looked up exactly once against the change set; a
/// spec with no matching change is always `Unchanged`. On rename the
/// destination text is carried through untouched — only the source path is
/// swapped.
pub fn reconcile(specs: &[TrackedSpec], changes: &ChangeSet) -> Vec<Decision> {
    specs
        .iter()
        .map(|spec| decide(spec, changes.lookup(&spec.source)))
        .collect()
}

fn decide(spec: &TrackedSpec, change: Option<&FileChange>) -> Decision {
    match change {
        None => Decision::Unchanged(spec.clone()),
        Some(FileChange::Deleted) => {
            tracing::info!("'{}' was deleted; dropping its mapping", spec.source);
            Decision::Dropped(spec.clone())
        }
        Some(FileChange::Renamed { new_path }) if new_path.is_empty() => {
            tracing::warn!(
                "'{}' was renamed but the diff carries no new path; dropping its mapping",
                spec.source
            );
            Decision::Dropped(spec.clone())
        }
        Some(FileChange::Renamed { new_path }) => {
            tracing::info!("'{}' was renamed to '{}'", spec.source, new_path);
            Decision::Retargeted {
                old: spec.clone(),
                new: TrackedSpec {
                    source: new_path.clone(),
                    destination: spec.destination.clone(),
                },
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
