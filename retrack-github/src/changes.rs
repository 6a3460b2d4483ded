//! Change-set construction from a commit comparison.

use retrack_core::{ChangeSet, FileChange};

use crate::types::{ChangeStatus, ChangedFile};

/// Reduce compare-endpoint file records to the deletions and renames that can
/// invalidate a tracked source path. Everything else (added, modified,
/// copied, …) cannot, and is never recorded.
///
/// For a rename the old path is the key and the new path is the payload; for
/// a removal the old path is both.
pub fn change_set(files: Vec<ChangedFile>) -> ChangeSet {
    let mut set = ChangeSet::new();
    for file in files {
        match file.status {
            ChangeStatus::Removed => {
                set.insert(file.filename, FileChange::Deleted);
            }
            ChangeStatus::Renamed => match file.previous_filename {
                Some(old_path) => {
                    set.insert(
                        old_path,
                        FileChange::Renamed {
                            new_path: file.filename,
                        },
                    );
                }
                // Cannot be keyed without the old path; nothing to reconcile.
                None => {
                    tracing::warn!(
                        "rename of '{}' carries no previous filename; ignoring",
                        file.filename
                    );
                }
            },
            _ => {}
        }
    }
    set
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
