//! Shared sync pipeline entrypoint used by `run` and `check`.

use retrack_core::{Decision, WorkflowFile};
use retrack_github::RepoClient;

use crate::error::SyncError;
use crate::patch;
use crate::reconcile::reconcile;

/// Result of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// One decision per tracked entry, in file order.
    pub decisions: Vec<Decision>,
    /// Patched workflow text; `None` when nothing changed and no write or
    /// commit should happen.
    pub patched: Option<String>,
}

impl SyncOutcome {
    pub fn dropped(&self) -> usize {
        self.decisions
            .iter()
            .filter(|d| matches!(d, Decision::Dropped(_)))
            .count()
    }

    pub fn retargeted(&self) -> usize {
        self.decisions
            .iter()
            .filter(|d| matches!(d, Decision::Retargeted { .. }))
            .count()
    }
}

/// Run the pipeline: diff `base...head`, reconcile the tracked mapping, and
/// patch the raw text.
///
/// Benign no-op conditions (empty mapping, empty change set, no decision that
/// alters anything) return `patched: None` and log at info level.
pub fn run(
    client: &RepoClient,
    workflow: &WorkflowFile,
    base: &str,
    head: &str,
) -> Result<SyncOutcome, SyncError> {
    if workflow.specs.is_empty() {
        tracing::info!(
            "no tracked file mappings in {}; nothing to do",
            workflow.path.display()
        );
        return Ok(SyncOutcome {
            decisions: vec![],
            patched: None,
        });
    }

    let changes = client.changed_paths(base, head)?;
    if changes.is_empty() {
        tracing::info!("no deletions or renames between {base} and {head}");
    }

    let decisions = reconcile(&workflow.specs, &changes);
    if decisions.iter().all(|d| !d.alters_text()) {
        tracing::info!("tracked mappings are up to date");
        return Ok(SyncOutcome {
            decisions,
            patched: None,
        });
    }

    let patched = patch::apply(&workflow.raw, &decisions)?;
    Ok(SyncOutcome {
        decisions,
        patched: Some(patched),
    })
}
