//! # retrack-sync
//!
//! Mapping reconciliation and raw-text patching.
//!
//! Call [`pipeline::run`] to diff two refs, reconcile the tracked mapping
//! against the result, and splice the decisions onto the original workflow
//! text. The text is patched in place — never re-serialized — so unrelated
//! formatting and comments survive untouched.

pub mod diff;
pub mod error;
pub mod patch;
pub mod pipeline;
pub mod reconcile;

pub use error::{PatchError, SyncError};
pub use pipeline::SyncOutcome;
pub use reconcile::reconcile;
