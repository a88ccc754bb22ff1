//! spottally-storage: the override/reconciliation store contract.
//!
//! Parser output is an immutable baseline; human corrections are
//! versioned [`OverrideRecord`]s keyed by `(run_id, comment_id)`, written
//! through [`OverrideStore::apply`] under optimistic concurrency control.
//! The baseline is never touched -- downstream code computes effective
//! values as "override if present, else baseline" (see the
//! `spottally-reconcile` crate).

mod error;
mod memory;
mod record;
mod traits;

pub mod conformance;

pub use error::StoreError;
pub use memory::MemoryOverrideStore;
pub use record::{OverridePatch, OverrideRecord};
pub use traits::OverrideStore;
