use async_trait::async_trait;

use crate::error::StoreError;
use crate::record::{OverridePatch, OverrideRecord};

/// The storage trait for override backends.
///
/// ## Versioning contract
///
/// Overrides are keyed by `(run_id, comment_id)` and versioned:
///
/// - the first write for a key must supply `expected_version = 0` and
///   produces version 1;
/// - every later write must supply the version last returned, and is
///   rejected with [`StoreError::Conflict`] (carrying the stored record)
///   when it does not match;
/// - a successful write folds the patch into the stored record and
///   atomically increments the version.
///
/// The parser baseline is never part of this store; it stays immutable
/// wherever it was persisted, and effective values are computed
/// downstream as "override if present, else baseline".
///
/// ## Thread safety
///
/// Implementations must be `Send + Sync + 'static` to be shared across
/// async task boundaries.
#[async_trait]
pub trait OverrideStore: Send + Sync + 'static {
    /// Read the override for one comment, if any.
    async fn get(
        &self,
        run_id: &str,
        comment_id: &str,
    ) -> Result<Option<OverrideRecord>, StoreError>;

    /// List all overrides recorded for a run, in unspecified order.
    async fn list_run(&self, run_id: &str) -> Result<Vec<OverrideRecord>, StoreError>;

    /// Apply a version-validated override write. Returns the new version
    /// on success.
    async fn apply(
        &self,
        run_id: &str,
        comment_id: &str,
        expected_version: i64,
        patch: OverridePatch,
    ) -> Result<i64, StoreError>;
}
