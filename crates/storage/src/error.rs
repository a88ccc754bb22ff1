use crate::record::OverrideRecord;

/// All errors that can be returned by an OverrideStore implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Optimistic concurrency conflict -- the supplied expected version
    /// does not match the stored record. Carries the currently stored
    /// record so the caller can rebase; `None` when the caller expected
    /// an existing record but the key has never been written.
    #[error("version conflict on {run_id}/{comment_id}: expected version {expected_version}")]
    Conflict {
        run_id: String,
        comment_id: String,
        expected_version: i64,
        latest: Option<OverrideRecord>,
    },

    /// A backend-specific storage error (DB connection, serialization, etc.).
    #[error("storage backend error: {0}")]
    Backend(String),
}
