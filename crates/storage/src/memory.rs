//! Reference in-memory override store.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::error::StoreError;
use crate::record::{OverridePatch, OverrideRecord};
use crate::traits::OverrideStore;

/// In-memory [`OverrideStore`] backend. The version check and increment
/// happen under one lock, which is what makes the write atomic.
#[derive(Debug, Default)]
pub struct MemoryOverrideStore {
    records: Mutex<HashMap<(String, String), OverrideRecord>>,
}

impl MemoryOverrideStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OverrideStore for MemoryOverrideStore {
    async fn get(
        &self,
        run_id: &str,
        comment_id: &str,
    ) -> Result<Option<OverrideRecord>, StoreError> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records
            .get(&(run_id.to_owned(), comment_id.to_owned()))
            .cloned())
    }

    async fn list_run(&self, run_id: &str) -> Result<Vec<OverrideRecord>, StoreError> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records
            .values()
            .filter(|r| r.run_id == run_id)
            .cloned()
            .collect())
    }

    async fn apply(
        &self,
        run_id: &str,
        comment_id: &str,
        expected_version: i64,
        patch: OverridePatch,
    ) -> Result<i64, StoreError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        let key = (run_id.to_owned(), comment_id.to_owned());

        match records.get_mut(&key) {
            None => {
                if expected_version != 0 {
                    return Err(StoreError::Conflict {
                        run_id: run_id.to_owned(),
                        comment_id: comment_id.to_owned(),
                        expected_version,
                        latest: None,
                    });
                }
                records.insert(key, OverrideRecord::initial(run_id, comment_id, patch));
                Ok(1)
            }
            Some(existing) => {
                if existing.version != expected_version {
                    return Err(StoreError::Conflict {
                        run_id: run_id.to_owned(),
                        comment_id: comment_id.to_owned(),
                        expected_version,
                        latest: Some(existing.clone()),
                    });
                }
                existing.merge(patch);
                existing.version += 1;
                Ok(existing.version)
            }
        }
    }
}
