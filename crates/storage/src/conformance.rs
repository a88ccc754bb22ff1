//! Conformance test suite for [`OverrideStore`] implementations.
//!
//! Backend-agnostic checks of the versioning contract: first-write rule,
//! conflict detection (with the stored record attached), atomic version
//! increments, patch-merge semantics, and exactly-one-winner behavior
//! under concurrent writers.
//!
//! Backend crates call [`run_all`] with a factory that creates a fresh,
//! empty store for each test:
//!
//! ```ignore
//! let results = conformance::run_all(&|| async { make_store().await }).await;
//! assert!(results.iter().all(|r| r.passed));
//! ```

use std::future::Future;
use std::sync::Arc;

use crate::{OverridePatch, OverrideStore, StoreError};

/// Number of concurrent writers in the contention test.
const WRITERS: usize = 10;

/// Result of a single conformance test.
#[derive(Debug, Clone)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub message: Option<String>,
}

impl TestResult {
    fn from_result(name: &str, result: Result<(), String>) -> Self {
        let (passed, message) = match result {
            Ok(()) => (true, None),
            Err(msg) => (false, Some(msg)),
        };
        TestResult {
            name: name.to_string(),
            passed,
            message,
        }
    }
}

/// Run every conformance test against a store backend. The factory is
/// called once per test so each test starts from an empty store.
pub async fn run_all<S, F, Fut>(factory: &F) -> Vec<TestResult>
where
    S: OverrideStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let mut results = Vec::new();
    results.push(TestResult::from_result(
        "first_write_requires_version_zero",
        first_write_requires_version_zero(factory().await).await,
    ));
    results.push(TestResult::from_result(
        "first_write_produces_version_one",
        first_write_produces_version_one(factory().await).await,
    ));
    results.push(TestResult::from_result(
        "stale_write_conflicts_with_latest_attached",
        stale_write_conflicts_with_latest_attached(factory().await).await,
    ));
    results.push(TestResult::from_result(
        "versions_increment_sequentially",
        versions_increment_sequentially(factory().await).await,
    ));
    results.push(TestResult::from_result(
        "patches_merge_field_by_field",
        patches_merge_field_by_field(factory().await).await,
    ));
    results.push(TestResult::from_result(
        "get_unwritten_key_is_none",
        get_unwritten_key_is_none(factory().await).await,
    ));
    results.push(TestResult::from_result(
        "list_run_filters_by_run",
        list_run_filters_by_run(factory().await).await,
    ));
    results.push(TestResult::from_result(
        "concurrent_first_writes_exactly_one_wins",
        concurrent_first_writes_exactly_one_wins(factory().await).await,
    ));
    results
}

fn spots(n: u32) -> OverridePatch {
    OverridePatch {
        override_spots: Some(n),
        ..Default::default()
    }
}

async fn first_write_requires_version_zero<S: OverrideStore>(store: S) -> Result<(), String> {
    match store.apply("r1", "c1", 3, spots(5)).await {
        Err(StoreError::Conflict { latest: None, .. }) => {}
        other => return Err(format!("expected conflict with no latest, got {other:?}")),
    }
    if store
        .get("r1", "c1")
        .await
        .map_err(|e| e.to_string())?
        .is_some()
    {
        return Err("rejected first write must not create a record".into());
    }
    Ok(())
}

async fn first_write_produces_version_one<S: OverrideStore>(store: S) -> Result<(), String> {
    let v = store
        .apply("r1", "c1", 0, spots(5))
        .await
        .map_err(|e| e.to_string())?;
    if v != 1 {
        return Err(format!("expected version 1, got {v}"));
    }
    let rec = store
        .get("r1", "c1")
        .await
        .map_err(|e| e.to_string())?
        .ok_or("record missing after first write")?;
    if rec.version != 1 || rec.override_spots != Some(5) {
        return Err(format!("unexpected stored record: {rec:?}"));
    }
    Ok(())
}

async fn stale_write_conflicts_with_latest_attached<S: OverrideStore>(
    store: S,
) -> Result<(), String> {
    store
        .apply("r1", "c1", 0, spots(5))
        .await
        .map_err(|e| e.to_string())?;
    store
        .apply("r1", "c1", 1, spots(6))
        .await
        .map_err(|e| e.to_string())?;
    // A writer still holding version 1 must be rejected and shown v2.
    match store.apply("r1", "c1", 1, spots(7)).await {
        Err(StoreError::Conflict {
            latest: Some(latest),
            ..
        }) => {
            if latest.version != 2 || latest.override_spots != Some(6) {
                return Err(format!("conflict carried wrong record: {latest:?}"));
            }
        }
        other => return Err(format!("expected conflict with latest, got {other:?}")),
    }
    // The rejected write must not have changed anything.
    let rec = store
        .get("r1", "c1")
        .await
        .map_err(|e| e.to_string())?
        .ok_or("record missing")?;
    if rec.version != 2 || rec.override_spots != Some(6) {
        return Err(format!("stale write leaked into store: {rec:?}"));
    }
    Ok(())
}

async fn versions_increment_sequentially<S: OverrideStore>(store: S) -> Result<(), String> {
    let mut expected = 0;
    for n in 0..5u32 {
        let v = store
            .apply("r1", "c1", expected, spots(n))
            .await
            .map_err(|e| e.to_string())?;
        expected += 1;
        if v != expected {
            return Err(format!("expected version {expected}, got {v}"));
        }
    }
    Ok(())
}

async fn patches_merge_field_by_field<S: OverrideStore>(store: S) -> Result<(), String> {
    store
        .apply("r1", "c1", 0, spots(4))
        .await
        .map_err(|e| e.to_string())?;
    store
        .apply(
            "r1",
            "c1",
            1,
            OverridePatch {
                override_payer: Some("fuzzy".into()),
                ..Default::default()
            },
        )
        .await
        .map_err(|e| e.to_string())?;
    store
        .apply(
            "r1",
            "c1",
            2,
            OverridePatch {
                skipped: Some(true),
                ..Default::default()
            },
        )
        .await
        .map_err(|e| e.to_string())?;

    let rec = store
        .get("r1", "c1")
        .await
        .map_err(|e| e.to_string())?
        .ok_or("record missing")?;
    if rec.override_spots != Some(4)
        || rec.override_payer.as_deref() != Some("fuzzy")
        || !rec.skipped
        || rec.version != 3
    {
        return Err(format!("merge lost fields: {rec:?}"));
    }
    Ok(())
}

async fn get_unwritten_key_is_none<S: OverrideStore>(store: S) -> Result<(), String> {
    match store.get("r1", "nope").await {
        Ok(None) => Ok(()),
        other => Err(format!("expected Ok(None), got {other:?}")),
    }
}

async fn list_run_filters_by_run<S: OverrideStore>(store: S) -> Result<(), String> {
    store
        .apply("r1", "c1", 0, spots(1))
        .await
        .map_err(|e| e.to_string())?;
    store
        .apply("r1", "c2", 0, spots(2))
        .await
        .map_err(|e| e.to_string())?;
    store
        .apply("r2", "c1", 0, spots(3))
        .await
        .map_err(|e| e.to_string())?;

    let mut listed = store.list_run("r1").await.map_err(|e| e.to_string())?;
    listed.sort_by(|a, b| a.comment_id.cmp(&b.comment_id));
    let ids: Vec<_> = listed.iter().map(|r| r.comment_id.as_str()).collect();
    if ids != ["c1", "c2"] {
        return Err(format!("expected r1 overrides only, got {ids:?}"));
    }
    Ok(())
}

async fn concurrent_first_writes_exactly_one_wins<S: OverrideStore>(
    store: S,
) -> Result<(), String> {
    let store = Arc::new(store);
    let mut handles = Vec::new();
    for n in 0..WRITERS as u32 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.apply("r1", "c1", 0, spots(n)).await
        }));
    }

    let mut wins = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.map_err(|e| e.to_string())? {
            Ok(1) => wins += 1,
            Ok(v) => return Err(format!("unexpected version {v} from first write")),
            Err(StoreError::Conflict { .. }) => conflicts += 1,
            Err(other) => return Err(format!("unexpected error: {other}")),
        }
    }
    if wins != 1 || conflicts != WRITERS - 1 {
        return Err(format!("expected exactly one winner, got {wins} (conflicts {conflicts})"));
    }
    Ok(())
}
