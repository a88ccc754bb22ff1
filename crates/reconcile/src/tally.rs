use std::collections::BTreeMap;

use serde::Serialize;

use spottally_core::ParsedComment;
use spottally_storage::OverrideRecord;

use crate::effective::effective;

/// One payer's position in a run: spots they claimed for themselves vs
/// spots they are covering for other commenters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyEntry {
    pub user: String,
    pub self_claimed: u32,
    pub owes_for: u32,
}

/// Tally effective spots per payer across a run, skipped comments
/// excluded. A comment counts as self-claimed when its effective payer is
/// its author, and as owed-for otherwise. Entries come back sorted by
/// user.
pub fn tally(rows: &[(ParsedComment, Option<OverrideRecord>)]) -> Vec<TallyEntry> {
    let mut acc: BTreeMap<String, (u32, u32)> = BTreeMap::new();

    for (baseline, ov) in rows {
        let e = effective(baseline, ov.as_ref());
        if e.skipped {
            continue;
        }
        let entry = acc.entry(e.payer.clone()).or_default();
        if e.payer == baseline.author {
            entry.0 = entry.0.saturating_add(e.spots);
        } else {
            entry.1 = entry.1.saturating_add(e.spots);
        }
    }

    acc.into_iter()
        .map(|(user, (self_claimed, owes_for))| TallyEntry {
            user,
            self_claimed,
            owes_for,
        })
        .collect()
}
