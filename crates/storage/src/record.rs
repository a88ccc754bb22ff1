use serde::{Deserialize, Serialize};

/// A human correction layered over one parsed comment, keyed by
/// `(run_id, comment_id)`. Versioned: every successful write increments
/// `version`, and writers must present the version they last saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRecord {
    pub run_id: String,
    pub comment_id: String,
    /// Exclude this comment from tallies entirely.
    pub skipped: bool,
    /// Replacement total spot count; `None` keeps the baseline value.
    pub override_spots: Option<u32>,
    /// Replacement payer; `None` keeps the baseline value.
    pub override_payer: Option<String>,
    /// Replacement beneficiary; `None` keeps the baseline value.
    pub override_beneficiary: Option<String>,
    pub version: i64,
}

/// A partial override write. Fields left `None` keep whatever the stored
/// record already holds (or the no-override default on first write).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverridePatch {
    pub skipped: Option<bool>,
    pub override_spots: Option<u32>,
    pub override_payer: Option<String>,
    pub override_beneficiary: Option<String>,
}

impl OverrideRecord {
    /// The record produced by a first write: patch applied over defaults,
    /// at version 1.
    pub fn initial(run_id: &str, comment_id: &str, patch: OverridePatch) -> Self {
        let mut record = OverrideRecord {
            run_id: run_id.to_owned(),
            comment_id: comment_id.to_owned(),
            skipped: false,
            override_spots: None,
            override_payer: None,
            override_beneficiary: None,
            version: 1,
        };
        record.merge(patch);
        record
    }

    /// Fold a patch into this record; absent fields keep current values.
    /// Does not touch `version` -- the store owns the increment.
    pub fn merge(&mut self, patch: OverridePatch) {
        if let Some(skipped) = patch.skipped {
            self.skipped = skipped;
        }
        if let Some(spots) = patch.override_spots {
            self.override_spots = Some(spots);
        }
        if let Some(payer) = patch.override_payer {
            self.override_payer = Some(payer);
        }
        if let Some(beneficiary) = patch.override_beneficiary {
            self.override_beneficiary = Some(beneficiary);
        }
    }
}
