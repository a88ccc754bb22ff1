use serde::Serialize;

use spottally_core::{normalize_name, ParsedComment};
use spottally_storage::OverrideRecord;

/// The claim values a consumer should display and tally for one comment:
/// each field is the override value when present, else the baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveClaim {
    pub spots: u32,
    /// Normalized payer; `"unknown"` when neither baseline nor override
    /// yields a usable name.
    pub payer: String,
    /// Normalized beneficiary; may be empty.
    pub beneficiary: String,
    /// Skipped comments stay visible but are excluded from tallies.
    pub skipped: bool,
}

/// Resolve the effective claim for one comment. The baseline is read,
/// never modified; overridden names are normalized on the way out since
/// they come from free-text human input.
pub fn effective(baseline: &ParsedComment, ov: Option<&OverrideRecord>) -> EffectiveClaim {
    let spots = ov
        .and_then(|o| o.override_spots)
        .unwrap_or(baseline.spots);

    let payer = ov
        .and_then(|o| o.override_payer.as_deref())
        .map(normalize_name)
        .unwrap_or_else(|| baseline.payer.clone());
    let payer = if payer.is_empty() {
        "unknown".to_owned()
    } else {
        payer
    };

    let beneficiary = ov
        .and_then(|o| o.override_beneficiary.as_deref())
        .map(normalize_name)
        .unwrap_or_else(|| baseline.beneficiary.clone());

    EffectiveClaim {
        spots,
        payer,
        beneficiary,
        skipped: ov.is_some_and(|o| o.skipped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spottally_core::parse_comment;
    use spottally_storage::OverridePatch;

    fn override_record(patch: OverridePatch) -> OverrideRecord {
        let mut rec = OverrideRecord::initial("r1", "c1", patch);
        rec.version = 1;
        rec
    }

    #[test]
    fn baseline_wins_without_override() {
        let baseline = parse_comment("3 randoms", "Author", "c1");
        let e = effective(&baseline, None);
        assert_eq!(e.spots, 3);
        assert_eq!(e.payer, "author");
        assert_eq!(e.beneficiary, "author");
        assert!(!e.skipped);
    }

    #[test]
    fn override_fields_shadow_baseline_fields() {
        let baseline = parse_comment("3 randoms", "Author", "c1");
        let ov = override_record(OverridePatch {
            override_spots: Some(5),
            override_payer: Some("u/Fuzzy!".into()),
            ..Default::default()
        });
        let e = effective(&baseline, Some(&ov));
        assert_eq!(e.spots, 5);
        assert_eq!(e.payer, "ufuzzy");
        // unpatched field falls through to the baseline
        assert_eq!(e.beneficiary, "author");
    }

    #[test]
    fn empty_payer_becomes_unknown() {
        let baseline = parse_comment("2 spots", "", "c1");
        let e = effective(&baseline, None);
        assert_eq!(e.payer, "unknown");
    }

    #[test]
    fn skipped_flag_carries_through() {
        let baseline = parse_comment("2 spots", "Author", "c1");
        let ov = override_record(OverridePatch {
            skipped: Some(true),
            ..Default::default()
        });
        assert!(effective(&baseline, Some(&ov)).skipped);
    }
}
