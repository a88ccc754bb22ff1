//! Five-pass extraction pipeline: raw comment -> [`ParsedComment`].
//!
//! This is a thin orchestrator that calls each pass module in order.
//! Passes 2 and 3 share one working buffer and erase what they consume;
//! passes 1, 4 and 5 read the untouched raw body.

use crate::normalize::normalize_name;
use crate::record::ParsedComment;
use crate::scan::Buffer;
use crate::{pass1_payer, pass2_random, pass3_specific, pass4_beneficiary, pass5_review};

/// Extract structured claim facts from one comment. Pure and total: any
/// input, including empty or adversarial text, yields a complete record.
pub fn parse_comment(body: &str, author: &str, comment_id: &str) -> ParsedComment {
    let raw = Buffer::new(body);

    // Pass 1: payer / tab detection (raw body)
    let payer_facts = pass1_payer::detect(&raw, author);

    // Passes 2+3: random then specific extraction over the shrinking buffer
    let mut working = raw.clone();
    let random_spots = pass2_random::extract(&mut working);
    let specific_spots = pass3_specific::extract(&mut working);

    // Pass 4: beneficiary (raw body)
    let beneficiary = pass4_beneficiary::resolve(&raw, author);

    // Pass 5: review flag, then final assembly
    let spots = (specific_spots.len() as u32).saturating_add(random_spots);
    let needs_review = pass5_review::evaluate(&raw, spots, payer_facts.unresolved_tab);

    ParsedComment {
        comment_id: comment_id.to_owned(),
        author: normalize_name(author),
        raw: body.to_owned(),
        spots,
        specific_spots,
        random_spots,
        beneficiary,
        payer: payer_facts.payer,
        is_tab: payer_facts.is_tab,
        needs_review,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_invariant_holds() {
        let rec = parse_comment("5 spots plus 3-4 and spot 9", "user", "c1");
        assert_eq!(rec.spots as usize, rec.specific_spots.len() + rec.random_spots as usize);
        assert_eq!(rec.random_spots, 5);
        assert_eq!(rec.specific_spots, vec![3, 4, 9]);
    }

    #[test]
    fn raw_text_is_preserved() {
        let rec = parse_comment("  Weird   SPACING!! ", "user", "c1");
        assert_eq!(rec.raw, "  Weird   SPACING!! ");
    }

    #[test]
    fn record_serializes_camel_case() {
        let rec = parse_comment("spot 3", "User", "c9");
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["commentId"], "c9");
        assert_eq!(v["specificSpots"], serde_json::json!([3]));
        assert_eq!(v["randomSpots"], 0);
        assert_eq!(v["isTab"], false);
        assert_eq!(v["needsReview"], false);
    }
}
