//! End-to-end extraction conformance: realistic raffle comments in, full
//! records out. Cases mirror the community phrasing the engine was built
//! against, typos included.

use spottally_core::{parse_comment, ParsedComment};

struct Case {
    body: &'static str,
    specific: &'static [u32],
    random: u32,
    payer: &'static str,
    beneficiary: &'static str,
    is_tab: bool,
    needs_review: bool,
}

const AUTHOR: &str = "Claimant_99";

fn check(case: &Case) -> ParsedComment {
    let rec = parse_comment(case.body, AUTHOR, "t-1");
    assert_eq!(
        rec.specific_spots, case.specific,
        "specific spots for {:?}",
        case.body
    );
    assert_eq!(rec.random_spots, case.random, "random spots for {:?}", case.body);
    assert_eq!(rec.payer, case.payer, "payer for {:?}", case.body);
    assert_eq!(
        rec.beneficiary, case.beneficiary,
        "beneficiary for {:?}",
        case.body
    );
    assert_eq!(rec.is_tab, case.is_tab, "is_tab for {:?}", case.body);
    assert_eq!(
        rec.needs_review, case.needs_review,
        "needs_review for {:?}",
        case.body
    );
    assert_eq!(
        rec.spots as usize,
        rec.specific_spots.len() + rec.random_spots as usize,
        "totals invariant for {:?}",
        case.body
    );
    rec
}

#[test]
fn documented_properties() {
    let cases = [
        Case {
            body: "30 spots",
            specific: &[],
            random: 30,
            payer: "claimant_99",
            beneficiary: "claimant_99",
            is_tab: false,
            needs_review: false,
        },
        Case {
            body: "spot 5, spot 7",
            specific: &[5, 7],
            random: 0,
            payer: "claimant_99",
            beneficiary: "claimant_99",
            is_tab: false,
            needs_review: false,
        },
        Case {
            body: "tabbed by Fuzzy",
            specific: &[],
            random: 0,
            payer: "fuzzy",
            beneficiary: "claimant_99",
            is_tab: true,
            needs_review: false,
        },
        Case {
            body: "tab",
            specific: &[],
            random: 0,
            payer: "claimant_99",
            beneficiary: "claimant_99",
            is_tab: true,
            needs_review: true,
        },
        Case {
            body: "4-10",
            specific: &[4, 5, 6, 7, 8, 9, 10],
            random: 0,
            payer: "claimant_99",
            beneficiary: "claimant_99",
            is_tab: false,
            needs_review: false,
        },
        Case {
            body: "10-4",
            specific: &[],
            random: 0,
            payer: "claimant_99",
            beneficiary: "claimant_99",
            is_tab: false,
            needs_review: true,
        },
        Case {
            body: "",
            specific: &[],
            random: 0,
            payer: "claimant_99",
            beneficiary: "claimant_99",
            is_tab: false,
            needs_review: false,
        },
        Case {
            body: "#5",
            specific: &[],
            random: 0,
            payer: "claimant_99",
            beneficiary: "claimant_99",
            is_tab: false,
            needs_review: true,
        },
    ];
    for case in &cases {
        check(case);
    }
}

#[test]
fn realistic_comments() {
    let cases = [
        Case {
            body: "I'll take 3 randoms and spot 14, tabbed by Fuzzy pls",
            specific: &[14],
            random: 3,
            payer: "fuzzy",
            beneficiary: "claimant_99",
            is_tab: true,
            needs_review: false,
        },
        Case {
            body: "40,161,162 wff to kind_soul",
            specific: &[40, 161, 162],
            random: 0,
            payer: "kind_soul",
            beneficiary: "kind_soul",
            is_tab: true,
            needs_review: false,
        },
        Case {
            body: "couple randoms for my_buddy, on Wuzzy's tab",
            specific: &[],
            random: 2,
            payer: "wuzzy",
            beneficiary: "my_buddy",
            is_tab: true,
            needs_review: false,
        },
        Case {
            body: "1 10 19 24 28 please",
            specific: &[1, 10, 19, 24, 28],
            random: 0,
            payer: "claimant_99",
            beneficiary: "claimant_99",
            is_tab: false,
            needs_review: false,
        },
        Case {
            body: "2 spots and another random, Buddy will pay",
            specific: &[],
            random: 3,
            payer: "buddy",
            beneficiary: "claimant_99",
            is_tab: false,
            needs_review: false,
        },
        Case {
            body: "spot #12 and 15-17 for me",
            specific: &[12, 15, 16, 17],
            random: 0,
            payer: "claimant_99",
            beneficiary: "claimant_99",
            is_tab: false,
            needs_review: false,
        },
        Case {
            // "randoms" with no count resolves nothing; the plural is not
            // in the hint-token set either, so the record stays clean.
            body: "in for randoms",
            specific: &[],
            random: 0,
            payer: "claimant_99",
            beneficiary: "randoms",
            is_tab: false,
            needs_review: false,
        },
        Case {
            body: "good luck all!",
            specific: &[],
            random: 0,
            payer: "claimant_99",
            beneficiary: "claimant_99",
            is_tab: false,
            needs_review: false,
        },
    ];
    for case in &cases {
        check(case);
    }
}

#[test]
fn deterministic_output() {
    let a = parse_comment("5 spots tabed by Fuzzy, 7-9 for pal", AUTHOR, "t-2");
    let b = parse_comment("5 spots tabed by Fuzzy, 7-9 for pal", AUTHOR, "t-2");
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn specific_spots_strictly_ascending() {
    for body in [
        "9 3 9 3 1",
        "spot 4 and 2-6 plus 4, 5",
        "1-3 2-5 spot 2",
        "7,7,7",
    ] {
        let rec = parse_comment(body, AUTHOR, "t-3");
        assert!(
            rec.specific_spots.windows(2).all(|w| w[0] < w[1]),
            "not strictly ascending for {:?}: {:?}",
            body,
            rec.specific_spots
        );
    }
}

#[test]
fn author_normalization_applies_to_defaults() {
    let rec = parse_comment("one random", "u/Mixed-Case_User", "t-4");
    assert_eq!(rec.author, "umixedcase_user");
    assert_eq!(rec.payer, "umixedcase_user");
    assert_eq!(rec.beneficiary, "umixedcase_user");
}
