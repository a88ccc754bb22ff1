//! Pass 5: review-flag evaluation.
//!
//! Biased toward over-flagging: a record that merely looks like it makes
//! a numeric claim but extracted nothing goes to a human instead of being
//! silently tallied as zero.

use crate::lexicon::HINT_WORDS;
use crate::scan::{Buffer, Token};

/// Decide `needs_review` from residual ambiguity: either the payer pass
/// saw a tab keyword it could not attribute, or the total is zero while
/// the raw body still contains claim vocabulary (`random`, `rand`,
/// `spot`, `spots`, a `#`, or a standalone integer).
pub fn evaluate(raw: &Buffer, spots: u32, unresolved_tab: bool) -> bool {
    if unresolved_tab {
        return true;
    }
    spots == 0 && has_claim_hint(raw)
}

fn has_claim_hint(raw: &Buffer) -> bool {
    raw.tokens().iter().any(|t| match &t.token {
        Token::Word(w) => HINT_WORDS.contains(&w.as_str()),
        Token::Hash => true,
        Token::Int(_) => raw.boundary_before(t.start) && raw.boundary_after(t.end),
        _ => false,
    })
}
