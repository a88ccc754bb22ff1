//! Pass 1: payer / tab detection.
//!
//! Interprets the ordered [`PAYER_RULES`] table over the raw body: first
//! match wins, list order is the only tie-break. A rule is tried at its
//! first occurrence only; a captured name that fails validation does not
//! retry the same rule further along the text.

use crate::lexicon::{is_tab_inflection, Pat, PAYER_RULES, TAB_KEYWORDS};
use crate::normalize::{is_valid_candidate, normalize_name};
use crate::scan::{Buffer, Spanned, Token};

/// Outcome of payer/tab detection.
pub struct PayerFacts {
    /// Normalized payer; defaults to the normalized author.
    pub payer: String,
    pub is_tab: bool,
    /// A tab keyword was present but no payer could be resolved, so the
    /// claim must not be silently attributed to the author.
    pub unresolved_tab: bool,
}

pub fn detect(raw: &Buffer, author: &str) -> PayerFacts {
    let tokens = raw.tokens();
    let mut facts = PayerFacts {
        payer: normalize_name(author),
        is_tab: false,
        unresolved_tab: false,
    };

    for rule in PAYER_RULES {
        if let Some(candidate) = first_match(raw, &tokens, rule) {
            if is_valid_candidate(&candidate) {
                facts.payer = candidate;
                // A tab is only implied by a literal tab/payment keyword,
                // not by the pattern match itself ("X will pay" is not a tab).
                facts.is_tab = has_tab_keyword(raw, &tokens);
                break;
            }
        }
    }

    if !facts.is_tab && has_bare_tab_word(&tokens) {
        facts.is_tab = true;
        facts.unresolved_tab = true;
    }

    facts
}

/// Try one rule at every position, left to right; return the name captured
/// by the first full structural match, valid or not.
fn first_match(buf: &Buffer, tokens: &[Spanned], rule: &[Pat]) -> Option<String> {
    (0..tokens.len()).find_map(|i| match_at(buf, tokens, rule, i))
}

fn match_at(buf: &Buffer, tokens: &[Spanned], rule: &[Pat], start: usize) -> Option<String> {
    let mut i = start;
    let mut prev_end: Option<usize> = None;
    let mut name = None;

    for pat in rule {
        match pat {
            Pat::TabWord => {
                let t = tokens.get(i)?;
                let Token::Word(w) = &t.token else { return None };
                if !is_tab_inflection(w) || !gap_ok(buf, prev_end, t.start) {
                    return None;
                }
                prev_end = Some(t.end);
                i += 1;
            }
            Pat::Lit(lit) => {
                let t = tokens.get(i)?;
                let Token::Word(w) = &t.token else { return None };
                if w != lit || !gap_ok(buf, prev_end, t.start) {
                    return None;
                }
                prev_end = Some(t.end);
                i += 1;
            }
            Pat::OptLit(lit) => {
                if let Some(t) = tokens.get(i) {
                    if matches!(&t.token, Token::Word(w) if w == lit)
                        && gap_ok(buf, prev_end, t.start)
                    {
                        prev_end = Some(t.end);
                        i += 1;
                    }
                }
            }
            Pat::Name => {
                let (candidate, (run_start, run_end), next) = buf.name_run(tokens, i)?;
                if !gap_ok(buf, prev_end, run_start) {
                    return None;
                }
                name = Some(candidate);
                prev_end = Some(run_end);
                i = next;
            }
            Pat::Possessive => {
                // "fuzzy's": apostrophe glued to the name, optional glued "s".
                if let Some(t) = tokens.get(i) {
                    if t.token == Token::Apostrophe && Some(t.start) == prev_end {
                        prev_end = Some(t.end);
                        i += 1;
                        if let Some(s) = tokens.get(i) {
                            if matches!(&s.token, Token::Word(w) if w == "s")
                                && Some(s.start) == prev_end
                            {
                                prev_end = Some(s.end);
                                i += 1;
                            }
                        }
                    }
                }
            }
        }
    }

    name
}

/// Whitespace-only, at-least-one-char gap between the previous element
/// and the next token. The first element of a rule has no gap requirement.
fn gap_ok(buf: &Buffer, prev_end: Option<usize>, next_start: usize) -> bool {
    match prev_end {
        Some(end) => buf.spaced_between(end, next_start),
        None => true,
    }
}

/// Literal tab/payment keyword anywhere in the body: `tab`, `tabbed`,
/// `wff`, or the `paid by` bigram.
fn has_tab_keyword(buf: &Buffer, tokens: &[Spanned]) -> bool {
    if has_bare_tab_word(tokens) {
        return true;
    }
    tokens.windows(2).any(|w| {
        matches!(&w[0].token, Token::Word(a) if a == "paid")
            && matches!(&w[1].token, Token::Word(b) if b == "by")
            && buf.blank_between(w[0].end, w[1].start)
    })
}

fn has_bare_tab_word(tokens: &[Spanned]) -> bool {
    tokens
        .iter()
        .any(|t| matches!(&t.token, Token::Word(w) if TAB_KEYWORDS.contains(&w.as_str())))
}
