//! Pass 2: random-spot extraction.
//!
//! Four ordered sub-passes, each of which counts its matches and erases
//! them from the buffer before the next sub-pass runs. The "N spots"
//! idiom goes first: by community convention it always means N
//! unspecified spots, and its digits must be gone before any other
//! numeric interpretation sees them.

use crate::lexicon::{word_number, COUNT_QUALIFIERS, IMPLICIT_SINGLE_LEADS, IMPLICIT_SINGLE_NOUNS, RANDOM_NOUNS};
use crate::scan::{Buffer, Spanned, Token};

/// Consume every phrase denoting unspecified spot counts and return the
/// total. The buffer is left with the matched spans blanked out.
pub fn extract(buf: &mut Buffer) -> u32 {
    let mut total = 0u32;
    total = total.saturating_add(n_spots(buf));
    total = total.saturating_add(numeric_randoms(buf));
    total = total.saturating_add(word_randoms(buf));
    total = total.saturating_add(implicit_singles(buf));
    total
}

/// Sub-pass 1: `<N> spot(s)` -- N random spots.
fn n_spots(buf: &mut Buffer) -> u32 {
    let tokens = buf.tokens();
    let mut count = 0u32;
    let mut spans = Vec::new();
    let mut i = 0;
    while i + 1 < tokens.len() {
        if let (Token::Int(n), Token::Word(w)) = (&tokens[i].token, &tokens[i + 1].token) {
            if (w == "spot" || w == "spots")
                && buf.boundary_before(tokens[i].start)
                && buf.blank_between(tokens[i].end, tokens[i + 1].start)
            {
                count = count.saturating_add(*n);
                spans.push((tokens[i].start, tokens[i + 1].end));
                i += 2;
                continue;
            }
        }
        i += 1;
    }
    erase_all(buf, &spans);
    count
}

/// Sub-pass 2: `<N> [more|additional] rand/random(s)`.
fn numeric_randoms(buf: &mut Buffer) -> u32 {
    let tokens = buf.tokens();
    let mut count = 0u32;
    let mut spans = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let Token::Int(n) = tokens[i].token else {
            i += 1;
            continue;
        };
        if let Some((end, next)) = random_phrase_tail(buf, &tokens, i) {
            count = count.saturating_add(n);
            spans.push((tokens[i].start, end));
            i = next;
        } else {
            i += 1;
        }
    }
    erase_all(buf, &spans);
    count
}

/// Sub-pass 3: word-numeral randoms ("couple randoms", "a random").
fn word_randoms(buf: &mut Buffer) -> u32 {
    let tokens = buf.tokens();
    let mut count = 0u32;
    let mut spans = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let numeral = match &tokens[i].token {
            Token::Word(w) => word_number(w),
            _ => None,
        };
        match numeral {
            Some(n) => {
                if let Some((end, next)) = random_phrase_tail(buf, &tokens, i) {
                    count = count.saturating_add(n);
                    spans.push((tokens[i].start, end));
                    i = next;
                } else {
                    i += 1;
                }
            }
            None => i += 1,
        }
    }
    erase_all(buf, &spans);
    count
}

/// Sub-pass 4: implicit singletons -- "another random", "extra rand" each
/// contribute exactly one.
fn implicit_singles(buf: &mut Buffer) -> u32 {
    let tokens = buf.tokens();
    let mut count = 0u32;
    let mut spans = Vec::new();
    let mut i = 0;
    while i + 1 < tokens.len() {
        if let (Token::Word(a), Token::Word(b)) = (&tokens[i].token, &tokens[i + 1].token) {
            if IMPLICIT_SINGLE_LEADS.contains(&a.as_str())
                && IMPLICIT_SINGLE_NOUNS.contains(&b.as_str())
                && buf.blank_between(tokens[i].end, tokens[i + 1].start)
            {
                count = count.saturating_add(1);
                spans.push((tokens[i].start, tokens[i + 1].end));
                i += 2;
                continue;
            }
        }
        i += 1;
    }
    erase_all(buf, &spans);
    count
}

/// Match the `[more|additional] <random-noun>` tail following a count at
/// token `i`. Returns the char end of the phrase and the index of the
/// first token past it.
fn random_phrase_tail(buf: &Buffer, tokens: &[Spanned], i: usize) -> Option<(usize, usize)> {
    let mut j = i + 1;
    let mut prev_end = tokens[i].end;

    if let Some(t) = tokens.get(j) {
        if matches!(&t.token, Token::Word(w) if COUNT_QUALIFIERS.contains(&w.as_str()))
            && buf.blank_between(prev_end, t.start)
        {
            prev_end = t.end;
            j += 1;
        }
    }

    let t = tokens.get(j)?;
    let Token::Word(w) = &t.token else { return None };
    if RANDOM_NOUNS.contains(&w.as_str()) && buf.blank_between(prev_end, t.start) {
        Some((t.end, j + 1))
    } else {
        None
    }
}

fn erase_all(buf: &mut Buffer, spans: &[(usize, usize)]) {
    for &(start, end) in spans {
        buf.erase(start, end);
    }
}
