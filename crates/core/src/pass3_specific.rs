//! Pass 3: specific-spot extraction.
//!
//! Runs only after all random material has been stripped, so every number
//! still in the buffer is a candidate spot index. Ordered sub-passes:
//! ranges, labeled singles, comma lists, bare integers; the collected
//! range set is merged last. Only the final sequence is ordered -- it is
//! deduplicated and sorted ascending at the end.

use std::collections::BTreeSet;

use crate::scan::{Buffer, Spanned, Token};

/// Widest range (`A-B` inclusive) that will be expanded. A wider span is
/// consumed without expanding so the engine stays linear in input size.
pub const MAX_RANGE_SPAN: u32 = 10_000;

/// Consume remaining numeric material as concrete spot indices. Returns
/// the distinct indices in ascending order.
pub fn extract(buf: &mut Buffer) -> Vec<u32> {
    let mut found = BTreeSet::new();

    let range_set = ranges(buf);
    labeled_singles(buf, &mut found);
    comma_lists(buf, &mut found);
    bare_integers(buf, &mut found);
    found.extend(range_set);

    // Spot indices are positive.
    found.remove(&0);
    found.into_iter().collect()
}

/// Sub-pass 1: `<A>-<B>` ranges. The shape is always consumed; it expands
/// only when `A <= B` and the width is sane. An inverted range yields
/// nothing -- not reversed, not an error.
fn ranges(buf: &mut Buffer) -> BTreeSet<u32> {
    let tokens = buf.tokens();
    let mut set = BTreeSet::new();
    let mut spans = Vec::new();
    let mut i = 0;
    while i + 2 < tokens.len() {
        let (a, b) = match (&tokens[i].token, &tokens[i + 1].token, &tokens[i + 2].token) {
            (Token::Int(a), Token::Dash, Token::Int(b)) => (*a, *b),
            _ => {
                i += 1;
                continue;
            }
        };
        if !buf.blank_between(tokens[i].end, tokens[i + 1].start)
            || !buf.blank_between(tokens[i + 1].end, tokens[i + 2].start)
        {
            i += 1;
            continue;
        }
        if a <= b && b - a <= MAX_RANGE_SPAN {
            set.extend(a..=b);
        }
        spans.push((tokens[i].start, tokens[i + 2].end));
        i += 3;
    }
    for &(start, end) in &spans {
        buf.erase(start, end);
    }
    set
}

/// Sub-pass 2: labeled singles `spot #?<N>` -- one index each.
fn labeled_singles(buf: &mut Buffer, found: &mut BTreeSet<u32>) {
    let tokens = buf.tokens();
    let mut spans = Vec::new();
    let mut i = 0;
    while i + 1 < tokens.len() {
        if !matches!(&tokens[i].token, Token::Word(w) if w == "spot") {
            i += 1;
            continue;
        }
        match labeled_index(buf, &tokens, i) {
            Some((n, end, next)) => {
                found.insert(n);
                spans.push((tokens[i].start, end));
                i = next;
            }
            None => i += 1,
        }
    }
    for &(start, end) in &spans {
        buf.erase(start, end);
    }
}

/// Match the `#?<N>` tail after a "spot" label at token `i`. The hash, if
/// present, must be glued to the digits.
fn labeled_index(buf: &Buffer, tokens: &[Spanned], i: usize) -> Option<(u32, usize, usize)> {
    let label_end = tokens[i].end;
    let t = tokens.get(i + 1)?;
    match &t.token {
        Token::Int(n) => {
            if buf.blank_between(label_end, t.start) && buf.boundary_after(t.end) {
                Some((*n, t.end, i + 2))
            } else {
                None
            }
        }
        Token::Hash => {
            let d = tokens.get(i + 2)?;
            let Token::Int(n) = d.token else { return None };
            if buf.blank_between(label_end, t.start)
                && d.start == t.end
                && buf.boundary_after(d.end)
            {
                Some((n, d.end, i + 3))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Sub-pass 3: comma lists of two or more integers. Elements are
/// collected, then every comma in the buffer is stripped, turning any
/// remainder into whitespace-separated tokens for the bare-integer pass.
fn comma_lists(buf: &mut Buffer, found: &mut BTreeSet<u32>) {
    let tokens = buf.tokens();
    let mut i = 0;
    while i < tokens.len() {
        let Token::Int(first) = tokens[i].token else {
            i += 1;
            continue;
        };
        if !buf.boundary_before(tokens[i].start) {
            i += 1;
            continue;
        }

        // Collect the longest comma-joined chain, then trim from the right
        // until the final element sits on a word boundary.
        let mut elems = vec![first];
        let mut ends = vec![tokens[i].end];
        let mut j = i;
        while j + 2 < tokens.len() {
            let (c, d) = (&tokens[j + 1], &tokens[j + 2]);
            let Token::Int(n) = d.token else { break };
            if c.token == Token::Comma
                && buf.blank_between(tokens[j].end, c.start)
                && buf.blank_between(c.end, d.start)
            {
                elems.push(n);
                ends.push(d.end);
                j += 2;
            } else {
                break;
            }
        }
        while elems.len() >= 2 && !buf.boundary_after(ends[ends.len() - 1]) {
            elems.pop();
            ends.pop();
            j -= 2;
        }

        if elems.len() >= 2 {
            found.extend(elems);
            i = j + 1;
        } else {
            i += 1;
        }
    }

    // Strip every comma, matched or not.
    let commas: Vec<(usize, usize)> = buf
        .tokens()
        .into_iter()
        .filter(|t| t.token == Token::Comma)
        .map(|t| (t.start, t.end))
        .collect();
    for (start, end) in commas {
        buf.erase(start, end);
    }
}

/// Sub-pass 4: every remaining standalone integer is a spot index. An
/// integer glued to a `#` marker is not standalone -- without a "spot"
/// label it is ambiguous, and the review flag picks it up instead.
fn bare_integers(buf: &mut Buffer, found: &mut BTreeSet<u32>) {
    for t in buf.tokens() {
        if let Token::Int(n) = t.token {
            if buf.boundary_before(t.start)
                && buf.boundary_after(t.end)
                && !buf.hash_attached(t.start)
            {
                found.insert(n);
            }
        }
    }
}
