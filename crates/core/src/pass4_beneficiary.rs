//! Pass 4: beneficiary resolution.
//!
//! Deliberately conservative: a single `for X` / `to X` pattern over the
//! original body (not the stripped buffer, since the phrasing commonly
//! sits next to names and numbers other passes already consumed). Only
//! the first match is considered; anything else defaults to the author.

use crate::normalize::{is_valid_candidate, normalize_name};
use crate::scan::{Buffer, Token};

pub fn resolve(raw: &Buffer, author: &str) -> String {
    let tokens = raw.tokens();
    for (i, t) in tokens.iter().enumerate() {
        if !matches!(&t.token, Token::Word(w) if w == "for" || w == "to") {
            continue;
        }
        // A keyword not followed by a name is not a match; keep scanning
        // for the next keyword. A full match, valid or not, ends the search.
        if let Some((candidate, (run_start, _), _)) = raw.name_run(&tokens, i + 1) {
            if raw.spaced_between(t.end, run_start) {
                if is_valid_candidate(&candidate) {
                    return candidate;
                }
                break;
            }
        }
    }
    normalize_name(author)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(body: &str) -> String {
        resolve(&Buffer::new(body), "Author_1")
    }

    #[test]
    fn for_clause_wins() {
        assert_eq!(run("2 randoms for Wuzzy"), "wuzzy");
        assert_eq!(run("spot 4 to Fuzz-Man"), "fuzzman");
    }

    #[test]
    fn defaults_to_author() {
        assert_eq!(run("3 randoms"), "author_1");
        assert_eq!(run(""), "author_1");
    }

    #[test]
    fn first_match_only() {
        // "for me" captures the stop word "me"; the later "for wuzzy" is
        // never consulted.
        assert_eq!(run("one for me and one for wuzzy"), "author_1");
    }

    #[test]
    fn stop_word_candidate_rejected() {
        assert_eq!(run("2 spots for please"), "author_1");
    }
}
