//! Working-buffer scanner.
//!
//! The extraction passes do not see raw strings: they see a [`Buffer`] of
//! chars that lexes to spanned tokens and supports span erasure. Erasing a
//! match blanks its chars to spaces, so a later sub-pass re-lexing the
//! buffer can never interpret the same token twice, and gap checks ("only
//! whitespace between these two tokens") stay answerable against the live
//! text. Deletions are one-way; the buffer only ever shrinks in content.

use crate::normalize::normalize_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Run of letters/underscores, lowercased. Digit runs are lexed
    /// separately so that "spot5" still splits into a label and an index.
    Word(String),
    /// Run of ASCII digits. Runs that overflow `u32` are dropped by the
    /// lexer: malformed numeric tokens are skipped, never surfaced.
    Int(u32),
    Dash,
    Comma,
    Hash,
    Apostrophe,
}

/// A token with its half-open char-index span in the buffer.
#[derive(Debug, Clone)]
pub struct Spanned {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone)]
pub struct Buffer {
    chars: Vec<char>,
}

impl Buffer {
    pub fn new(text: &str) -> Self {
        Buffer {
            chars: text.chars().collect(),
        }
    }

    /// Lex the current buffer contents. Called afresh by every sub-pass so
    /// tokens always reflect prior erasures.
    pub fn tokens(&self) -> Vec<Spanned> {
        let chars = &self.chars;
        let mut tokens = Vec::new();
        let mut pos = 0usize;

        while pos < chars.len() {
            let c = chars[pos];

            if c.is_alphabetic() || c == '_' {
                let start = pos;
                while pos < chars.len() && (chars[pos].is_alphabetic() || chars[pos] == '_') {
                    pos += 1;
                }
                let word: String = chars[start..pos]
                    .iter()
                    .flat_map(|c| c.to_lowercase())
                    .collect();
                tokens.push(Spanned {
                    token: Token::Word(word),
                    start,
                    end: pos,
                });
                continue;
            }

            if c.is_ascii_digit() {
                let start = pos;
                while pos < chars.len() && chars[pos].is_ascii_digit() {
                    pos += 1;
                }
                let s: String = chars[start..pos].iter().collect();
                if let Ok(n) = s.parse::<u32>() {
                    tokens.push(Spanned {
                        token: Token::Int(n),
                        start,
                        end: pos,
                    });
                }
                continue;
            }

            let token = match c {
                '-' => Some(Token::Dash),
                ',' => Some(Token::Comma),
                '#' => Some(Token::Hash),
                '\'' | '\u{2019}' => Some(Token::Apostrophe),
                _ => None,
            };
            if let Some(token) = token {
                tokens.push(Spanned {
                    token,
                    start: pos,
                    end: pos + 1,
                });
            }
            pos += 1;
        }

        tokens
    }

    /// Blank a char span to spaces. One-way: erased text never comes back.
    pub fn erase(&mut self, start: usize, end: usize) {
        let end = end.min(self.chars.len());
        for c in &mut self.chars[start..end] {
            *c = ' ';
        }
    }

    /// True when nothing but whitespace separates two char positions.
    /// Zero-width gaps count as blank.
    pub fn blank_between(&self, from: usize, to: usize) -> bool {
        from <= to && self.chars[from..to].iter().all(|c| c.is_whitespace())
    }

    /// Like [`Buffer::blank_between`] but the gap must be at least one
    /// char wide: keyword-to-name transitions need real separation.
    pub fn spaced_between(&self, from: usize, to: usize) -> bool {
        from < to && self.blank_between(from, to)
    }

    /// True when the char before `pos` (if any) cannot extend a word,
    /// i.e. an integer starting at `pos` stands on a word boundary.
    pub fn boundary_before(&self, pos: usize) -> bool {
        pos == 0 || !is_word_char(self.chars[pos - 1])
    }

    /// True when the char at `pos` (if any) cannot extend a word,
    /// i.e. an integer ending at `pos` stands on a word boundary.
    pub fn boundary_after(&self, pos: usize) -> bool {
        pos >= self.chars.len() || !is_word_char(self.chars[pos])
    }

    /// True when an integer starting at `pos` is directly attached to a
    /// `#` marker ("#5"). Such integers are left to the review flag.
    pub fn hash_attached(&self, pos: usize) -> bool {
        pos > 0 && self.chars[pos - 1] == '#'
    }

    /// Capture a username run starting at token `i`: the maximal sequence
    /// of strictly adjacent word/integer/dash tokens, normalized. Returns
    /// the candidate, its char span, and the index of the first token past
    /// the run. `None` when token `i` cannot start a name.
    pub fn name_run(&self, tokens: &[Spanned], i: usize) -> Option<(String, (usize, usize), usize)> {
        let first = tokens.get(i)?;
        if !name_token(&first.token) {
            return None;
        }
        let start = first.start;
        let mut end = first.end;
        let mut j = i + 1;
        while let Some(t) = tokens.get(j) {
            if t.start == end && name_token(&t.token) {
                end = t.end;
                j += 1;
            } else {
                break;
            }
        }
        let raw: String = self.chars[start..end].iter().collect();
        Some((normalize_name(&raw), (start, end), j))
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn name_token(token: &Token) -> bool {
    matches!(token, Token::Word(_) | Token::Int(_) | Token::Dash)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(buf: &Buffer) -> Vec<Token> {
        buf.tokens().into_iter().map(|s| s.token).collect()
    }

    #[test]
    fn splits_digit_and_letter_runs() {
        let buf = Buffer::new("spot5 4randoms");
        assert_eq!(
            kinds(&buf),
            vec![
                Token::Word("spot".into()),
                Token::Int(5),
                Token::Int(4),
                Token::Word("randoms".into()),
            ]
        );
    }

    #[test]
    fn erasure_leaves_whitespace() {
        let mut buf = Buffer::new("take 5 spots now");
        let toks = buf.tokens();
        // erase "5 spots"
        buf.erase(toks[1].start, toks[2].end);
        assert_eq!(
            kinds(&buf),
            vec![Token::Word("take".into()), Token::Word("now".into())]
        );
    }

    #[test]
    fn erasure_clamps_past_end() {
        let mut buf = Buffer::new("spot 5");
        let toks = buf.tokens();
        buf.erase(toks[1].start, toks[1].end + 40);
        assert_eq!(kinds(&buf), vec![Token::Word("spot".into())]);
    }

    #[test]
    fn gap_checks_see_junk() {
        let buf = Buffer::new("5 . spots");
        let toks = buf.tokens();
        assert!(!buf.blank_between(toks[0].end, toks[1].start));
    }

    #[test]
    fn overflowing_integers_are_dropped() {
        let buf = Buffer::new("99999999999999999999 spots");
        assert_eq!(kinds(&buf), vec![Token::Word("spots".into())]);
    }

    #[test]
    fn name_run_joins_adjacent_pieces() {
        let buf = Buffer::new("tabbed by Fuzz-Man_99 ok");
        let toks = buf.tokens();
        // run starts at "fuzz"
        let (name, _, next) = buf.name_run(&toks, 2).unwrap();
        assert_eq!(name, "fuzzman_99");
        assert_eq!(toks[next].token, Token::Word("ok".into()));
    }

    #[test]
    fn boundaries() {
        let buf = Buffer::new("a5 #6 7");
        let toks = buf.tokens();
        // "5" in "a5" is glued to a letter
        let five = toks.iter().find(|t| t.token == Token::Int(5)).unwrap();
        assert!(!buf.boundary_before(five.start));
        let six = toks.iter().find(|t| t.token == Token::Int(6)).unwrap();
        assert!(buf.boundary_before(six.start) && buf.hash_attached(six.start));
        let seven = toks.iter().find(|t| t.token == Token::Int(7)).unwrap();
        assert!(buf.boundary_before(seven.start) && buf.boundary_after(seven.end));
    }
}
