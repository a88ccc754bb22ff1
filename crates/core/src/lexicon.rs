//! Fixed vocabulary of the extraction engine.
//!
//! Everything here is configuration data, not control flow: ordered
//! immutable rule tables interpreted by the pass modules. Table order is
//! load-bearing for [`PAYER_RULES`] (first match wins) and must be
//! preserved exactly.

/// Word-numeral lexicon for random-spot phrases ("couple randoms").
pub const WORD_NUMBERS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("thirty", 30),
    // informal quantifiers
    ("a", 1),
    ("an", 1),
    ("single", 1),
    ("couple", 2),
    ("pair", 2),
    ("few", 3),
];

/// Grammatical particles that must never be mistaken for usernames.
pub const STOP_WORDS: &[&str] = &[
    "by", "to", "for", "and", "with", "on", "pls", "plz", "please", "me", "sir", "senor",
];

/// Nouns that mark a count phrase as claiming unspecified spots.
pub const RANDOM_NOUNS: &[&str] = &["random", "rand", "rands", "randoms"];

/// Optional qualifier between a count and a random noun ("2 more randoms").
pub const COUNT_QUALIFIERS: &[&str] = &["more", "additional"];

/// Leading words of the implicit-singleton idiom ("another random").
pub const IMPLICIT_SINGLE_LEADS: &[&str] = &["another", "extra"];

/// Noun forms accepted by the implicit-singleton idiom (no plurals).
pub const IMPLICIT_SINGLE_NOUNS: &[&str] = &["random", "rand"];

/// Words that mark a claim as financially owed rather than self-paid.
pub const TAB_KEYWORDS: &[&str] = &["tab", "tabbed", "wff"];

/// Words that hint the body is making a numeric claim, used by the
/// review-flag evaluator when extraction produced zero spots.
pub const HINT_WORDS: &[&str] = &["random", "rand", "spot", "spots"];

/// One element of a payer pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pat {
    /// Any inflection of "tab"/"tabbed" (see [`is_tab_inflection`]).
    TabWord,
    /// Exact lowercase word.
    Lit(&'static str),
    /// Optional exact lowercase word.
    OptLit(&'static str),
    /// Username capture slot.
    Name,
    /// Optional possessive marker after a name ("fuzzy's").
    Possessive,
}

/// Ordered payer-detection rules; the first rule whose captured name
/// survives normalization wins and no later rule is consulted.
pub const PAYER_RULES: &[&[Pat]] = &[
    &[Pat::TabWord, Pat::Lit("by"), Pat::Name],
    &[Pat::TabWord, Pat::Lit("to"), Pat::Name],
    &[Pat::TabWord, Pat::Lit("for"), Pat::Name],
    &[Pat::TabWord, Pat::Name],
    &[Pat::Lit("tab"), Pat::Lit("to"), Pat::Name],
    &[Pat::Lit("tab"), Pat::Name],
    &[Pat::Lit("wff"), Pat::Lit("to"), Pat::Name],
    &[Pat::Lit("wff"), Pat::Name],
    &[Pat::Lit("paid"), Pat::Lit("by"), Pat::Name],
    &[Pat::Lit("on"), Pat::Name, Pat::Possessive, Pat::Lit("tab")],
    &[Pat::Name, Pat::OptLit("will"), Pat::Lit("pay")],
    &[Pat::Name, Pat::Lit("is"), Pat::Lit("paying")],
];

/// True for the accepted misspelling family of "tab"/"tabbed": "tab" with
/// the `b` optionally repeated, then an optional `e`, then an optional `d`
/// ("tab", "tabbed", "tabed", "tabd", ...).
pub fn is_tab_inflection(word: &str) -> bool {
    let Some(rest) = word.strip_prefix("tab") else {
        return false;
    };
    let rest = rest.trim_start_matches('b');
    let rest = rest.strip_prefix('e').unwrap_or(rest);
    let rest = rest.strip_prefix('d').unwrap_or(rest);
    rest.is_empty()
}

/// Look up a word numeral; `None` for anything outside the fixed lexicon.
pub fn word_number(word: &str) -> Option<u32> {
    WORD_NUMBERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, n)| n)
}
