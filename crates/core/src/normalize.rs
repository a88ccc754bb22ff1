//! Username normalization.

use crate::lexicon::STOP_WORDS;

/// Canonicalize a free-text name token to a comparable key: lowercase,
/// restricted to `[a-z0-9_]`, everything else deleted (not replaced).
/// Idempotent; empty input normalizes to the empty string.
pub fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Whether a normalized name may be used as a payer/beneficiary. Empty
/// strings and stop words (grammatical particles that commonly follow the
/// trigger keywords) are rejected.
pub fn is_valid_candidate(normalized: &str) -> bool {
    !normalized.is_empty() && !STOP_WORDS.contains(&normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_case() {
        assert_eq!(normalize_name("u/Fuzzy-Wuzzy"), "ufuzzywuzzy");
        assert_eq!(normalize_name("Fuzzy_123!"), "fuzzy_123");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn idempotent() {
        let once = normalize_name("U/Señor_Spot!");
        assert_eq!(normalize_name(&once), once);
    }

    #[test]
    fn rejects_stop_words_and_empty() {
        assert!(!is_valid_candidate(""));
        assert!(!is_valid_candidate("by"));
        assert!(!is_valid_candidate("please"));
        assert!(is_valid_candidate("fuzzy"));
    }
}
