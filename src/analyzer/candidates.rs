//! Finding identifier-shaped candidates inside a token

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analyzer::classifier::is_method_name_shape;
use crate::constants::scoring::{MAX_TOKEN_LENGTH_FOR_SEARCH, MIN_CANDIDATE_LENGTH};
use crate::utils::text::char_len;

/// Embedded camelCase words. Plain lowercase words only count as whole tokens.
static EMBEDDED_METHOD_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[a-z][a-z0-9_]*(?:[A-Z][a-z0-9_]*)+\b").expect("embedded method name shape")
});

/// Candidates in `token`, in the order they appear.
///
/// A token that is itself a method name is its only candidate. Otherwise
/// tokens shorter than the search limit are scanned for camelCase words of
/// at least the minimum length.
pub fn find_candidates(token: &str) -> Vec<&str> {
    if is_method_name_shape(token) {
        return vec![token];
    }
    if char_len(token) >= MAX_TOKEN_LENGTH_FOR_SEARCH {
        return Vec::new();
    }

    EMBEDDED_METHOD_NAME
        .find_iter(token)
        .map(|m| m.as_str())
        .filter(|candidate| char_len(candidate) >= MIN_CANDIDATE_LENGTH)
        .filter(|candidate| is_method_name_shape(candidate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_token_match() {
        assert_eq!(find_candidates("validateInput"), vec!["validateInput"]);
        // plain lowercase words are accepted when they are the whole token
        assert_eq!(find_candidates("refresh"), vec!["refresh"]);
    }

    #[test]
    fn test_embedded_camel_case() {
        assert_eq!(
            find_candidates("call loadConfig then saveState!"),
            vec!["loadConfig", "saveState"]
        );
        assert_eq!(find_candidates("com.example.Foo.doWork"), vec!["doWork"]);
    }

    #[test]
    fn test_plain_words_not_embedded() {
        assert!(find_candidates("just some words").is_empty());
    }

    #[test]
    fn test_word_boundaries_required() {
        // "xgetValue" has no boundary before "getValue" and "getValue9x" stays whole
        assert!(find_candidates("Foo-XgetValue").is_empty());
        assert_eq!(find_candidates("a getValue9x b"), vec!["getValue9x"]);
    }

    #[test]
    fn test_short_embedded_matches_dropped() {
        assert!(find_candidates("x aB y").is_empty());
        assert_eq!(find_candidates("x aBcd y"), vec!["aBcd"]);
    }

    #[test]
    fn test_long_tokens_not_searched() {
        let long = format!("{} getValue", "x".repeat(MAX_TOKEN_LENGTH_FOR_SEARCH));
        assert!(find_candidates(&long).is_empty());
    }
}
