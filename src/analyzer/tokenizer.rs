//! Splitting a string constant into candidate-bearing text units

use crate::utils::text::strip_quotes;

/// Split `s` into trimmed, quote-stripped tokens.
///
/// Comma-separated strings yield one token per non-empty part. If that
/// produces nothing (no comma, or every part empty) the whole string is
/// a single token, unless it is empty after cleaning.
pub fn tokenize(s: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    if s.is_empty() {
        return tokens;
    }

    if s.contains(',') {
        tokens.extend(
            s.split(',')
                .map(|part| strip_quotes(part.trim()))
                .filter(|part| !part.is_empty()),
        );
    }

    if tokens.is_empty() {
        let cleaned = strip_quotes(s.trim());
        if !cleaned.is_empty() {
            tokens.push(cleaned);
        }
    }

    tokens
}
