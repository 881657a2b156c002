//! Java naming rules

use crate::constants::words::JAVA_RESERVED_WORDS;

/// Can `c` start a Java identifier?
pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Can `c` continue a Java identifier?
pub fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Check whether `name` is a valid Java identifier.
///
/// The name must be non-empty, start with an identifier-start character,
/// continue with identifier-part characters, and must not be a keyword or
/// one of the literals `true`, `false`, `null`.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => {}
        _ => return false,
    }
    if !chars.all(is_identifier_part) {
        return false;
    }
    !JAVA_RESERVED_WORDS.contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("getValue"));
        assert!(is_valid_identifier("get_value2"));
        assert!(is_valid_identifier("$jacocoInit"));
        assert!(is_valid_identifier("_"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("2fast"));
        assert!(!is_valid_identifier("get-value"));
        assert!(!is_valid_identifier("synchronized"));
        assert!(!is_valid_identifier("instanceof"));
        assert!(!is_valid_identifier("true"));
    }
}
