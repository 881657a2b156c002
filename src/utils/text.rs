//! Character-level helpers shared by the classifier and the scorer
//!
//! Lengths are counted in characters, positions in bytes. All helpers are
//! total over arbitrary UTF-8 and never slice inside a character.

/// Length of `s` in characters.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Number of uppercase characters in `s`.
pub fn count_uppercase(s: &str) -> usize {
    s.chars().filter(|c| c.is_uppercase()).count()
}

/// True when `s` is non-empty and has no lowercase letter.
pub fn is_all_uppercase(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(|c| c.is_lowercase())
}

/// Byte offsets of every occurrence of `needle` in `haystack`, overlaps included.
pub fn occurrences<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
    let mut from = 0;
    std::iter::from_fn(move || {
        if needle.is_empty() || from > haystack.len() {
            return None;
        }
        let index = from + haystack[from..].find(needle)?;
        // step past the first character of the match so overlaps are seen
        from = index + haystack[index..].chars().next().map_or(1, char::len_utf8);
        Some(index)
    })
}

/// Byte ranges of every occurrence of `needle` in `haystack`, ignoring case.
///
/// Characters compare equal when their lowercase forms do, so a match may
/// differ in byte length from `needle`.
pub fn caseless_occurrences<'a>(
    haystack: &'a str,
    needle: &'a str,
) -> impl Iterator<Item = (usize, usize)> + 'a {
    haystack.char_indices().filter_map(move |(start, _)| {
        caseless_prefix_len(&haystack[start..], needle).map(|len| (start, start + len))
    })
}

fn caseless_prefix_len(s: &str, prefix: &str) -> Option<usize> {
    if prefix.is_empty() {
        return None;
    }
    let mut chars = s.chars();
    let mut len = 0;
    for expected in prefix.chars() {
        let c = chars.next()?;
        if c != expected && !c.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        len += c.len_utf8();
    }
    Some(len)
}

/// ASCII case-insensitive `contains`.
pub fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty()
        || haystack
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

/// The character immediately before byte offset `index`.
pub fn char_before(s: &str, index: usize) -> Option<char> {
    s[..index].chars().next_back()
}

/// The character starting at byte offset `index`.
pub fn char_at(s: &str, index: usize) -> Option<char> {
    s.get(index..)?.chars().next()
}

/// Largest char boundary not greater than `index`, clamped to `s.len()`.
pub fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Strip one layer of matching `"` or `'` quotes.
pub fn strip_quotes(s: &str) -> &str {
    if s.len() < 2 {
        return s;
    }
    let quoted = (s.starts_with('"') && s.ends_with('"'))
        || (s.starts_with('\'') && s.ends_with('\''));
    if quoted {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
