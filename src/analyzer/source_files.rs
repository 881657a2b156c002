//! Detecting source-file paths in string constants

use once_cell::sync::Lazy;
use regex::Regex;

/// A path ending in a JVM source extension, followed by end of string, `:` or a space
static SOURCE_FILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([a-z_/\\][a-z0-9_/\\:\-.@]+\.(java|kt|kts|scala|groovy))($|:| )")
        .expect("source file shape")
});

/// The first source-file path named in `s`, if any.
pub fn detect_source_file(s: &str) -> Option<&str> {
    SOURCE_FILE
        .captures(s)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
