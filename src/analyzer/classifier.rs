//! Text shapes and the token exclusion rules built on them

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::words::{
    FILE_EXTENSIONS, PACKAGE_SEPARATOR, PATH_SEPARATOR_BACKWARD, PATH_SEPARATOR_FORWARD,
};

// Shapes are compiled once; the patterns are constant.

/// Strict lower/camelCase method name
static METHOD_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*([A-Z][a-z0-9_]*)*$").expect("method name shape"));

/// PascalCase class name
static CLASS_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]+$").expect("class name shape"));

/// Path ending in a source or binary extension
static FILE_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.*\.(java|kt|class|kts|scala|groovy)$").expect("file path shape")
});

/// Slash-separated lowercase package path
static PACKAGE_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z_][a-z0-9_]*(/[a-z_][a-z0-9_]*)+$").expect("package path shape")
});

/// Human-readable text: anything containing whitespace, `.`, `?`, `%`, `{` or `}`
static LOG_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.*[\s.?%{}].*$").expect("log literal shape"));

pub fn is_method_name_shape(s: &str) -> bool {
    METHOD_NAME.is_match(s)
}

pub fn is_class_name_shape(s: &str) -> bool {
    CLASS_NAME.is_match(s)
}

pub fn is_log_literal_shape(s: &str) -> bool {
    LOG_LITERAL.is_match(s)
}

pub fn is_package_path_shape(s: &str) -> bool {
    PACKAGE_PATH.is_match(s)
}

pub fn is_file_path_shape(s: &str) -> bool {
    FILE_PATH.is_match(s)
}

/// Why a token was excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// `com/example/app`
    PackagePath,
    /// `Foo.java`, `a/b/C.class`
    FilePath,
    /// `DataProcessor`
    ClassName,
    /// `invalid data: %s`
    LogLiteral,
}

/// Classify a token, returning the first exclusion rule it trips.
///
/// Empty tokens are excluded as log literals: they carry nothing to extract.
pub fn exclusion(token: &str) -> Option<Exclusion> {
    if token.is_empty() {
        return Some(Exclusion::LogLiteral);
    }

    if (token.contains(PATH_SEPARATOR_FORWARD) || token.contains(PATH_SEPARATOR_BACKWARD))
        && is_package_path_shape(token)
    {
        return Some(Exclusion::PackagePath);
    }

    if token.contains(PACKAGE_SEPARATOR)
        && FILE_EXTENSIONS.iter().any(|ext| token.ends_with(ext))
        && is_file_path_shape(token)
    {
        return Some(Exclusion::FilePath);
    }

    if token.starts_with(|c: char| c.is_uppercase()) && is_class_name_shape(token) {
        return Some(Exclusion::ClassName);
    }

    if token.contains(|c: char| c.is_whitespace() || c == '%' || c == '{' || c == '}')
        && is_log_literal_shape(token)
    {
        return Some(Exclusion::LogLiteral);
    }

    None
}

/// Is `token` unlikely to hold an identifier?
pub fn is_excluded(token: &str) -> bool {
    exclusion(token).is_some()
}
