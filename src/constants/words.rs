//! Fixed word sets and file extensions

use std::collections::HashSet;
use once_cell::sync::Lazy;

/// Common words that look like identifiers but are almost never method names.
///
/// Compared against the lowercased candidate.
pub static NOT_METHOD_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "copyright", "license", "version", "cannot", "error", "invalid", "null",
        "warning", "general", "argument", "written", "report", "failed", "assert",
        "object", "integer", "unknown", "localhost", "native", "memory", "system",
        "write", "read", "open", "close", "help", "exit", "test", "return", "libs",
        "home", "ambiguous", "internal", "request", "inserting", "deleting", "removing",
        "updating", "adding", "assertion", "flags", "overflow", "enabled", "disabled",
        "enable", "disable", "virtual", "client", "server", "switch", "while", "offset",
        "abort", "panic", "static", "updated", "pointer", "reason", "default", "success",
        "expecting", "missing", "phrase", "unrecognized", "undefined", "corrupt", "corrupted",
        // plain English
        "the", "not", "present", "downloading", "thumbnail", "file", "transfer", "incoming",
        "android", "google", "apps", "shared", "com", "java", "processor",
        "successfully", "queued", "download", "embedded", "initiate", "insert",
        "schedule", "finishing", "actions", "push", "message", "storing", "sender", "msisdn",
        "manual", "auto", "empty", "optional",
        "for", "and", "or", "is", "are", "was", "were", "has", "have", "had", "with", "from",
        "this", "that", "which", "what", "when", "where", "who", "how",
        // package segments
        "org", "net", "io",
        // file words
        "path", "dir", "directory", "extension",
    ]
    .into_iter()
    .collect()
});

/// Java keywords and literals that can never be identifiers.
pub static JAVA_RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char",
        "class", "const", "continue", "default", "do", "double", "else", "enum",
        "extends", "false", "final", "finally", "float", "for", "goto", "if",
        "implements", "import", "instanceof", "int", "interface", "long", "native",
        "new", "null", "package", "private", "protected", "public", "return", "short",
        "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
        "throws", "transient", "true", "try", "void", "volatile", "while",
    ]
    .into_iter()
    .collect()
});

/// Extensions that mark a token as a file path when it ends with one.
pub const FILE_EXTENSIONS: [&str; 6] = [".java", ".kt", ".class", ".kts", ".scala", ".groovy"];

/// Source extensions used by the proximity and class-in-path penalties.
pub const SOURCE_EXTENSIONS: [&str; 3] = [".java", ".kt", ".scala"];

/// Forward path separator.
pub const PATH_SEPARATOR_FORWARD: char = '/';
/// Backward path separator.
pub const PATH_SEPARATOR_BACKWARD: char = '\\';
/// Package separator.
pub const PACKAGE_SEPARATOR: char = '.';

/// Is `c` a path or package separator?
pub fn is_path_separator(c: char) -> bool {
    c == PATH_SEPARATOR_FORWARD || c == PATH_SEPARATOR_BACKWARD || c == PACKAGE_SEPARATOR
}
