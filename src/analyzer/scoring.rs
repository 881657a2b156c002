//! Confidence scoring for method-name candidates
//!
//! A score is the sum of the deltas of every signal that applies to a
//! candidate in its context. Signals are evaluated in a fixed order. The
//! first three are terminal: the first one that applies is the whole score
//! and nothing else is evaluated. The rest are additive and independent, so
//! a candidate can collect several penalties at once.
//!
//! Scoring is a pure function of the candidate, its token, the token
//! sequence and the full string. It never fails.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::analyzer::classifier::{is_class_name_shape, is_log_literal_shape};
use crate::constants::scoring::*;
use crate::constants::words::{
    is_path_separator, NOT_METHOD_NAMES, PACKAGE_SEPARATOR, PATH_SEPARATOR_BACKWARD,
    PATH_SEPARATOR_FORWARD, SOURCE_EXTENSIONS,
};
use crate::utils::java::is_valid_identifier;
use crate::utils::text::{
    caseless_occurrences, char_at, char_before, char_len, contains_ignore_ascii_case,
    count_uppercase, floor_char_boundary, is_all_uppercase, occurrences,
};

/// Everything a score may depend on
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    /// Candidate text
    pub candidate: &'a str,
    /// The token the candidate was found in
    pub token: &'a str,
    /// Index of `token` in `tokens`
    pub token_index: usize,
    /// Every token of the string, in order
    pub tokens: &'a [&'a str],
    /// The untokenized string constant
    pub full_string: &'a str,
}

/// One scoring rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Signal {
    /// Common English or packaging word
    Blacklisted,
    /// Not a legal Java identifier
    InvalidIdentifier,
    /// No lowercase letters: a constant, not a method
    AllUppercase,
    ValidIdentifier,
    /// The candidate is its whole token
    Standalone,
    /// Second of three or more tokens, between a logger tag and a message
    LogStatementPosition,
    /// The string reads like a log call naming the candidate
    LogContext,
    /// Several capitals and long
    CamelCaseLong,
    /// At least one capital and medium length
    CamelCaseShort,
    /// A segment of a path or package in its token
    PackagePathInToken,
    /// A segment of a path or package somewhere in the string
    PackagePathInString,
    /// Part of a longer alphanumeric word
    PartialWord,
    /// Part of a class name elsewhere in the string
    PartialClassName,
    /// One short lowercase word
    ShortSingleWord,
    /// Shaped like a class name inside a path
    ClassNameInPath,
    /// Just before a source file extension
    NearFileExtension,
}

/// Terminal signals in priority order
pub const TERMINAL_SIGNALS: [Signal; 3] =
    [Signal::Blacklisted, Signal::InvalidIdentifier, Signal::AllUppercase];

/// Additive signals in evaluation order
pub const ADDITIVE_SIGNALS: [Signal; 13] = [
    Signal::ValidIdentifier,
    Signal::Standalone,
    Signal::LogStatementPosition,
    Signal::LogContext,
    Signal::CamelCaseLong,
    Signal::CamelCaseShort,
    Signal::PackagePathInToken,
    Signal::PackagePathInString,
    Signal::PartialWord,
    Signal::PartialClassName,
    Signal::ShortSingleWord,
    Signal::ClassNameInPath,
    Signal::NearFileExtension,
];

impl Signal {
    /// Score change when the signal applies
    pub fn delta(self) -> i32 {
        match self {
            Signal::Blacklisted => PENALTY_BLACKLIST,
            Signal::InvalidIdentifier => PENALTY_INVALID_IDENTIFIER,
            Signal::AllUppercase => PENALTY_ALL_UPPERCASE,
            Signal::ValidIdentifier => SCORE_VALID_IDENTIFIER,
            Signal::Standalone => SCORE_STANDALONE,
            Signal::LogStatementPosition => SCORE_POSITION_LOG_STATEMENT,
            Signal::LogContext => SCORE_LOG_CONTEXT,
            Signal::CamelCaseLong => SCORE_CAMELCASE_LONG,
            Signal::CamelCaseShort => SCORE_CAMELCASE_SHORT,
            Signal::PackagePathInToken => PENALTY_PACKAGE_PATH,
            Signal::PackagePathInString => PENALTY_PACKAGE_PATH_FULL,
            Signal::PartialWord => PENALTY_PARTIAL_WORD,
            Signal::PartialClassName => PENALTY_PARTIAL_CLASS_NAME,
            Signal::ShortSingleWord => PENALTY_SHORT_SINGLE_WORD,
            Signal::ClassNameInPath => PENALTY_CLASS_NAME_IN_PATH,
            Signal::NearFileExtension => PENALTY_NEAR_FILE_EXTENSION,
        }
    }

    /// Does this signal end evaluation when it applies?
    pub fn is_terminal(self) -> bool {
        TERMINAL_SIGNALS.contains(&self)
    }

    /// Does the signal apply to `ctx`?
    pub fn applies(self, ctx: &ScoringContext<'_>) -> bool {
        let candidate = ctx.candidate;
        match self {
            Signal::Blacklisted => NOT_METHOD_NAMES.contains(candidate.to_lowercase().as_str()),
            Signal::InvalidIdentifier => !is_valid_identifier(candidate),
            Signal::AllUppercase => is_all_uppercase(candidate),
            Signal::ValidIdentifier => true,
            Signal::Standalone => is_standalone(candidate, ctx.token),
            Signal::LogStatementPosition => {
                surrounding_tokens(ctx).map_or(false, |(prev, next)| {
                    looks_like_logger(prev) && looks_like_message(next)
                })
            }
            Signal::LogContext => is_in_log_context(ctx),
            Signal::CamelCaseLong => is_long_camel_case(candidate),
            Signal::CamelCaseShort => {
                !is_long_camel_case(candidate)
                    && count_uppercase(candidate) >= 1
                    && char_len(candidate) > MIN_CAMELCASE_LENGTH_SHORT
            }
            Signal::PackagePathInToken => {
                contains_path_separator(ctx.token) && is_in_package_path(candidate, ctx.token)
            }
            Signal::PackagePathInString => {
                contains_path_separator(ctx.token)
                    && is_in_package_path(candidate, ctx.full_string)
            }
            Signal::PartialWord => is_partial_word(candidate, ctx.token),
            Signal::PartialClassName => is_partial_of_class_name(candidate, ctx.tokens),
            Signal::ShortSingleWord => {
                count_uppercase(candidate) == 0 && char_len(candidate) < MIN_CAMELCASE_LENGTH_SHORT
            }
            Signal::ClassNameInPath => {
                is_class_name_shape(candidate)
                    && (contains_path_separator(ctx.token) || has_source_extension(ctx.token))
            }
            Signal::NearFileExtension => {
                has_source_extension(ctx.token) && is_near_file_extension(candidate, ctx.token)
            }
        }
    }
}

/// A score together with the signals that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub score: i32,
    /// Applied signals in evaluation order
    pub signals: Vec<Signal>,
}

/// Evaluate every signal for `ctx`, recording which applied.
pub fn explain(ctx: &ScoringContext<'_>) -> ScoreBreakdown {
    if ctx.candidate.is_empty() {
        return ScoreBreakdown { score: 0, signals: Vec::new() };
    }

    if let Some(terminal) = TERMINAL_SIGNALS.iter().copied().find(|s| s.applies(ctx)) {
        return ScoreBreakdown {
            score: terminal.delta(),
            signals: vec![terminal],
        };
    }

    let signals: Vec<Signal> = ADDITIVE_SIGNALS
        .iter()
        .copied()
        .filter(|s| s.applies(ctx))
        .collect();
    ScoreBreakdown {
        score: signals.iter().map(|s| s.delta()).sum(),
        signals,
    }
}

/// Score a candidate in its context
pub fn score(ctx: &ScoringContext<'_>) -> i32 {
    explain(ctx).score
}

fn is_long_camel_case(candidate: &str) -> bool {
    count_uppercase(candidate) >= MIN_UPPERCASE_FOR_BONUS
        && char_len(candidate) > MIN_CAMELCASE_LENGTH_LONG
}

fn is_standalone(candidate: &str, token: &str) -> bool {
    let trimmed = token.trim();
    trimmed == candidate
        || (trimmed.len() == candidate.len() + 2
            && trimmed.starts_with('"')
            && trimmed.ends_with('"')
            && &trimmed[1..trimmed.len() - 1] == candidate)
}

fn contains_path_separator(s: &str) -> bool {
    s.contains(PATH_SEPARATOR_FORWARD) || s.contains(PATH_SEPARATOR_BACKWARD) || s.contains(PACKAGE_SEPARATOR)
}

fn has_source_extension(s: &str) -> bool {
    SOURCE_EXTENSIONS.iter().any(|ext| s.contains(ext))
}

/// The tokens before and after the candidate's token, when it sits second
/// in a sequence of at least three.
fn surrounding_tokens<'a>(ctx: &ScoringContext<'a>) -> Option<(&'a str, &'a str)> {
    if ctx.token_index != 1 || ctx.tokens.len() < 3 {
        return None;
    }
    Some((ctx.tokens[0].trim(), ctx.tokens[2].trim()))
}

/// Logger tags are class names or short words
fn looks_like_logger(token: &str) -> bool {
    is_class_name_shape(token) || char_len(token) < LOGGER_TOKEN_MAX_LENGTH
}

/// Messages are prose or long
fn looks_like_message(token: &str) -> bool {
    is_log_literal_shape(token) || char_len(token) > MESSAGE_TOKEN_MIN_LENGTH
}

/// Log call shapes around the candidate
#[derive(Debug, Clone, Copy)]
enum LogShape {
    /// `pkg/Class, name, 42, Foo.java`
    ClassThenLine,
    /// `, name, 42, Foo.java`
    Line,
    /// `Tag, name, message`: a class-name tag, then prose
    TagThenMessage,
    /// `pkg/Class, name`
    Class,
}

const LOG_SHAPES: [LogShape; 4] = [
    LogShape::ClassThenLine,
    LogShape::Line,
    LogShape::TagThenMessage,
    LogShape::Class,
];

fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("log context shape")
}

/// `pkg/Class, ` ending right where the candidate starts
static CLASS_SEGMENT_BEFORE: Lazy<Regex> =
    Lazy::new(|| case_insensitive(r#"[a-z][a-z0-9_/]*[/\\][A-Z][a-zA-Z0-9_]*\s*[,"']\s*$"#));

/// A separator ending right where the candidate starts
static SEPARATOR_BEFORE: Lazy<Regex> = Lazy::new(|| case_insensitive(r#"[,"']\s*$"#));

/// `, 42, Foo.java` starting right after the candidate
static LINE_NUMBER_AFTER: Lazy<Regex> =
    Lazy::new(|| case_insensitive(r#"^\s*[,"']\s*\d+\s*[,"']\s*[^,"']+\.java"#));

/// Facts about the full string shared by every shape
struct LogScan<'a> {
    ctx: &'a ScoringContext<'a>,
    has_path: bool,
    has_java: bool,
}

impl<'a> LogScan<'a> {
    fn new(ctx: &'a ScoringContext<'a>) -> Self {
        let full = ctx.full_string;
        Self {
            ctx,
            has_path: full.contains(PATH_SEPARATOR_FORWARD) || full.contains(PATH_SEPARATOR_BACKWARD),
            has_java: contains_ignore_ascii_case(full, ".java"),
        }
    }

    /// Does `test(before, after)` hold around any case-insensitive
    /// occurrence of the candidate?
    fn around_candidate(&self, test: impl Fn(&str, &str) -> bool) -> bool {
        let full = self.ctx.full_string;
        caseless_occurrences(full, self.ctx.candidate).any(|(start, end)| test(&full[..start], &full[end..]))
    }
}

impl LogShape {
    fn matches(self, scan: &LogScan<'_>) -> bool {
        match self {
            LogShape::ClassThenLine => {
                scan.has_path
                    && scan.has_java
                    && scan.around_candidate(|before, after| {
                        CLASS_SEGMENT_BEFORE.is_match(before) && LINE_NUMBER_AFTER.is_match(after)
                    })
            }
            LogShape::Line => {
                scan.has_java
                    && scan.around_candidate(|before, after| {
                        SEPARATOR_BEFORE.is_match(before) && LINE_NUMBER_AFTER.is_match(after)
                    })
            }
            LogShape::Class => {
                scan.has_path && scan.around_candidate(|before, _| CLASS_SEGMENT_BEFORE.is_match(before))
            }
            LogShape::TagThenMessage => surrounding_tokens(scan.ctx).map_or(false, |(prev, next)| {
                is_class_name_shape(prev) && is_log_literal_shape(next)
            }),
        }
    }
}

fn is_in_log_context(ctx: &ScoringContext<'_>) -> bool {
    let scan = LogScan::new(ctx);
    LOG_SHAPES.iter().any(|shape| shape.matches(&scan))
}

/// Is any occurrence of `candidate` in `segment` a path or package segment?
///
/// An occurrence counts when it is bounded by separators (or by the end of
/// the segment after a separator), when it starts the segment and is
/// followed by a separator, or when a slash appears shortly before it and a
/// separator follows it.
fn is_in_package_path(candidate: &str, segment: &str) -> bool {
    occurrences(segment, candidate).any(|index| {
        let after = index + candidate.len();
        let followed_by_separator = char_at(segment, after).map_or(false, is_path_separator);

        let bounded = match char_before(segment, index) {
            Some(before) => is_path_separator(before) && (after >= segment.len() || followed_by_separator),
            None => followed_by_separator,
        };
        if bounded {
            return true;
        }

        if index > 0 && followed_by_separator {
            let start = floor_char_boundary(segment, index.saturating_sub(PACKAGE_PATH_LOOKBACK));
            let window = &segment[start..index];
            return window.contains(PATH_SEPARATOR_FORWARD) || window.contains(PATH_SEPARATOR_BACKWARD);
        }
        false
    })
}

/// Does `candidate` occur inside a longer alphanumeric word of `segment`?
fn is_partial_word(candidate: &str, segment: &str) -> bool {
    occurrences(segment, candidate).any(|index| {
        char_before(segment, index).map_or(false, char::is_alphanumeric)
            || char_at(segment, index + candidate.len()).map_or(false, char::is_alphanumeric)
    })
}

/// Is `candidate` a proper substring of a class-name token?
fn is_partial_of_class_name(candidate: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|token| {
        token.starts_with(|c: char| c.is_uppercase())
            && is_class_name_shape(token)
            && *token != candidate
            && token.contains(candidate)
    })
}

/// Does the first occurrence of `candidate` start shortly before a source extension?
fn is_near_file_extension(candidate: &str, segment: &str) -> bool {
    let Some(candidate_index) = segment.find(candidate) else {
        return false;
    };
    SOURCE_EXTENSIONS.iter().any(|ext| {
        segment.find(ext).map_or(false, |ext_index| {
            ext_index > 0
                && candidate_index < ext_index
                && candidate_index + FILE_EXTENSION_PROXIMITY > ext_index
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::tokenizer::tokenize;

    fn score_in(full: &str, token_index: usize, candidate: &str) -> ScoreBreakdown {
        let tokens = tokenize(full);
        let ctx = ScoringContext {
            candidate,
            token: tokens[token_index],
            token_index,
            tokens: &tokens,
            full_string: full,
        };
        explain(&ctx)
    }

    #[test]
    fn test_worked_log_statement() {
        let breakdown = score_in("DataProcessor, validateInput, invalid data: %s", 1, "validateInput");
        assert_eq!(
            breakdown.signals,
            vec![
                Signal::ValidIdentifier,
                Signal::Standalone,
                Signal::LogStatementPosition,
                Signal::LogContext,
                Signal::CamelCaseShort,
            ]
        );
        assert_eq!(breakdown.score, 43);
    }

    #[test]
    fn test_blacklist_is_terminal() {
        // standalone and second of three would otherwise add points
        let breakdown = score_in("Tag, message, something went wrong here", 1, "message");
        assert_eq!(breakdown.signals, vec![Signal::Blacklisted]);
        assert_eq!(breakdown.score, -10);
        assert!(Signal::Blacklisted.is_terminal());
        assert!(!Signal::Standalone.is_terminal());

        assert_eq!(score_in("Message", 0, "Message").score, -10);
    }

    #[test]
    fn test_invalid_identifier_is_terminal() {
        assert_eq!(score_in("synchronized", 0, "synchronized").score, -10);
        assert_eq!(score_in("get-value", 0, "get-value").score, -10);
    }

    #[test]
    fn test_all_uppercase_is_terminal() {
        let breakdown = score_in("MAX_RETRY_COUNT", 0, "MAX_RETRY_COUNT");
        assert_eq!(breakdown.signals, vec![Signal::AllUppercase]);
        assert_eq!(breakdown.score, -5);
    }

    #[test]
    fn test_standalone_quoted_token() {
        let ctx = ScoringContext {
            candidate: "doWork",
            token: " \"doWork\" ",
            token_index: 0,
            tokens: &[" \"doWork\" "],
            full_string: "x",
        };
        assert!(Signal::Standalone.applies(&ctx));
    }

    #[test]
    fn test_camel_case_bonuses_are_exclusive() {
        // two capitals, longer than 12
        let long = score_in("fetchRemoteConfig", 0, "fetchRemoteConfig");
        assert!(long.signals.contains(&Signal::CamelCaseLong));
        assert!(!long.signals.contains(&Signal::CamelCaseShort));
        assert_eq!(long.score, 5 + 15 + 5);

        // one capital, longer than 8
        let short = score_in("loadConfig", 0, "loadConfig");
        assert_eq!(short.signals, vec![Signal::ValidIdentifier, Signal::Standalone, Signal::CamelCaseShort]);
        assert_eq!(short.score, 23);
    }

    #[test]
    fn test_short_single_word() {
        let breakdown = score_in("refresh", 0, "refresh");
        assert_eq!(breakdown.signals, vec![Signal::ValidIdentifier, Signal::Standalone, Signal::ShortSingleWord]);
        assert_eq!(breakdown.score, 17);
    }

    #[test]
    fn test_package_path_penalties_stack() {
        let full = "com/acme/syncData/Worker";
        let breakdown = score_in(full, 0, "syncData");
        assert!(breakdown.signals.contains(&Signal::PackagePathInToken));
        assert!(breakdown.signals.contains(&Signal::PackagePathInString));
        assert_eq!(breakdown.score, 5 - 15 - 10);
    }

    #[test]
    fn test_package_path_start_of_segment() {
        assert!(is_in_package_path("doWork", "doWork.run"));
        assert!(!is_in_package_path("doWork", "doWork now"));
    }

    #[test]
    fn test_package_path_lookback_window() {
        // "xsyncData" is not bounded, but a slash sits within the lookback window
        assert!(is_in_package_path("syncData", "a/xsyncData.b"));
        let far = format!("a/{}syncData.b", "x".repeat(PACKAGE_PATH_LOOKBACK));
        assert!(!is_in_package_path("syncData", &far));
    }

    #[test]
    fn test_partial_word() {
        assert!(is_partial_word("getValue", "xgetValue"));
        assert!(is_partial_word("getValue", "getValues"));
        assert!(!is_partial_word("getValue", "(getValue)"));
    }

    #[test]
    fn test_partial_of_class_name() {
        assert!(is_partial_of_class_name("oader", &["ImageLoader", "x"]));
        assert!(!is_partial_of_class_name("ImageLoader", &["ImageLoader"]));
        assert!(!is_partial_of_class_name("loader", &["image_loader"]));
    }

    #[test]
    fn test_near_file_extension() {
        assert!(is_near_file_extension("runTask", "runTask(Scheduler.java:12)"));
        assert!(!is_near_file_extension("runTask", "Scheduler.java runTask"));
        let far = format!("runTask{}Scheduler.java", " ".repeat(40));
        assert!(!is_near_file_extension("runTask", &far));
    }

    #[test]
    fn test_stack_trace_line_scores_low() {
        // preceded by a package separator but followed by '(' so not a path segment
        let breakdown = score_in("at com.acme.Worker.runTask(Worker.java:42)", 0, "runTask");
        assert_eq!(breakdown.signals, vec![Signal::ValidIdentifier, Signal::NearFileExtension]);
        assert_eq!(breakdown.score, 0);
        assert!(breakdown.score < MIN_SCORE_TO_KEEP);
    }

    fn context<'a>(full: &'a str, tokens: &'a [&'a str], token_index: usize, candidate: &'a str) -> ScoringContext<'a> {
        ScoringContext {
            candidate,
            token: tokens[token_index],
            token_index,
            tokens,
            full_string: full,
        }
    }

    #[test]
    fn test_log_context_with_line_number() {
        let full = "com/acme/Worker, runTask, 42, Worker.java";
        let tokens = tokenize(full);
        let ctx = context(full, &tokens, 1, "runTask");
        let scan = LogScan::new(&ctx);
        assert!(LogShape::ClassThenLine.matches(&scan));
        assert!(LogShape::Line.matches(&scan));
        assert!(LogShape::Class.matches(&scan));
        assert!(!LogShape::TagThenMessage.matches(&scan));
    }

    #[test]
    fn test_log_context_ignores_candidate_case() {
        let full = "com/acme/Worker, RUNTASK, 42, Worker.JAVA";
        let tokens = tokenize(full);
        let ctx = context(full, &tokens, 1, "runTask");
        let scan = LogScan::new(&ctx);
        assert!(LogShape::ClassThenLine.matches(&scan));
        assert!(LogShape::Line.matches(&scan));
    }

    #[test]
    fn test_log_context_regex_safe_for_any_candidate() {
        let full = "a/B, (x+, 1, y.java";
        let tokens = tokenize(full);
        assert!(is_in_log_context(&context(full, &tokens, 1, "(x+")));
    }

    /// The shapes as one regex per candidate, the way they read on paper
    fn log_context_by_full_regex(ctx: &ScoringContext<'_>) -> bool {
        const CLASS_SEGMENT: &str = r#"[a-z][a-z0-9_/]*[/\\][A-Z][a-zA-Z0-9_]*\s*[,"']\s*"#;
        const LINE_SUFFIX: &str = r#"\s*[,"']\s*\d+\s*[,"']\s*[^,"']+\.java"#;
        let quoted = regex::escape(ctx.candidate);
        let patterns = [
            format!("{}{}{}", CLASS_SEGMENT, quoted, LINE_SUFFIX),
            format!(r#"[,"']\s*{}{}"#, quoted, LINE_SUFFIX),
            format!("{}{}", CLASS_SEGMENT, quoted),
        ];
        let tag_then_message = surrounding_tokens(ctx).map_or(false, |(prev, next)| {
            is_class_name_shape(prev) && is_log_literal_shape(next)
        });
        tag_then_message || patterns.iter().any(|p| case_insensitive(p).is_match(ctx.full_string))
    }

    #[test]
    fn test_log_context_agrees_with_full_regex() {
        let strings = [
            "com/acme/Worker, runTask, 42, Worker.java",
            "com/acme/Worker,runTask",
            "com\\acme\\Worker, 'runTask'",
            "x, runTask , 7 , Worker.java",
            "runTask, 7, Worker.java",
            "com/acme/Worker runTask, 7, Worker.java",
            "Worker, runTask, something went wrong",
            "com/acme/Worker, RunTask, runTask, 9, a.JAVA",
            "ü/Ä/Worker, runTask, 1, Ü.java",
            "com/acme/Worker, runTask, x, Worker.java",
            "com/acme/worker, runTask",
            "no separators at all",
        ];
        for full in strings {
            let tokens = tokenize(full);
            for index in 0..tokens.len() {
                for candidate in ["runTask", "Worker", "acme", "7", "(x+"] {
                    let ctx = context(full, &tokens, index, candidate);
                    assert_eq!(
                        is_in_log_context(&ctx),
                        log_context_by_full_regex(&ctx),
                        "{:?} in {:?} at token {}",
                        candidate,
                        full,
                        index
                    );
                }
            }
        }
    }

    #[test]
    fn test_class_name_in_path_stacks_with_package_penalties() {
        let breakdown = score_in("com/acme/Worker", 0, "Worker");
        assert_eq!(
            breakdown.signals,
            vec![
                Signal::ValidIdentifier,
                Signal::PackagePathInToken,
                Signal::PackagePathInString,
                Signal::ClassNameInPath,
            ]
        );
        assert_eq!(breakdown.score, 5 - 15 - 10 - 5);
    }

    #[test]
    fn test_class_name_outside_path_not_penalized() {
        let breakdown = score_in("Worker run", 0, "Worker");
        assert_eq!(breakdown.signals, vec![Signal::ValidIdentifier]);
        assert_eq!(breakdown.score, 5);
    }

    #[test]
    fn test_position_accepts_long_plain_message() {
        let full = format!("Tag, doWork, {}", "a".repeat(24));
        let breakdown = score_in(&full, 1, "doWork");
        assert_eq!(
            breakdown.signals,
            vec![Signal::ValidIdentifier, Signal::Standalone, Signal::LogStatementPosition]
        );
        assert_eq!(breakdown.score, 32);
    }

    #[test]
    fn test_position_rejects_long_lowercase_logger() {
        // 20 characters, not a class name
        let breakdown = score_in("abcdefghijklmnopqrst, doWork, invalid data here", 1, "doWork");
        assert!(!breakdown.signals.contains(&Signal::LogStatementPosition));
        assert_eq!(breakdown.score, 20);

        let breakdown = score_in("abcdefghijklmnopqrs, doWork, invalid data here", 1, "doWork");
        assert!(breakdown.signals.contains(&Signal::LogStatementPosition));
    }

    #[test]
    fn test_empty_candidate_scores_zero() {
        let ctx = ScoringContext {
            candidate: "",
            token: "",
            token_index: 0,
            tokens: &[],
            full_string: "",
        };
        assert_eq!(score(&ctx), 0);
    }
}
