//! Length limits, score deltas and filter thresholds
//!
//! Every number the candidate pipeline compares against lives here so that
//! a ranking can be explained by reading this file next to the signal list
//! in `analyzer::scoring`.

/// Strings shorter than this (in characters) produce no records at all.
pub const MIN_STRING_LENGTH: usize = 4;
/// Tokens shorter than this are skipped before classification.
pub const MIN_TOKEN_LENGTH: usize = 4;
/// Embedded camelCase matches shorter than this are ignored.
pub const MIN_CANDIDATE_LENGTH: usize = 4;
/// Tokens at or above this length are only tried as exact matches.
pub const MAX_TOKEN_LENGTH_FOR_SEARCH: usize = 500;

/// Candidates kept from a single string occurrence.
pub const MAX_CANDIDATES_PER_OCCURRENCE: usize = 2;
/// Candidates below this score never leave the occurrence that produced them.
pub const MIN_SCORE_TO_KEEP: i32 = 10;
/// A runner-up further than this below the occurrence's top score is dropped.
pub const OCCURRENCE_SCORE_SPREAD: i32 = 5;

/// Candidates published per method by the global filter.
pub const MAX_FILTERED_PER_METHOD: usize = 2;
/// Unique candidates at or above this score are kept.
pub const FILTER_UNIQUE_HIGH: i32 = 10;
/// Unique candidates at or above this score are kept (lower bar).
pub const FILTER_UNIQUE_GOOD: i32 = 8;
/// Shared candidates at or above this score are kept.
pub const FILTER_SHARED_HIGH: i32 = 20;
/// The first kept candidate may fall back on the top score if it is at least this.
pub const FILTER_TOP_SCORE_FLOOR: i32 = 15;
/// Maximum distance below the top score for that fallback.
pub const FILTER_TOP_SCORE_SPREAD: i32 = 2;

/// Length above which a camelCase candidate with one capital earns a bonus.
pub const MIN_CAMELCASE_LENGTH_SHORT: usize = 8;
/// Length above which a camelCase candidate with several capitals earns a bonus.
pub const MIN_CAMELCASE_LENGTH_LONG: usize = 12;
/// Capitals required for the long camelCase bonus.
pub const MIN_UPPERCASE_FOR_BONUS: usize = 2;
/// Distance (bytes) before a source extension that counts as "near" it.
pub const FILE_EXTENSION_PROXIMITY: usize = 30;
/// Lookback window (bytes) for separators when testing package-path membership.
pub const PACKAGE_PATH_LOOKBACK: usize = 20;
/// Position heuristic: a logger-like previous token is shorter than this.
pub const LOGGER_TOKEN_MAX_LENGTH: usize = 20;
/// Position heuristic: a message-like next token is longer than this.
pub const MESSAGE_TOKEN_MIN_LENGTH: usize = 20;

pub const SCORE_VALID_IDENTIFIER: i32 = 5;
pub const SCORE_STANDALONE: i32 = 15;
pub const SCORE_POSITION_LOG_STATEMENT: i32 = 12;
pub const SCORE_LOG_CONTEXT: i32 = 8;
pub const SCORE_CAMELCASE_LONG: i32 = 5;
pub const SCORE_CAMELCASE_SHORT: i32 = 3;

pub const PENALTY_BLACKLIST: i32 = -10;
pub const PENALTY_INVALID_IDENTIFIER: i32 = -10;
pub const PENALTY_ALL_UPPERCASE: i32 = -5;
pub const PENALTY_PACKAGE_PATH: i32 = -15;
pub const PENALTY_PACKAGE_PATH_FULL: i32 = -10;
pub const PENALTY_PARTIAL_WORD: i32 = -8;
pub const PENALTY_PARTIAL_CLASS_NAME: i32 = -8;
pub const PENALTY_SHORT_SINGLE_WORD: i32 = -3;
pub const PENALTY_CLASS_NAME_IN_PATH: i32 = -5;
pub const PENALTY_NEAR_FILE_EXTENSION: i32 = -5;

/// Class progress is logged every `classes / LOG_INTERVAL_DIVISOR` classes.
pub const LOG_INTERVAL_DIVISOR: usize = 20;
/// Lower bound on the class progress logging interval.
pub const MIN_LOG_INTERVAL: usize = 100;
/// Lower bound on the global filter progress logging interval.
pub const MIN_FILTER_LOG_INTERVAL: usize = 1000;
