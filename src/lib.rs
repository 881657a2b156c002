//! A library for recovering method names and source files from the string
//! constants of decompiled programs
//!
//! Obfuscation renames methods, but the literals a method loads (log tags,
//! error messages, stack-trace fragments) often still carry the original
//! names. This crate tokenizes those strings, scores every identifier-shaped
//! candidate, and publishes at most two recommendations per method after a
//! corpus-wide rarity filter.

pub mod analyzer;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod program;
pub mod rename;
pub mod report;
pub mod utils;

use crate::config::ExtractionConfig;
use crate::errors::ExtractorResult;
use crate::models::AnalysisResult;
use crate::program::ProgramModel;

pub use crate::analyzer::Analyzer;
pub use crate::errors::ExtractorError;

/// Main entry point: extract and filter candidates for every method of `program`
pub fn extract_magic_strings<P: ProgramModel>(
    program: &P,
    config: ExtractionConfig,
) -> ExtractorResult<AnalysisResult> {
    Analyzer::with_config(config).extract(program)
}

/// Version of the extractor
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
