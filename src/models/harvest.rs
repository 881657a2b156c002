//! Per-class partial results of the extraction pass

use serde::{Serialize, Deserialize};
use crate::models::candidate::CandidateScore;
use crate::models::strings::{StringConstant, SourceFileReference};

/// Candidates one string occurrence contributed to its method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub method_id: String,
    /// Survivors of the per-occurrence cap, best first
    pub kept: Vec<CandidateScore>,
}

/// Everything extracted from a single class.
///
/// A harvest reads no state outside its class, so harvests can be produced
/// in any order (or in parallel) and merged afterwards by
/// `AnalysisResult::absorb`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassHarvest {
    /// Fully-qualified class name
    pub class_name: String,
    /// String constants of at least the minimum length, in instruction order
    pub strings: Vec<StringConstant>,
    /// Detected source-file paths with their references
    pub source_files: Vec<(String, SourceFileReference)>,
    /// Occurrences that kept at least one candidate
    pub occurrences: Vec<Occurrence>,
    /// Methods whose instructions were scanned
    pub methods_processed: usize,
    /// Methods without an executable body
    pub methods_without_code: usize,
    /// Methods skipped because loading or instruction access failed
    pub methods_failed: usize,
}
