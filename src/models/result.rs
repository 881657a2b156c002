//! The root container for one decompiled program's analysis

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;
use log::{debug, info};
use serde::{Serialize, Deserialize};

use crate::analyzer::filter;
use crate::config::ScoreMergePolicy;
use crate::errors::{ExtractorError, ExtractorResult};
use crate::models::candidate::{CandidateScore, FilteredCandidate};
use crate::models::harvest::ClassHarvest;
use crate::models::strings::{StringConstant, SourceFileReference};

/// Detected file path -> references naming it
pub type SourceFileMap = BTreeMap<String, Vec<SourceFileReference>>;
/// Method id -> candidate texts that survived any of its strings
pub type MethodCandidateSet = BTreeMap<String, BTreeSet<String>>;
/// Method id -> strings that contributed a surviving candidate
pub type MethodRawStrings = BTreeMap<String, BTreeSet<String>>;
/// Method id -> (candidate text -> stored score)
pub type CandidateScoreTable = BTreeMap<String, BTreeMap<String, i32>>;
/// Candidate text -> ids of the methods that kept it
pub type RarityIndex = BTreeMap<String, BTreeSet<String>>;

/// Counters and timings for one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    pub classes_processed: usize,
    pub methods_processed: usize,
    pub methods_without_code: usize,
    pub methods_failed: usize,
    pub strings_recorded: usize,
    pub extraction_ms: u64,
    pub filter_ms: u64,
}

/// Everything extracted from one decompiled program.
///
/// Populated monotonically during extraction (phase 1), then finalized once
/// by running the global filter (phase 2). After `finalize` the result is
/// read-only until `reset`.
#[derive(Debug, Clone, Default)]
pub struct AnalysisResult {
    source_files: SourceFileMap,
    method_candidates: MethodCandidateSet,
    method_raw_strings: MethodRawStrings,
    candidate_scores: CandidateScoreTable,
    rarity: RarityIndex,
    strings: Vec<StringConstant>,
    filtered: Vec<FilteredCandidate>,
    finalized: bool,
    merge_policy: ScoreMergePolicy,
    stats: ExtractionStats,
}

impl AnalysisResult {
    /// Create an empty result using `merge_policy` for repeated candidates
    pub fn new(merge_policy: ScoreMergePolicy) -> Self {
        Self {
            merge_policy,
            ..Self::default()
        }
    }

    fn ensure_open(&self) -> ExtractorResult<()> {
        if self.finalized {
            Err(ExtractorError::AlreadyFinalized)
        } else {
            Ok(())
        }
    }

    /// Record a visible string constant
    pub fn record_string(&mut self, string: StringConstant) -> ExtractorResult<()> {
        self.ensure_open()?;
        self.strings.push(string);
        self.stats.strings_recorded += 1;
        Ok(())
    }

    /// Record a reference to a detected source file
    pub fn record_source_file(&mut self, path: String, reference: SourceFileReference) -> ExtractorResult<()> {
        self.ensure_open()?;
        self.source_files.entry(path).or_default().push(reference);
        Ok(())
    }

    /// Merge the surviving candidates of one string occurrence into `method_id`'s maps
    pub fn record_occurrence(&mut self, method_id: &str, kept: &[CandidateScore]) -> ExtractorResult<()> {
        self.ensure_open()?;
        for cs in kept {
            self.method_candidates
                .entry(method_id.to_string())
                .or_default()
                .insert(cs.candidate.clone());
            self.method_raw_strings
                .entry(method_id.to_string())
                .or_default()
                .insert(cs.source_string.clone());
            self.rarity
                .entry(cs.candidate.clone())
                .or_default()
                .insert(method_id.to_string());

            let policy = self.merge_policy;
            self.candidate_scores
                .entry(method_id.to_string())
                .or_default()
                .entry(cs.candidate.clone())
                .and_modify(|stored| *stored = policy.merge(*stored, cs.score))
                .or_insert(cs.score);
        }
        Ok(())
    }

    /// Merge one class's partial results. Harvests must be absorbed in a fixed
    /// class order for `ScoreMergePolicy::Last` to be reproducible.
    pub fn absorb(&mut self, harvest: ClassHarvest) -> ExtractorResult<()> {
        self.ensure_open()?;
        for string in harvest.strings {
            self.record_string(string)?;
        }
        for (path, reference) in harvest.source_files {
            self.record_source_file(path, reference)?;
        }
        for occurrence in &harvest.occurrences {
            self.record_occurrence(&occurrence.method_id, &occurrence.kept)?;
        }
        self.stats.classes_processed += 1;
        self.stats.methods_processed += harvest.methods_processed;
        self.stats.methods_without_code += harvest.methods_without_code;
        self.stats.methods_failed += harvest.methods_failed;
        Ok(())
    }

    /// Run the global filter over the completed maps.
    ///
    /// Must only be called once extraction has seen every string. Calling it
    /// again recomputes the same list from the same maps.
    pub fn finalize(&mut self) -> &[FilteredCandidate] {
        let start = Instant::now();
        debug!("Filtering candidates of {} methods", self.method_candidates.len());

        self.filtered = filter::filter_candidates(
            &self.method_candidates,
            &self.method_raw_strings,
            &self.candidate_scores,
            &self.rarity,
        );
        self.finalized = true;
        self.stats.filter_ms = start.elapsed().as_millis() as u64;

        info!(
            "Kept {} filtered candidates for {} methods in {}ms",
            self.filtered.len(),
            self.method_candidates.len(),
            self.stats.filter_ms
        );
        &self.filtered
    }

    /// Discard everything so extraction can be re-run from scratch
    pub fn reset(&mut self) {
        *self = Self::new(self.merge_policy);
    }

    /// Has the global filter run?
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Published recommendations, available after `finalize`
    pub fn filtered_candidates(&self) -> ExtractorResult<&[FilteredCandidate]> {
        if self.finalized {
            Ok(&self.filtered)
        } else {
            Err(ExtractorError::NotFinalized)
        }
    }

    pub fn source_files(&self) -> &SourceFileMap {
        &self.source_files
    }

    pub fn method_candidates(&self) -> &MethodCandidateSet {
        &self.method_candidates
    }

    pub fn method_raw_strings(&self) -> &MethodRawStrings {
        &self.method_raw_strings
    }

    pub fn candidate_scores(&self) -> &CandidateScoreTable {
        &self.candidate_scores
    }

    pub fn rarity_index(&self) -> &RarityIndex {
        &self.rarity
    }

    /// All recorded string constants
    pub fn strings(&self) -> &[StringConstant] {
        &self.strings
    }

    /// Number of distinct methods that kept `candidate` (0 if none)
    pub fn rarity(&self, candidate: &str) -> usize {
        self.rarity.get(candidate).map_or(0, BTreeSet::len)
    }

    /// Stored score of `candidate` within `method_id`
    pub fn score(&self, method_id: &str, candidate: &str) -> Option<i32> {
        self.candidate_scores.get(method_id)?.get(candidate).copied()
    }

    pub fn merge_policy(&self) -> ScoreMergePolicy {
        self.merge_policy
    }

    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    pub(crate) fn set_extraction_ms(&mut self, ms: u64) {
        self.stats.extraction_ms = ms;
    }
}
