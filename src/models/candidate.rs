//! Method-name candidates at each stage of ranking

use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};

/// Score of one candidate found in one string occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateScore {
    /// Candidate text
    pub candidate: String,
    /// The full string the candidate was found in
    pub source_string: String,
    /// Signed confidence score
    pub score: i32,
}

/// A method's candidate with its corpus-wide rarity, as ranked by the global filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate: String,
    /// Stored score for this method
    pub score: i32,
    /// Number of distinct methods that kept this candidate
    pub rarity: usize,
}

impl RankedCandidate {
    /// Unique to a single method
    pub fn is_unique(&self) -> bool {
        self.rarity == 1
    }
}

/// A published recommendation: at most two per method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredCandidate {
    /// Identifier of the method to rename
    pub method_id: String,
    /// Proposed original name
    pub candidate: String,
    /// Every string of the method that contributed a surviving candidate
    pub raw_strings: BTreeSet<String>,
}
