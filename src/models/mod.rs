//! Data models for extracted strings and method-name candidates

pub mod strings;
pub mod candidate;
pub mod harvest;
pub mod result;

pub use self::strings::{StringConstant, SourceFileReference};
pub use self::candidate::{CandidateScore, FilteredCandidate, RankedCandidate};
pub use self::harvest::{ClassHarvest, Occurrence};
pub use self::result::{AnalysisResult, ExtractionStats};
