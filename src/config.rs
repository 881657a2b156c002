//! Extraction configuration

use std::fs;
use std::path::Path;
use std::str::FromStr;
use anyhow::{Context, Result};
use serde::{Serialize, Deserialize};

use crate::constants::scoring::MIN_LOG_INTERVAL;
use crate::errors::ExtractorError;

/// How a method's stored score is updated when the same candidate text
/// survives from more than one of its strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreMergePolicy {
    /// Keep the highest score seen. Independent of processing order.
    #[default]
    Max,
    /// Keep the score of the most recently processed occurrence.
    Last,
}

impl ScoreMergePolicy {
    /// Combine a previously stored score with a new one
    pub fn merge(self, stored: i32, incoming: i32) -> i32 {
        match self {
            ScoreMergePolicy::Max => stored.max(incoming),
            ScoreMergePolicy::Last => incoming,
        }
    }
}

impl FromStr for ScoreMergePolicy {
    type Err = ExtractorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "max" => Ok(ScoreMergePolicy::Max),
            "last" => Ok(ScoreMergePolicy::Last),
            other => Err(ExtractorError::Config(format!(
                "unknown score merge policy '{}' (expected 'max' or 'last')",
                other
            ))),
        }
    }
}

/// Settings for one extraction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Score merge rule for repeated candidates within a method
    pub score_merge: ScoreMergePolicy,
    /// Harvest classes on the rayon pool before merging
    pub parallel: bool,
    /// Lower bound on the class progress logging interval
    pub min_progress_interval: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            score_merge: ScoreMergePolicy::default(),
            parallel: false,
            min_progress_interval: MIN_LOG_INTERVAL,
        }
    }
}

impl ExtractionConfig {
    /// Load a configuration from a JSON file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: ExtractionConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the extractor cannot run with
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.min_progress_interval == 0 {
            return Err(ExtractorError::Config(
                "min_progress_interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_merge_policies() {
        assert_eq!(ScoreMergePolicy::Max.merge(30, 12), 30);
        assert_eq!(ScoreMergePolicy::Max.merge(12, 30), 30);
        assert_eq!(ScoreMergePolicy::Last.merge(30, 12), 12);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("MAX".parse::<ScoreMergePolicy>().unwrap(), ScoreMergePolicy::Max);
        assert_eq!("last".parse::<ScoreMergePolicy>().unwrap(), ScoreMergePolicy::Last);
        assert!("first".parse::<ScoreMergePolicy>().is_err());
    }

    #[test]
    fn test_from_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"score_merge": "last"}}"#).unwrap();

        let config = ExtractionConfig::from_file(file.path()).unwrap();
        assert_eq!(config.score_merge, ScoreMergePolicy::Last);
        assert!(!config.parallel);
        assert_eq!(config.min_progress_interval, MIN_LOG_INTERVAL);
    }

    #[test]
    fn test_zero_progress_interval_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"min_progress_interval": 0}}"#).unwrap();
        assert!(ExtractionConfig::from_file(file.path()).is_err());
    }
}
