//! Derived views over a finalized analysis, and the JSON report
//!
//! Nothing here changes the analysis. These are read-only projections for
//! reviewing the recommendations.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;

use crate::errors::ExtractorResult;
use crate::models::result::SourceFileMap;
use crate::models::{AnalysisResult, ExtractionStats, StringConstant};
use crate::program::{ClassModel, MethodModel, ProgramModel};

/// Group key for methods that no source-file string refers to
pub const NO_SOURCE_FILE: &str = "(No source file)";

/// Name shown for methods whose current name is not known
pub const UNKNOWN_NAME: &str = "?";

/// The single best candidate of a method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopCandidate {
    pub method_id: String,
    pub candidate: String,
    pub score: i32,
    pub rarity: usize,
    /// Source file named by one of the method's strings
    pub source_file: Option<String>,
    /// The first string of the method that named a source file
    pub source_string: Option<String>,
    pub raw_strings: BTreeSet<String>,
}

/// Best candidate per method: rarity 1 preferred, then the highest score.
///
/// Sorted with unique candidates first, then by score descending. Methods
/// with equal keys stay in method id order.
pub fn top_candidates(result: &AnalysisResult) -> Vec<TopCandidate> {
    let mut method_files: BTreeMap<&str, (&str, &str)> = BTreeMap::new();
    for (path, references) in result.source_files() {
        for reference in references {
            method_files
                .entry(reference.owner_method_id.as_str())
                .or_insert((path.as_str(), reference.raw_string.as_str()));
        }
    }

    let mut top = Vec::new();
    for (method_id, candidates) in result.method_candidates() {
        let mut best: Option<(&str, i32, usize)> = None;
        for candidate in candidates {
            let score = result.score(method_id, candidate).unwrap_or(0);
            let rarity = result.rarity(candidate);
            let better = match best {
                None => true,
                Some((_, best_score, best_rarity)) => {
                    if rarity == 1 && best_rarity != 1 {
                        true
                    } else if rarity != 1 && best_rarity == 1 {
                        false
                    } else {
                        score > best_score
                    }
                }
            };
            if better {
                best = Some((candidate.as_str(), score, rarity));
            }
        }

        if let Some((candidate, score, rarity)) = best {
            let file = method_files.get(method_id.as_str());
            top.push(TopCandidate {
                method_id: method_id.clone(),
                candidate: candidate.to_string(),
                score,
                rarity,
                source_file: file.map(|(path, _)| path.to_string()),
                source_string: file.map(|(_, raw)| raw.to_string()),
                raw_strings: result
                    .method_raw_strings()
                    .get(method_id)
                    .cloned()
                    .unwrap_or_default(),
            });
        }
    }

    top.sort_by(|a, b| (b.rarity == 1).cmp(&(a.rarity == 1)).then_with(|| b.score.cmp(&a.score)));
    top
}

/// `top_candidates` grouped by source file
pub fn top_candidates_by_source_file(result: &AnalysisResult) -> BTreeMap<String, Vec<TopCandidate>> {
    let mut grouped: BTreeMap<String, Vec<TopCandidate>> = BTreeMap::new();
    for candidate in top_candidates(result) {
        let key = candidate
            .source_file
            .clone()
            .unwrap_or_else(|| NO_SOURCE_FILE.to_string());
        grouped.entry(key).or_default().push(candidate);
    }
    grouped
}

/// `com/example/Foo.java` -> `com.example.Foo`
pub fn class_name_from_file_path(path: &str) -> String {
    let stem = match path.rfind('.') {
        Some(dot) if dot > 0 => &path[..dot],
        _ => path,
    };
    stem.replace(['/', '\\'], ".")
}

/// Does `candidate` look unrelated to the method's current name?
///
/// Unknown and obfuscated-looking names (`m` plus at most two characters)
/// never count as conflicting.
pub fn looks_false_positive(current_name: &str, candidate: &str) -> bool {
    if current_name == UNKNOWN_NAME
        || (current_name.starts_with('m') && current_name.chars().count() <= 3)
    {
        return false;
    }
    let current = current_name.to_lowercase();
    let candidate = candidate.to_lowercase();
    !current.contains(&candidate) && !candidate.contains(&current)
}

/// Method id -> current name, for every method of `program`
pub fn method_names<P: ProgramModel>(program: &P) -> BTreeMap<String, String> {
    program
        .classes()
        .iter()
        .flat_map(|class| class.methods())
        .map(|method| (method.method_id().to_string(), method.name().to_string()))
        .collect()
}

/// A published recommendation annotated for review
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedCandidate {
    pub method_id: String,
    pub current_name: String,
    pub candidate: String,
    pub score: i32,
    pub rarity: usize,
    pub looks_false_positive: bool,
    pub raw_strings: BTreeSet<String>,
}

/// Serializable summary of one finalized analysis
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub version: String,
    pub stats: ExtractionStats,
    pub filtered_candidates: Vec<ReportedCandidate>,
    pub top_candidates_by_source_file: BTreeMap<String, Vec<TopCandidate>>,
    pub source_files: SourceFileMap,
    /// Source file path -> the class name it implies
    pub source_file_classes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strings: Option<Vec<StringConstant>>,
}

/// Build the report of a finalized result.
///
/// `current_names` maps method ids to their present names; missing methods
/// are shown as `?`. Fails with `NotFinalized` before the global filter ran.
pub fn build_report(
    result: &AnalysisResult,
    current_names: &BTreeMap<String, String>,
    include_strings: bool,
) -> ExtractorResult<AnalysisReport> {
    let filtered = result.filtered_candidates()?;

    let filtered_candidates = filtered
        .iter()
        .map(|fc| {
            let current_name = current_names
                .get(&fc.method_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_NAME.to_string());
            ReportedCandidate {
                looks_false_positive: looks_false_positive(&current_name, &fc.candidate),
                method_id: fc.method_id.clone(),
                current_name,
                candidate: fc.candidate.clone(),
                score: result.score(&fc.method_id, &fc.candidate).unwrap_or(0),
                rarity: result.rarity(&fc.candidate),
                raw_strings: fc.raw_strings.clone(),
            }
        })
        .collect();

    Ok(AnalysisReport {
        version: crate::VERSION.to_string(),
        stats: result.stats().clone(),
        filtered_candidates,
        top_candidates_by_source_file: top_candidates_by_source_file(result),
        source_files: result.source_files().clone(),
        source_file_classes: result
            .source_files()
            .keys()
            .map(|path| (path.clone(), class_name_from_file_path(path)))
            .collect(),
        strings: include_strings.then(|| result.strings().to_vec()),
    })
}

/// Write `report` as pretty JSON, creating parent directories as needed
pub fn save_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating directory: {}", parent.display());
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let json = serde_json::to_string_pretty(report)
        .with_context(|| "Failed to serialize report to JSON")?;
    fs::write(path, &json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!("Saved report ({} bytes) to {}", json.len(), path.display());
    Ok(())
}
