//! Applying recommended names to methods
//!
//! The extractor never renames anything itself. A `RenameSink` receives the
//! proposals; `RenameLog` is a sink that simply records them.

use std::collections::BTreeSet;
use log::{debug, info, warn};
use serde::{Serialize, Deserialize};

use crate::errors::{ExtractorError, ExtractorResult};
use crate::utils::java::is_valid_identifier;

/// Receives method renames
pub trait RenameSink {
    /// Attach `name` to the method identified by `method_id`
    fn record_rename(&mut self, method_id: &str, name: &str) -> ExtractorResult<()>;
}

/// One recorded rename
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRecord {
    pub method_id: String,
    pub name: String,
}

/// An append-only list of renames.
///
/// When built with `with_known_methods`, renames of ids outside that set are
/// rejected with `UnknownMethod`.
#[derive(Debug, Clone, Default)]
pub struct RenameLog {
    records: Vec<RenameRecord>,
    known_methods: Option<BTreeSet<String>>,
}

impl RenameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_known_methods<I, S>(methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: Vec::new(),
            known_methods: Some(methods.into_iter().map(Into::into).collect()),
        }
    }

    pub fn records(&self) -> &[RenameRecord] {
        &self.records
    }

    /// The most recent name recorded for `method_id`
    pub fn current_name(&self, method_id: &str) -> Option<&str> {
        self.records
            .iter()
            .rev()
            .find(|r| r.method_id == method_id)
            .map(|r| r.name.as_str())
    }
}

impl RenameSink for RenameLog {
    fn record_rename(&mut self, method_id: &str, name: &str) -> ExtractorResult<()> {
        if let Some(known) = &self.known_methods {
            if !known.contains(method_id) {
                return Err(ExtractorError::UnknownMethod(method_id.to_string()));
            }
        }
        self.records.push(RenameRecord {
            method_id: method_id.to_string(),
            name: name.to_string(),
        });
        Ok(())
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

fn prefix_if_needed(mut name: String) -> String {
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, 'm');
    }
    name
}

/// Turn a proposed name into a valid Java method name.
///
/// Characters outside `[A-Za-z0-9_$]` become `_`, and a leading digit gets an
/// `m` prefix. If that is still not a valid identifier the offending
/// characters are dropped instead. Returns `None` for empty input and for
/// names that cannot be repaired (reserved words).
pub fn sanitize_method_name(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }

    let replaced = prefix_if_needed(
        name.chars().map(|c| if is_name_char(c) { c } else { '_' }).collect(),
    );
    if is_valid_identifier(&replaced) {
        return Some(replaced);
    }

    let stripped = prefix_if_needed(name.chars().filter(|c| is_name_char(*c)).collect());
    if is_valid_identifier(&stripped) {
        Some(stripped)
    } else {
        None
    }
}

/// Sanitize `proposed` and rename one method to it.
///
/// Returns the name actually recorded. Fails with `InvalidName` when the
/// proposal has no valid form, otherwise with whatever the sink reports.
pub fn rename_method<S>(sink: &mut S, method_id: &str, proposed: &str) -> ExtractorResult<String>
where
    S: RenameSink + ?Sized,
{
    let name = sanitize_method_name(proposed).ok_or_else(|| ExtractorError::InvalidName {
        method_id: method_id.to_string(),
        name: proposed.to_string(),
    })?;
    sink.record_rename(method_id, &name)?;
    Ok(name)
}

/// Outcome of a bulk rename
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameSummary {
    /// Renames the sink accepted
    pub renamed: usize,
    /// Renames the sink rejected, usually for an unknown method
    pub not_found: usize,
    /// Proposals with no valid sanitized form
    pub invalid: usize,
}

/// Rename every `(method_id, name)` pair into `sink`.
///
/// Failures are counted rather than aborting the batch.
pub fn apply_renames<'a, S, I>(sink: &mut S, renames: I) -> RenameSummary
where
    S: RenameSink + ?Sized,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut summary = RenameSummary::default();

    for (method_id, proposed) in renames {
        match rename_method(sink, method_id, proposed) {
            Ok(name) => {
                debug!("Renamed method {} to {}", method_id, name);
                summary.renamed += 1;
            }
            Err(e @ ExtractorError::InvalidName { .. }) => {
                debug!("{}", e);
                summary.invalid += 1;
            }
            Err(e) => {
                debug!("Rename of {} failed: {}", method_id, e);
                summary.not_found += 1;
            }
        }
    }

    if summary.not_found > 0 || summary.invalid > 0 {
        warn!(
            "Renamed {} methods ({} not found, {} invalid names)",
            summary.renamed, summary.not_found, summary.invalid
        );
    } else {
        info!("Renamed {} methods", summary.renamed);
    }
    summary
}
