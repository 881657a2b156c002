//! Core extraction engine for decompiled programs

pub mod tokenizer;
pub mod classifier;
pub mod candidates;
pub mod scoring;
pub mod aggregator;
pub mod source_files;
pub mod filter;

use std::time::Instant;
use log::{debug, info};
use rayon::prelude::*;

use crate::config::ExtractionConfig;
use crate::constants::scoring::{LOG_INTERVAL_DIVISOR, MIN_STRING_LENGTH};
use crate::errors::{ExtractorError, ExtractorResult};
use crate::models::{AnalysisResult, ClassHarvest, Occurrence, SourceFileReference, StringConstant};
use crate::program::{ClassModel, MethodModel, ProgramModel};
use crate::utils::text::char_len;

pub use self::aggregator::{aggregate, scored_candidates, select_top};
pub use self::scoring::{explain, score, ScoreBreakdown, ScoringContext, Signal};
pub use self::source_files::detect_source_file;

/// Main analyzer that coordinates the extraction process
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: ExtractionConfig,
}

impl Analyzer {
    /// Create an analyzer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract every class of `program` and run the global filter.
    pub fn extract<P: ProgramModel>(&self, program: &P) -> ExtractorResult<AnalysisResult> {
        let mut result = AnalysisResult::new(self.config.score_merge);
        self.extract_into(program, &mut result)?;
        Ok(result)
    }

    /// Extract `program` into an existing, not yet finalized result, then
    /// finalize it.
    ///
    /// The result must use the same score merge policy as this analyzer,
    /// otherwise nothing is recorded and `Config` is returned.
    pub fn extract_into<P: ProgramModel>(
        &self,
        program: &P,
        result: &mut AnalysisResult,
    ) -> ExtractorResult<()> {
        if result.is_finalized() {
            return Err(ExtractorError::AlreadyFinalized);
        }
        if result.merge_policy() != self.config.score_merge {
            return Err(ExtractorError::Config(format!(
                "result merges scores with {:?} but the analyzer is configured for {:?}",
                result.merge_policy(),
                self.config.score_merge
            )));
        }
        let start = Instant::now();
        let classes = program.classes();
        let total = classes.len();
        let log_interval = self.config.min_progress_interval.max(total / LOG_INTERVAL_DIVISOR).max(1);
        info!("Extracting strings from {} classes", total);

        if self.config.parallel {
            debug!("Harvesting classes on {} threads", rayon::current_num_threads());
            let harvests: Vec<ClassHarvest> = classes
                .par_iter()
                .map(|class| self.harvest_class(class))
                .collect();
            for (index, harvest) in harvests.into_iter().enumerate() {
                result.absorb(harvest)?;
                log_progress(index, total, log_interval);
            }
        } else {
            for (index, harvest) in self.harvest(program).enumerate() {
                result.absorb(harvest)?;
                log_progress(index, total, log_interval);
            }
        }

        let elapsed = start.elapsed().as_millis() as u64;
        result.set_extraction_ms(elapsed);
        let stats = result.stats();
        info!(
            "Extraction complete: {} classes, {} methods, {} strings in {}ms",
            stats.classes_processed, stats.methods_processed, stats.strings_recorded, elapsed
        );
        if stats.methods_failed > 0 {
            info!("{} methods could not be read and were skipped", stats.methods_failed);
        }

        result.finalize();
        Ok(())
    }

    /// Per-class partial results, produced lazily in class order.
    ///
    /// Each item depends only on its own class; fold them into a result with
    /// `AnalysisResult::absorb` and call `finalize` once the sequence ends.
    pub fn harvest<'a, P: ProgramModel>(
        &'a self,
        program: &'a P,
    ) -> impl Iterator<Item = ClassHarvest> + 'a {
        program.classes().iter().map(move |class| self.harvest_class(class))
    }

    /// Scan the string constants of one class.
    ///
    /// Methods that fail to load or expose their instructions are counted and
    /// skipped; the rest of the class is still processed.
    pub fn harvest_class<C: ClassModel>(&self, class: &C) -> ClassHarvest {
        let mut harvest = ClassHarvest {
            class_name: class.full_name().to_string(),
            ..ClassHarvest::default()
        };

        for method in class.methods() {
            if method.has_no_code() {
                harvest.methods_without_code += 1;
                continue;
            }
            let instructions = match method.load().and_then(|_| method.instructions()) {
                Ok(instructions) => instructions,
                Err(e) => {
                    debug!("Skipping method {}: {}", method.method_id(), e);
                    harvest.methods_failed += 1;
                    continue;
                }
            };

            harvest.methods_processed += 1;
            for value in instructions.iter().filter_map(|insn| insn.string_value()) {
                harvest_string(&mut harvest, method, value);
            }
        }
        harvest
    }
}

fn harvest_string<M: MethodModel>(harvest: &mut ClassHarvest, method: &M, value: &str) {
    if char_len(value) < MIN_STRING_LENGTH {
        return;
    }

    harvest.strings.push(StringConstant::new(
        value,
        method.method_id(),
        harvest.class_name.as_str(),
    ));

    if let Some(path) = detect_source_file(value) {
        harvest.source_files.push((
            path.to_string(),
            SourceFileReference {
                owner_method_id: method.method_id().to_string(),
                owner_method_name: method.name().to_string(),
                raw_string: value.to_string(),
            },
        ));
    }

    let kept = aggregate(value);
    if !kept.is_empty() {
        harvest.occurrences.push(Occurrence {
            method_id: method.method_id().to_string(),
            kept,
        });
    }
}

fn log_progress(index: usize, total: usize, interval: usize) {
    let processed = index + 1;
    if processed % interval == 0 || processed == total {
        info!("Processed {}/{} classes", processed, total);
    }
}
