//! Corpus-wide candidate filtering
//!
//! Runs once every string has been processed. Each method's candidates are
//! ranked with their final rarity (unique candidates first, then by score)
//! and at most two are published.

use std::collections::{BTreeMap, BTreeSet};
use log::debug;

use crate::constants::scoring::{
    FILTER_SHARED_HIGH, FILTER_TOP_SCORE_FLOOR, FILTER_TOP_SCORE_SPREAD, FILTER_UNIQUE_GOOD,
    FILTER_UNIQUE_HIGH, MAX_FILTERED_PER_METHOD, MIN_FILTER_LOG_INTERVAL,
};
use crate::models::candidate::{FilteredCandidate, RankedCandidate};

/// Rank `candidates` of one method: rarity 1 first, then score descending,
/// then candidate text so equal entries come out in a fixed order.
pub fn rank_candidates(
    candidates: &BTreeSet<String>,
    scores: Option<&BTreeMap<String, i32>>,
    rarity: &BTreeMap<String, BTreeSet<String>>,
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .map(|candidate| RankedCandidate {
            candidate: candidate.clone(),
            score: scores.and_then(|s| s.get(candidate)).copied().unwrap_or(0),
            rarity: rarity.get(candidate).map_or(0, BTreeSet::len),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.is_unique()
            .cmp(&a.is_unique())
            .then_with(|| b.score.cmp(&a.score))
            .then_with(|| a.candidate.cmp(&b.candidate))
    });
    ranked
}

/// Pick the published candidates from a ranked list.
///
/// Walks the list in order and stops as soon as two are kept. A candidate is
/// kept when it is unique with a score of at least 8, when it scores at
/// least 20, or when nothing has been kept yet, the top score is at least 15
/// and it is within 2 points of that top score.
pub fn select_filtered(ranked: &[RankedCandidate]) -> Vec<&RankedCandidate> {
    let mut kept = Vec::new();
    let Some(top_score) = ranked.first().map(|rc| rc.score) else {
        return kept;
    };

    for rc in ranked {
        if kept.len() >= MAX_FILTERED_PER_METHOD {
            break;
        }
        let keep = (rc.is_unique() && rc.score >= FILTER_UNIQUE_HIGH)
            || (rc.is_unique() && rc.score >= FILTER_UNIQUE_GOOD)
            || rc.score >= FILTER_SHARED_HIGH
            || (kept.is_empty()
                && top_score >= FILTER_TOP_SCORE_FLOOR
                && rc.score >= top_score - FILTER_TOP_SCORE_SPREAD);
        if keep {
            kept.push(rc);
        }
    }
    kept
}

/// Produce the published candidate list from the completed extraction maps.
///
/// Output is ordered by method id, then by rank within the method.
pub fn filter_candidates(
    method_candidates: &BTreeMap<String, BTreeSet<String>>,
    method_raw_strings: &BTreeMap<String, BTreeSet<String>>,
    candidate_scores: &BTreeMap<String, BTreeMap<String, i32>>,
    rarity: &BTreeMap<String, BTreeSet<String>>,
) -> Vec<FilteredCandidate> {
    let total = method_candidates.len();
    let log_interval = MIN_FILTER_LOG_INTERVAL.max(total / 10);
    let mut filtered = Vec::new();

    for (processed, (method_id, candidates)) in method_candidates.iter().enumerate() {
        if (processed + 1) % log_interval == 0 {
            debug!("Processing candidates {}/{}", processed + 1, total);
        }
        if candidates.is_empty() {
            continue;
        }

        let ranked = rank_candidates(candidates, candidate_scores.get(method_id), rarity);
        let raw_strings = method_raw_strings.get(method_id).cloned().unwrap_or_default();
        filtered.extend(select_filtered(&ranked).into_iter().map(|rc| FilteredCandidate {
            method_id: method_id.clone(),
            candidate: rc.candidate.clone(),
            raw_strings: raw_strings.clone(),
        }));
    }
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(candidate: &str, score: i32, rarity: usize) -> RankedCandidate {
        RankedCandidate {
            candidate: candidate.to_string(),
            score,
            rarity,
        }
    }

    fn names<'a>(kept: &[&'a RankedCandidate]) -> Vec<&'a str> {
        kept.iter().map(|rc| rc.candidate.as_str()).collect()
    }

    #[test]
    fn test_unique_candidates_first() {
        let candidates: BTreeSet<String> = ["shared", "unique"].iter().map(|s| s.to_string()).collect();
        let scores: BTreeMap<String, i32> =
            [("shared".to_string(), 40), ("unique".to_string(), 12)].into_iter().collect();
        let mut rarity = BTreeMap::new();
        rarity.insert("shared".to_string(), ["m1", "m2"].iter().map(|s| s.to_string()).collect());
        rarity.insert("unique".to_string(), ["m1"].iter().map(|s| s.to_string()).collect());

        let ranked = rank_candidates(&candidates, Some(&scores), &rarity);
        assert_eq!(ranked[0], RankedCandidate { candidate: "unique".to_string(), score: 12, rarity: 1 });
        assert_eq!(ranked[1].rarity, 2);
    }

    #[test]
    fn test_cap_reached_before_third_is_evaluated() {
        let list = vec![ranked("a", 25, 3), ranked("b", 24, 2), ranked("c", 16, 2)];
        assert_eq!(names(&select_filtered(&list)), vec!["a", "b"]);
    }

    #[test]
    fn test_unique_with_good_score_kept() {
        let list = vec![ranked("a", 8, 1), ranked("b", 7, 1)];
        assert_eq!(names(&select_filtered(&list)), vec!["a"]);
    }

    #[test]
    fn test_shared_low_scores_dropped() {
        let list = vec![ranked("a", 14, 2), ranked("b", 12, 4)];
        assert!(select_filtered(&list).is_empty());
    }

    #[test]
    fn test_top_score_fallback_only_for_first_kept() {
        // 18 and 17 are shared and below 20, but the top score is at least 15
        let list = vec![ranked("a", 18, 2), ranked("b", 17, 2)];
        assert_eq!(names(&select_filtered(&list)), vec!["a"]);

        // only the first kept candidate may use the fallback
        let list = vec![ranked("a", 19, 2), ranked("b", 16, 2)];
        assert_eq!(names(&select_filtered(&list)), vec!["a"]);
    }

    #[test]
    fn test_top_score_measured_from_ranked_head() {
        // the head is a weak unique candidate, so the fallback cannot rescue the shared one
        let list = vec![ranked("a", 5, 1), ranked("b", 18, 2)];
        assert!(select_filtered(&list).is_empty());
    }

    #[test]
    fn test_filter_candidates_attaches_raw_strings() {
        let mut method_candidates = BTreeMap::new();
        method_candidates.insert("M".to_string(), BTreeSet::from(["validateInput".to_string()]));
        let mut raw = BTreeMap::new();
        raw.insert("M".to_string(), BTreeSet::from(["DataProcessor, validateInput, invalid data: %s".to_string()]));
        let mut scores = BTreeMap::new();
        scores.insert("M".to_string(), BTreeMap::from([("validateInput".to_string(), 43)]));
        let mut rarity = BTreeMap::new();
        rarity.insert("validateInput".to_string(), BTreeSet::from(["M".to_string()]));

        let filtered = filter_candidates(&method_candidates, &raw, &scores, &rarity);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].method_id, "M");
        assert_eq!(filtered[0].candidate, "validateInput");
        assert!(filtered[0].raw_strings.contains("DataProcessor, validateInput, invalid data: %s"));
    }
}
