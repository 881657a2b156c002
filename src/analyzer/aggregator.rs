//! Ranking the candidates of a single string occurrence

use crate::analyzer::candidates::find_candidates;
use crate::analyzer::classifier::is_excluded;
use crate::analyzer::scoring::{score, ScoringContext};
use crate::analyzer::tokenizer::tokenize;
use crate::constants::scoring::{
    MAX_CANDIDATES_PER_OCCURRENCE, MIN_SCORE_TO_KEEP, MIN_STRING_LENGTH, MIN_TOKEN_LENGTH,
    OCCURRENCE_SCORE_SPREAD,
};
use crate::models::candidate::CandidateScore;
use crate::utils::text::char_len;

/// Score every candidate of `s`, keeping those at or above the minimum score,
/// in discovery order.
pub fn scored_candidates(s: &str) -> Vec<CandidateScore> {
    let mut scored = Vec::new();
    if char_len(s) < MIN_STRING_LENGTH {
        return scored;
    }

    let tokens = tokenize(s);
    for (index, token) in tokens.iter().enumerate() {
        let token = token.trim();
        if char_len(token) < MIN_TOKEN_LENGTH || is_excluded(token) {
            continue;
        }

        for candidate in find_candidates(token) {
            let ctx = ScoringContext {
                candidate,
                token,
                token_index: index,
                tokens: &tokens,
                full_string: s,
            };
            let points = score(&ctx);
            if points >= MIN_SCORE_TO_KEEP {
                scored.push(CandidateScore {
                    candidate: candidate.to_string(),
                    source_string: s.to_string(),
                    score: points,
                });
            }
        }
    }
    scored
}

/// Keep the best candidates of one occurrence.
///
/// At most two survive, best first; the runner-up is dropped when it trails
/// the top score by more than the allowed spread. Ties keep discovery order.
pub fn select_top(mut scored: Vec<CandidateScore>) -> Vec<CandidateScore> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(MAX_CANDIDATES_PER_OCCURRENCE);

    if let Some(top) = scored.first().map(|cs| cs.score) {
        if let Some(cut) = scored
            .iter()
            .skip(1)
            .position(|cs| cs.score < top - OCCURRENCE_SCORE_SPREAD)
        {
            scored.truncate(cut + 1);
        }
    }
    scored
}

/// Candidates of `s` that enter its method's maps
pub fn aggregate(s: &str) -> Vec<CandidateScore> {
    select_top(scored_candidates(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cs(candidate: &str, score: i32) -> CandidateScore {
        CandidateScore {
            candidate: candidate.to_string(),
            source_string: "s".to_string(),
            score,
        }
    }

    #[test]
    fn test_worked_example() {
        let kept = aggregate("DataProcessor, validateInput, invalid data: %s");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].candidate, "validateInput");
        assert_eq!(kept[0].score, 43);
        assert_eq!(kept[0].source_string, "DataProcessor, validateInput, invalid data: %s");
    }

    #[test]
    fn test_short_strings_produce_nothing() {
        assert!(aggregate("abc").is_empty());
        assert!(scored_candidates("aBc").is_empty());
        assert_eq!(scored_candidates("doIt")[0].score, 20);
    }

    #[test]
    fn test_low_scores_discarded() {
        // -3 for a short single word still leaves 17, but a blacklisted word never survives
        assert!(aggregate("message").is_empty());
        assert_eq!(aggregate("refresh")[0].score, 17);
    }

    #[test]
    fn test_cap_at_two() {
        let kept = select_top(vec![cs("a", 20), cs("b", 30), cs("c", 25)]);
        let names: Vec<&str> = kept.iter().map(|c| c.candidate.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn test_runner_up_dropped_when_far_behind() {
        let kept = select_top(vec![cs("a", 30), cs("b", 24)]);
        assert_eq!(kept.len(), 1);
        // exactly five below is still kept
        let kept = select_top(vec![cs("a", 30), cs("b", 25)]);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_ties_keep_discovery_order() {
        let kept = select_top(vec![cs("first", 20), cs("second", 20), cs("third", 20)]);
        assert_eq!(kept[0].candidate, "first");
        assert_eq!(kept[1].candidate, "second");
    }

    #[test]
    fn test_multiple_candidates_in_one_string() {
        let kept = aggregate("loadConfig, saveState");
        let names: Vec<&str> = kept.iter().map(|c| c.candidate.as_str()).collect();
        assert_eq!(names, vec!["loadConfig", "saveState"]);
        assert!(kept.iter().all(|c| c.score == 23));
    }
}
