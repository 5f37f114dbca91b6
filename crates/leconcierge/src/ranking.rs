// Keyword scoring and confidence mapping

use crate::model::{Recommendation, ScoreResult};
use std::collections::HashSet;

/// Score every candidate starts from
pub const BASELINE_SCORE: u32 = 5;

/// Weight of a keyword found verbatim in the intent
pub const EXACT_MATCH_WEIGHT: u32 = 5;

/// Weight of a keyword found only through one of its word parts
pub const PARTIAL_MATCH_WEIGHT: u32 = 2;

/// Weight of the static priority once an intent is present
pub const PRIORITY_WEIGHT: u32 = 2;

/// Shortest keyword part that may produce a partial match
pub const MIN_PARTIAL_PART_LEN: usize = 4;

/// Highest priority a catalog may declare
pub const MAX_PRIORITY: u32 = 100;

/// Score at which confidence saturates
pub const CONFIDENCE_CEILING: u32 = 25;

/// Keyword scorer for recommendations
///
/// Scoring rules, applied to a normalized intent:
///
/// - empty intent: `priority + BASELINE_SCORE`, no matches reported
/// - exact match: the lower-cased keyword is a substring of the intent
/// - partial match: not exact, but one whitespace-separated part of the
///   keyword with at least `MIN_PARTIAL_PART_LEN` characters is a substring
///
/// Only exact matches are reported back; partial matches just add score.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScorer;

impl KeywordScorer {
    /// Create a new keyword scorer
    pub fn new() -> Self {
        Self
    }

    /// Score one recommendation against an already normalized intent
    pub fn score(&self, normalized_intent: &str, recommendation: &Recommendation) -> ScoreResult {
        if normalized_intent.is_empty() {
            return ScoreResult {
                score: recommendation.priority.saturating_add(BASELINE_SCORE),
                matched_keywords: Vec::new(),
            };
        }

        let mut seen = HashSet::new();
        let mut matched_keywords = Vec::new();
        let mut partial_matches = 0u32;

        for keyword in &recommendation.keywords {
            let lowered = keyword.to_lowercase();
            if !seen.insert(lowered.clone()) {
                continue;
            }

            if normalized_intent.contains(&lowered) {
                matched_keywords.push(keyword.clone());
            } else if is_partial_match(normalized_intent, &lowered) {
                partial_matches = partial_matches.saturating_add(1);
            }
        }

        let exact_matches = u32::try_from(matched_keywords.len()).unwrap_or(u32::MAX);
        let score = exact_matches
            .saturating_mul(EXACT_MATCH_WEIGHT)
            .saturating_add(partial_matches.saturating_mul(PARTIAL_MATCH_WEIGHT))
            .saturating_add(recommendation.priority.saturating_mul(PRIORITY_WEIGHT))
            .saturating_add(BASELINE_SCORE);

        ScoreResult {
            score,
            matched_keywords,
        }
    }
}

fn is_partial_match(normalized_intent: &str, lowered_keyword: &str) -> bool {
    lowered_keyword
        .split_whitespace()
        .any(|part| part.chars().count() >= MIN_PARTIAL_PART_LEN && normalized_intent.contains(part))
}

/// Map a raw score onto [0, 1], rounded to two decimals.
///
/// Monotonic in `score` and saturating at `CONFIDENCE_CEILING`.
pub fn compute_confidence(score: u32) -> f64 {
    let capped = score.min(CONFIDENCE_CEILING);
    (f64::from(capped) / f64::from(CONFIDENCE_CEILING) * 100.0).round() / 100.0
}
