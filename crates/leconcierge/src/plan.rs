// Plan generation
//
// Normalizes the intent, scores every candidate and keeps the best one.

use crate::error::{ConciergeError, Result};
use crate::model::{IntentPlan, Recommendation, ScoreResult};
use crate::normalize::normalize_intent;
use crate::ranking::{compute_confidence, KeywordScorer, MAX_PRIORITY};
use tracing::debug;

/// Selects the recommendation that best answers an intent
///
/// Holds a validated, non-empty candidate list. Ties on score go to the
/// candidate declared first in the catalog.
#[derive(Debug, Clone)]
pub struct PlanGenerator<'a> {
    first: &'a Recommendation,
    rest: &'a [Recommendation],
    scorer: KeywordScorer,
}

impl<'a> PlanGenerator<'a> {
    /// Create a generator over a candidate list
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the list is empty or any candidate
    /// has no keywords or a priority above `MAX_PRIORITY`.
    pub fn new(candidates: &'a [Recommendation]) -> Result<Self> {
        validate_candidates(candidates)?;

        let (first, rest) = candidates.split_first().ok_or_else(|| {
            ConciergeError::config_error("recommendation catalog is empty", None)
        })?;

        Ok(Self::from_validated(first, rest))
    }

    /// Generator over candidates that already passed `validate_candidates`
    pub(crate) fn from_validated(first: &'a Recommendation, rest: &'a [Recommendation]) -> Self {
        Self {
            first,
            rest,
            scorer: KeywordScorer::new(),
        }
    }

    /// Build a plan for a raw intent; `None` behaves like the empty intent
    pub fn generate(&self, intent: Option<&str>) -> IntentPlan {
        let intent = intent.unwrap_or_default();
        let normalized = normalize_intent(intent);

        let mut best = self.first;
        let mut best_result = self.scorer.score(&normalized, self.first);

        for candidate in self.rest {
            let result = self.scorer.score(&normalized, candidate);
            // strictly greater keeps the earliest candidate on ties
            if result.score > best_result.score {
                best = candidate;
                best_result = result;
            }
        }

        let ScoreResult {
            score,
            matched_keywords,
        } = best_result;
        let confidence = compute_confidence(score);

        debug!(
            "Selected '{}' for intent '{}' (score={}, confidence={})",
            best.id, normalized, score, confidence
        );

        IntentPlan {
            intent: intent.to_string(),
            normalized_intent: normalized,
            recommendation: best.clone(),
            score,
            matched_keywords,
            confidence,
        }
    }

    /// Number of candidates considered per plan
    pub fn candidate_count(&self) -> usize {
        1 + self.rest.len()
    }
}

/// Check the candidate invariants the scorer relies on
pub(crate) fn validate_candidates(candidates: &[Recommendation]) -> Result<()> {
    if candidates.is_empty() {
        return Err(ConciergeError::config_error(
            "recommendation catalog is empty",
            Some("Supply at least one recommendation.".to_string()),
        ));
    }

    if let Some(empty) = candidates.iter().find(|rec| rec.keywords.is_empty()) {
        return Err(ConciergeError::config_error(
            format!("recommendation '{}' has no keywords", empty.id),
            Some("Give every recommendation at least one keyword.".to_string()),
        ));
    }

    if let Some(heavy) = candidates.iter().find(|rec| rec.priority > MAX_PRIORITY) {
        return Err(ConciergeError::config_error(
            format!(
                "recommendation '{}' has priority {} (maximum {})",
                heavy.id, heavy.priority, MAX_PRIORITY
            ),
            Some(format!("Keep priorities between 0 and {}.", MAX_PRIORITY)),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, keywords: &[&str], priority: u32) -> Recommendation {
        Recommendation {
            id: id.to_string(),
            intent_example: String::new(),
            title: format!("Title {}", id),
            ens_name: format!("{}.eth", id),
            nightly_rate: "100 USDC".to_string(),
            summary: "summary".to_string(),
            highlights: vec!["highlight".to_string()],
            property_id: format!("prop-{}", id),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            priority,
        }
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let err = PlanGenerator::new(&[]).unwrap_err();
        assert!(matches!(err, ConciergeError::Config { .. }));
    }

    #[test]
    fn test_empty_keyword_set_is_rejected() {
        let catalog = vec![candidate("a", &["loft"], 0), candidate("b", &[], 0)];
        let err = PlanGenerator::new(&catalog).unwrap_err();
        assert!(err.to_string().contains("'b'"));
    }

    #[test]
    fn test_priority_above_maximum_is_rejected() {
        let catalog = vec![candidate("a", &["loft"], MAX_PRIORITY + 1)];
        let err = PlanGenerator::new(&catalog).unwrap_err();
        assert!(err.to_string().contains("priority"));

        let catalog = vec![candidate("a", &["loft"], MAX_PRIORITY)];
        assert!(PlanGenerator::new(&catalog).is_ok());
    }

    #[test]
    fn test_highest_score_wins() {
        let catalog = vec![
            candidate("a", &["garden"], 0),
            candidate("b", &["loft", "palermo"], 0),
        ];
        let generator = PlanGenerator::new(&catalog).unwrap();
        let plan = generator.generate(Some("Loft in Palermo"));
        assert_eq!(plan.recommendation.id, "b");
        assert_eq!(plan.matched_keywords, vec!["loft", "palermo"]);
        assert_eq!(plan.score, 15);
        assert_eq!(plan.confidence, 0.6);
    }

    #[test]
    fn test_tie_goes_to_earliest_candidate() {
        let catalog = vec![
            candidate("a", &["desk"], 1),
            candidate("b", &["fiber"], 1),
            candidate("c", &["desk"], 1),
        ];
        let generator = PlanGenerator::new(&catalog).unwrap();
        assert_eq!(generator.generate(Some("unrelated")).recommendation.id, "a");
        assert_eq!(generator.generate(Some("desk and fiber")).recommendation.id, "a");
    }

    #[test]
    fn test_absent_intent_matches_empty_intent() {
        let catalog = vec![candidate("a", &["desk"], 1), candidate("b", &["fiber"], 4)];
        let generator = PlanGenerator::new(&catalog).unwrap();
        let absent = generator.generate(None);
        let empty = generator.generate(Some(""));
        assert_eq!(absent, empty);
        assert_eq!(absent.recommendation.id, "b");
        assert_eq!(absent.score, 9);
        assert!(absent.matched_keywords.is_empty());
    }

    #[test]
    fn test_plan_keeps_raw_intent_and_display_fields() {
        let catalog = vec![candidate("a", &["desk"], 0)];
        let generator = PlanGenerator::new(&catalog).unwrap();
        let plan = generator.generate(Some("A DESK, please!"));
        assert_eq!(plan.intent, "A DESK, please!");
        assert_eq!(plan.normalized_intent, "a desk please");
        assert_eq!(plan.recommendation, catalog[0]);
        assert_eq!(generator.candidate_count(), 1);
    }
}
