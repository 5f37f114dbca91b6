// Catalog snapshot
//
// *Le Catalogue* (The Catalog) - Validated, immutable collections the engine reads from

use crate::error::{ConciergeError, Result};
use crate::model::{PropertyDigest, QuickPrompt, Recommendation, TimelineEvent};
use crate::plan::{validate_candidates, PlanGenerator};
use crate::sample;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// On-disk catalog document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    /// Candidate recommendations, in tie-break order
    pub recommendations: Vec<Recommendation>,

    /// Canned intents
    #[serde(default)]
    pub quick_prompts: Vec<QuickPrompt>,

    /// Listed properties
    #[serde(default)]
    pub properties: Vec<PropertyDigest>,

    /// Property events, chronological
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
}

/// Validated catalog
///
/// Construction is the only place catalog invariants are checked; every
/// component reading from a `Catalog` may rely on them.
#[derive(Debug, Clone)]
pub struct Catalog {
    lead: Recommendation,
    rest: Vec<Recommendation>,
    quick_prompts: Vec<QuickPrompt>,
    properties: Vec<PropertyDigest>,
    timeline: Vec<TimelineEvent>,
}

impl Catalog {
    /// Build a catalog from its collections
    ///
    /// # Errors
    ///
    /// Configuration error when there are no recommendations, or one of them
    /// has an empty keyword set or an out-of-range priority.
    pub fn new(
        recommendations: Vec<Recommendation>,
        quick_prompts: Vec<QuickPrompt>,
        properties: Vec<PropertyDigest>,
        timeline: Vec<TimelineEvent>,
    ) -> Result<Self> {
        validate_candidates(&recommendations)?;

        let mut candidates = recommendations.into_iter();
        let lead = candidates.next().ok_or_else(|| {
            ConciergeError::config_error("recommendation catalog is empty", None)
        })?;

        Ok(Self {
            lead,
            rest: candidates.collect(),
            quick_prompts,
            properties,
            timeline,
        })
    }

    /// The built-in demo catalog
    pub fn sample() -> Result<Self> {
        Self::new(
            sample::recommendations(),
            sample::quick_prompts(),
            sample::property_digests(),
            sample::timeline_events(),
        )
    }

    /// Parse and validate a JSON catalog document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)
            .map_err(|e| ConciergeError::parse_error(e.to_string(), None))?;
        Self::from_document(document)
    }

    /// Load a JSON catalog document from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConciergeError::io_error("Failed to read catalog file", path, e))?;

        let document: CatalogDocument = serde_json::from_str(&content)
            .map_err(|e| ConciergeError::parse_error(e.to_string(), Some(path.to_path_buf())))?;

        let catalog = Self::from_document(document)?;
        info!(
            "Loaded catalog from {:?}: {} recommendations, {} properties, {} events",
            path,
            catalog.recommendation_count(),
            catalog.properties.len(),
            catalog.timeline.len()
        );
        Ok(catalog)
    }

    /// Validate a parsed document
    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        Self::new(
            document.recommendations,
            document.quick_prompts,
            document.properties,
            document.timeline,
        )
    }

    /// Convert back into a serializable document
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            recommendations: self.recommendations().cloned().collect(),
            quick_prompts: self.quick_prompts.clone(),
            properties: self.properties.clone(),
            timeline: self.timeline.clone(),
        }
    }

    /// Candidate recommendations in declared order
    pub fn recommendations(&self) -> impl Iterator<Item = &Recommendation> {
        std::iter::once(&self.lead).chain(&self.rest)
    }

    /// Number of candidate recommendations, never zero
    pub fn recommendation_count(&self) -> usize {
        1 + self.rest.len()
    }

    /// Plan generator over this catalog's candidates
    pub fn plan_generator(&self) -> PlanGenerator<'_> {
        PlanGenerator::from_validated(&self.lead, &self.rest)
    }

    /// Canned intents
    pub fn quick_prompts(&self) -> &[QuickPrompt] {
        &self.quick_prompts
    }

    /// Listed properties
    pub fn properties(&self) -> &[PropertyDigest] {
        &self.properties
    }

    /// Property events
    pub fn timeline(&self) -> &[TimelineEvent] {
        &self.timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_catalog_is_valid() {
        let catalog = Catalog::sample().unwrap();
        assert_eq!(catalog.recommendation_count(), 3);
        assert_eq!(catalog.plan_generator().candidate_count(), 3);
        assert_eq!(catalog.quick_prompts().len(), 3);
        assert_eq!(catalog.properties().len(), 3);
        assert_eq!(catalog.timeline().len(), 7);
    }

    #[test]
    fn test_empty_recommendations_rejected() {
        let err = Catalog::new(vec![], vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err, ConciergeError::Config { .. }));
    }

    #[test]
    fn test_from_json_str_minimal_document() {
        let json = r#"{
            "recommendations": [{
                "id": "rec-1",
                "intentExample": "quiet studio",
                "title": "Studio",
                "ensName": "studio.eth",
                "nightlyRate": "90 USDC",
                "summary": "",
                "propertyId": "prop-1",
                "keywords": ["studio"]
            }]
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.recommendations().next().unwrap().id, "rec-1");
        assert!(catalog.properties().is_empty());
    }

    #[test]
    fn test_from_json_str_rejects_empty_keywords() {
        let json = r#"{
            "recommendations": [{
                "id": "rec-1",
                "intentExample": "",
                "title": "Studio",
                "ensName": "studio.eth",
                "nightlyRate": "90 USDC",
                "summary": "",
                "propertyId": "prop-1",
                "keywords": []
            }]
        }"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("no keywords"));
    }

    #[test]
    fn test_from_json_str_rejects_oversized_priority() {
        let json = r#"{
            "recommendations": [{
                "id": "rec-heavy",
                "intentExample": "",
                "title": "Heavy",
                "ensName": "heavy.eth",
                "nightlyRate": "90 USDC",
                "summary": "",
                "propertyId": "prop-1",
                "keywords": ["loft"],
                "priority": 4294967295
            }]
        }"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConciergeError::Config { .. }));
        assert!(err.to_string().contains("rec-heavy"));
    }

    #[test]
    fn test_from_json_str_rejects_malformed_json() {
        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConciergeError::Parse { path: None, .. }));
    }

    #[test]
    fn test_load_round_trips_through_disk() {
        let sample = Catalog::sample().unwrap();
        let json = serde_json::to_string_pretty(&sample.to_document()).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = Catalog::load(file.path()).unwrap();
        assert!(loaded.recommendations().eq(sample.recommendations()));
        assert_eq!(loaded.properties(), sample.properties());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, ConciergeError::Io { .. }));
    }
}
