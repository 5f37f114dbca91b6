// Catalog records and derived results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry the engine can select as the answer to an intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Unique recommendation ID
    pub id: String,

    /// Intent string this recommendation answers best
    pub intent_example: String,

    /// Display title
    pub title: String,

    /// ENS name of the host
    pub ens_name: String,

    /// Display rate (e.g. "210 USDC")
    pub nightly_rate: String,

    /// Display summary
    pub summary: String,

    /// Display bullet points
    #[serde(default)]
    pub highlights: Vec<String>,

    /// Linked property ID
    pub property_id: String,

    /// Keywords matched against the normalized intent
    pub keywords: Vec<String>,

    /// Static priority used when no intent is given
    #[serde(default)]
    pub priority: u32,
}

/// A canned intent used to pre-seed a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickPrompt {
    /// Unique prompt ID
    pub id: String,

    /// The intent text itself
    pub label: String,

    /// Secondary hint line
    pub hint: String,

    /// Keywords associated with the prompt
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Booking status of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    /// Free to book
    Available,

    /// Temporarily held for a guest
    Held,

    /// Calendar conflict detected
    Conflict,
}

impl PropertyStatus {
    /// Status label, also the inventory sort key
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "available",
            PropertyStatus::Held => "held",
            PropertyStatus::Conflict => "conflict",
        }
    }
}

impl std::fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of one listed property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDigest {
    /// Unique property ID
    pub id: String,

    /// Display name
    pub name: String,

    /// ENS name of the host
    pub ens_name: String,

    /// Current status
    pub status: PropertyStatus,

    /// Human-readable next availability
    pub next_availability: String,

    /// Display price
    pub price: String,

    /// Content identifier of the calendar snapshot
    pub cid: String,

    /// Display tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Recommendations pointing at this property
    #[serde(default)]
    pub related_recommendation_ids: Vec<String>,

    /// Last calendar sync
    #[serde(rename = "lastSyncISO")]
    pub last_sync: DateTime<Utc>,
}

/// A timestamped event tied to a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    /// Unique event ID
    pub id: String,

    /// Property the event belongs to
    pub property_id: String,

    /// Display time of day
    pub time: String,

    /// Short label
    pub label: String,

    /// Longer description
    pub detail: String,
}

/// Score of one recommendation against one intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Raw relevance score
    pub score: u32,

    /// Keywords found verbatim in the intent
    pub matched_keywords: Vec<String>,
}

/// The answer to one intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentPlan {
    /// Intent as received
    pub intent: String,

    /// Intent after normalization
    pub normalized_intent: String,

    /// Selected recommendation, display fields untouched
    pub recommendation: Recommendation,

    /// Raw score of the selected recommendation
    pub score: u32,

    /// Keywords found verbatim in the intent
    pub matched_keywords: Vec<String>,

    /// Bounded certainty in [0, 1]
    pub confidence: f64,
}
