// leconcierge - Intent Matching Engine
//
// *Le Concierge* (The Concierge) - Matches free-text booking intents against a fixed catalog

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Validated catalog snapshot and JSON loading
pub mod catalog;

/// Facade over the current catalog snapshot
pub mod concierge;

/// Configuration and loading errors
pub mod error;

/// Property inventory ordering
pub mod inventory;

/// Catalog records and derived results
pub mod model;

/// Intent normalization
pub mod normalize;

/// Plan generation
pub mod plan;

/// Keyword scoring and confidence mapping
pub mod ranking;

/// Built-in demo catalog
pub mod sample;

/// Property timeline lookup
pub mod timeline;

pub use catalog::{Catalog, CatalogDocument};
pub use concierge::Concierge;
pub use error::{ConciergeError, Result};
pub use inventory::InventoryOrderer;
pub use model::{
    IntentPlan, PropertyDigest, PropertyStatus, QuickPrompt, Recommendation, ScoreResult,
    TimelineEvent,
};
pub use normalize::normalize_intent;
pub use plan::PlanGenerator;
pub use ranking::{compute_confidence, KeywordScorer};
pub use timeline::TimelineLookup;
