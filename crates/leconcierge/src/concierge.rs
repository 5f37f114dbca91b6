// Concierge facade
//
// Owns the current catalog snapshot and exposes the engine's entry points.

use crate::catalog::Catalog;
use crate::inventory::InventoryOrderer;
use crate::model::{IntentPlan, PropertyDigest, QuickPrompt, TimelineEvent};
use crate::timeline::TimelineLookup;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

/// Entry point for plan generation, inventory and timelines
///
/// Every call works on one `Arc<Catalog>` snapshot. `replace_catalog` swaps
/// the whole snapshot, so a call never observes a partial update.
#[derive(Debug)]
pub struct Concierge {
    catalog: RwLock<Arc<Catalog>>,
}

impl Concierge {
    /// Create a concierge over a validated catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Current catalog snapshot
    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Atomically replace the catalog
    pub fn replace_catalog(&self, catalog: Catalog) {
        let next = Arc::new(catalog);
        let mut guard = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        *guard = next;
        info!(
            "Catalog replaced: {} recommendations, {} properties",
            guard.recommendation_count(),
            guard.properties().len()
        );
    }

    /// Select the best recommendation for an intent
    pub fn generate_plan(&self, intent: Option<&str>) -> IntentPlan {
        self.snapshot().plan_generator().generate(intent)
    }

    /// Ordered copy of the property inventory
    pub fn order_inventory(&self, featured_id: Option<&str>) -> Vec<PropertyDigest> {
        let catalog = self.snapshot();
        InventoryOrderer::new(catalog.properties()).order(featured_id)
    }

    /// Events for a property, or the generic fallback timeline
    pub fn lookup_timeline(&self, property_id: &str) -> Vec<TimelineEvent> {
        let catalog = self.snapshot();
        TimelineLookup::new(catalog.timeline()).lookup(property_id)
    }

    /// Canned intents, unchanged
    pub fn list_prompts(&self) -> Vec<QuickPrompt> {
        self.snapshot().quick_prompts().to_vec()
    }
}
