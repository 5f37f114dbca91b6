// Inventory ordering

use crate::model::PropertyDigest;
use std::cmp::Ordering;

/// Orders property digests for display
///
/// Properties sort by status label (`available` < `conflict` < `held`). A
/// featured property, when given, is pinned in front regardless of status.
/// The sort is stable, so equal statuses keep their catalog order.
#[derive(Debug, Clone, Copy)]
pub struct InventoryOrderer<'a> {
    properties: &'a [PropertyDigest],
}

impl<'a> InventoryOrderer<'a> {
    /// Create an orderer over the property catalog
    pub fn new(properties: &'a [PropertyDigest]) -> Self {
        Self { properties }
    }

    /// Return a full, ordered copy of the catalog
    pub fn order(&self, featured_id: Option<&str>) -> Vec<PropertyDigest> {
        let mut ordered = self.properties.to_vec();
        let featured_id = featured_id.filter(|id| !id.is_empty());

        ordered.sort_by(|a, b| {
            let pinned = match featured_id {
                Some(id) => (b.id == id).cmp(&(a.id == id)),
                None => Ordering::Equal,
            };
            pinned.then_with(|| a.status.as_str().cmp(b.status.as_str()))
        });

        ordered
    }
}
