// Timeline lookup

use crate::model::TimelineEvent;
use tracing::debug;

/// Number of catalog events served when a property has none of its own
pub const FALLBACK_EVENT_COUNT: usize = 3;

/// Retrieves the event history of a property
#[derive(Debug, Clone, Copy)]
pub struct TimelineLookup<'a> {
    events: &'a [TimelineEvent],
}

impl<'a> TimelineLookup<'a> {
    /// Create a lookup over the event catalog, assumed chronological
    pub fn new(events: &'a [TimelineEvent]) -> Self {
        Self { events }
    }

    /// Events of `property_id` in catalog order, or the first
    /// `FALLBACK_EVENT_COUNT` catalog events when it has none
    pub fn lookup(&self, property_id: &str) -> Vec<TimelineEvent> {
        let matches: Vec<TimelineEvent> = self
            .events
            .iter()
            .filter(|event| event.property_id == property_id)
            .cloned()
            .collect();

        if !matches.is_empty() {
            return matches;
        }

        debug!("No timeline for '{}', serving generic timeline", property_id);
        self.events.iter().take(FALLBACK_EVENT_COUNT).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, property_id: &str) -> TimelineEvent {
        TimelineEvent {
            id: id.to_string(),
            property_id: property_id.to_string(),
            time: "09:00".to_string(),
            label: id.to_string(),
            detail: String::new(),
        }
    }

    fn events() -> Vec<TimelineEvent> {
        vec![
            event("e1", "prop-a"),
            event("e2", "prop-b"),
            event("e3", "prop-a"),
            event("e4", "prop-c"),
            event("e5", "prop-a"),
        ]
    }

    fn ids(events: &[TimelineEvent]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_returns_matching_events_in_order() {
        let catalog = events();
        let timeline = TimelineLookup::new(&catalog).lookup("prop-a");
        assert_eq!(ids(&timeline), vec!["e1", "e3", "e5"]);
    }

    #[test]
    fn test_unknown_property_gets_first_three_events() {
        let catalog = events();
        let timeline = TimelineLookup::new(&catalog).lookup("prop-unknown");
        assert_eq!(ids(&timeline), vec!["e1", "e2", "e3"]);
    }

    #[test]
    fn test_fallback_on_short_catalog() {
        let catalog = vec![event("only", "prop-a")];
        let timeline = TimelineLookup::new(&catalog).lookup("prop-z");
        assert_eq!(ids(&timeline), vec!["only"]);
    }

    #[test]
    fn test_empty_catalog_yields_empty_timeline() {
        let timeline = TimelineLookup::new(&[]).lookup("prop-a");
        assert!(timeline.is_empty());
    }
}
