// End-to-end scenarios against the built-in demo catalog
//
// These tests drive the public `Concierge` surface the HTTP layer uses and pin
// the observable scoring contract on the sample data.

use leconcierge::{Catalog, Concierge, PropertyStatus};
use rstest::{fixture, rstest};

#[fixture]
fn concierge() -> Concierge {
    Concierge::new(Catalog::sample().expect("sample catalog should be valid"))
}

#[rstest]
fn test_palermo_prompt_selects_loft(concierge: Concierge) {
    let plan = concierge.generate_plan(Some("Find a sunlit loft in Palermo for next weekend"));

    assert_eq!(plan.recommendation.id, "rec-palermo-loft");
    assert!(plan.matched_keywords.len() >= 2);
    assert_eq!(
        plan.matched_keywords,
        vec!["palermo", "loft", "sunlit", "weekend"]
    );
    assert_eq!(plan.score, 31);
    assert!(plan.confidence > 0.4);
    assert_eq!(plan.confidence, 1.0);
}

#[rstest]
#[case("Need a 3-night stay near La Rural conference halls", "rec-conference-suite", 19, 0.76)]
#[case("Secure a family apartment with two bedrooms and privacy", "rec-family-duplex", 24, 0.96)]
#[case("quiet place, nothing specific", "rec-palermo-loft", 11, 0.44)]
fn test_prompt_selection(
    concierge: Concierge,
    #[case] intent: &str,
    #[case] expected_id: &str,
    #[case] expected_score: u32,
    #[case] expected_confidence: f64,
) {
    let plan = concierge.generate_plan(Some(intent));
    assert_eq!(plan.recommendation.id, expected_id);
    assert_eq!(plan.score, expected_score);
    assert_eq!(plan.confidence, expected_confidence);
}

#[rstest]
fn test_every_quick_prompt_selects_its_own_recommendation(concierge: Concierge) {
    let snapshot = concierge.snapshot();
    for rec in snapshot.recommendations() {
        let plan = concierge.generate_plan(Some(&rec.intent_example));
        assert_eq!(plan.recommendation.id, rec.id, "intent: {}", rec.intent_example);
    }
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   "))]
#[case(Some("?!..."))]
fn test_empty_intent_falls_back_to_priority(concierge: Concierge, #[case] intent: Option<&str>) {
    let plan = concierge.generate_plan(intent);
    assert_eq!(plan.recommendation.id, "rec-palermo-loft");
    assert!(plan.matched_keywords.is_empty());
    assert_eq!(plan.score, 3 + 5);
    assert_eq!(plan.confidence, 0.32);
}

#[rstest]
fn test_featured_property_pinned_first(concierge: Concierge) {
    let ordered = concierge.order_inventory(Some("prop-828"));
    let ids: Vec<&str> = ordered.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["prop-828", "prop-441", "prop-132"]);
}

#[rstest]
fn test_inventory_without_featured_orders_by_status(concierge: Concierge) {
    let ordered = concierge.order_inventory(None);
    let statuses: Vec<PropertyStatus> = ordered.iter().map(|p| p.status).collect();
    assert_eq!(
        statuses,
        vec![
            PropertyStatus::Available,
            PropertyStatus::Conflict,
            PropertyStatus::Held
        ]
    );
}

#[rstest]
fn test_timeline_for_known_property(concierge: Concierge) {
    let events = concierge.lookup_timeline("prop-441");
    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["tm-441-1", "tm-441-2"]);
}

#[rstest]
fn test_timeline_for_unknown_property_is_generic(concierge: Concierge) {
    let events = concierge.lookup_timeline("prop-does-not-exist");
    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["tm-132-1", "tm-132-2", "tm-132-3"]);
}

#[rstest]
fn test_plan_serializes_camel_case(concierge: Concierge) {
    let plan = concierge.generate_plan(Some("loft"));
    let value = serde_json::to_value(&plan).unwrap();
    assert!(value.get("matchedKeywords").is_some());
    assert!(value.get("normalizedIntent").is_some());
    assert_eq!(value["recommendation"]["propertyId"], "prop-132");
}
