// Built-in demo catalog

use crate::model::{PropertyDigest, PropertyStatus, QuickPrompt, Recommendation, TimelineEvent};
use chrono::{Duration, Utc};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Canned intents offered on the landing page
pub fn quick_prompts() -> Vec<QuickPrompt> {
    vec![
        QuickPrompt {
            id: "palermo-weekend".to_string(),
            label: "Find a sunlit loft in Palermo for next weekend".to_string(),
            hint: "2 guests · 220 USDC/night budget · balcony for morning coffee".to_string(),
            keywords: strings(&["palermo", "loft", "weekend", "balcony", "sunlit"]),
        },
        QuickPrompt {
            id: "conference-suite".to_string(),
            label: "Need a 3-night stay near La Rural conference halls".to_string(),
            hint: "Executives · desk + fiber · Sept 12-15".to_string(),
            keywords: strings(&["conference", "la rural", "desk", "fiber", "executive"]),
        },
        QuickPrompt {
            id: "family-retreat".to_string(),
            label: "Secure a family apartment with two bedrooms and privacy".to_string(),
            hint: "Parents with kids · 2 bedrooms · garden or outdoor space".to_string(),
            keywords: strings(&["family", "two bedroom", "garden", "kids", "privacy"]),
        },
    ]
}

/// Candidate recommendations, one per quick prompt
pub fn recommendations() -> Vec<Recommendation> {
    let prompts = quick_prompts();
    let example = |index: usize| prompts[index].label.clone();

    vec![
        Recommendation {
            id: "rec-palermo-loft".to_string(),
            intent_example: example(0),
            title: "Palermo Rooftop Loft · sunrise view".to_string(),
            ens_name: "loft1.host.eth".to_string(),
            nightly_rate: "210 USDC".to_string(),
            summary: "Polygon escrow opened at 09:42, funds held under 3-minute settlement policy. \
                      Filecoin CID cid://Qm123 proves the calendar snapshot Flare attested."
                .to_string(),
            highlights: strings(&[
                "Dates free across Airbnb, Vrbo, Google Calendar",
                "Host trust score: 92/100 (privacy-preserving hash)",
                "Balcony + espresso station mapped from metadata upload",
            ]),
            property_id: "prop-132".to_string(),
            keywords: strings(&[
                "palermo", "loft", "sunlit", "balcony", "espresso", "weekend", "sunrise",
            ]),
            priority: 3,
        },
        Recommendation {
            id: "rec-conference-suite".to_string(),
            intent_example: example(1),
            title: "Recoleta Executive Suite · 12 min to La Rural".to_string(),
            ens_name: "suite.recoleta.eth".to_string(),
            nightly_rate: "265 USDC".to_string(),
            summary: "USDC permit signed; ledger entry 0x74… keyed to BookingLedger #118 \
                      with Hedera mirror hash for auditing."
                .to_string(),
            highlights: strings(&[
                "Desk + fiber internet validated via latest host upload",
                "Nylas sync shows zero conflicts on Google Calendar",
                "Agent reserved courtesy hold for 45 minutes",
            ]),
            property_id: "prop-441".to_string(),
            keywords: strings(&[
                "conference", "la rural", "executive", "desk", "wifi", "fiber", "business",
            ]),
            priority: 2,
        },
        Recommendation {
            id: "rec-family-duplex".to_string(),
            intent_example: example(2),
            title: "Colegiales Family Duplex · garden patio".to_string(),
            ens_name: "duplex.casa.eth".to_string(),
            nightly_rate: "238 USDC".to_string(),
            summary: "Filecoin snapshot cid://Qm456 ties to ENS text record syncbnb:calendarProof. \
                      PaymentEscrow hold ready for host confirmation."
                .to_string(),
            highlights: strings(&[
                "Two bedrooms + crib confirmed via ENS text records",
                "No conflicts detected; duplicate listing reconciled by agent",
                "Cleanup buffer auto-inserted between stays",
            ]),
            property_id: "prop-828".to_string(),
            keywords: strings(&[
                "family", "two bedroom", "garden", "kids", "privacy", "duplex", "patio",
            ]),
            priority: 2,
        },
    ]
}

fn event(id: &str, property_id: &str, time: &str, label: &str, detail: &str) -> TimelineEvent {
    TimelineEvent {
        id: id.to_string(),
        property_id: property_id.to_string(),
        time: time.to_string(),
        label: label.to_string(),
        detail: detail.to_string(),
    }
}

/// Agent activity, chronological per property
pub fn timeline_events() -> Vec<TimelineEvent> {
    vec![
        event(
            "tm-132-1",
            "prop-132",
            "09:35",
            "Polygon Tx Finalised",
            "Guest permit processed, 210 USDC locked in PaymentEscrow #132.",
        ),
        event(
            "tm-132-2",
            "prop-132",
            "09:37",
            "Flare FDC Attestation",
            "Airbnb + Vrbo ICS synced, attestation digest 0x9e… stored on BookingLedger.",
        ),
        event(
            "tm-132-3",
            "prop-132",
            "09:41",
            "LLM Duplicate Check",
            "Agent confirmed `loft1.host.eth` matches Vrbo listing 84721 with 0.92 confidence.",
        ),
        event(
            "tm-132-4",
            "prop-132",
            "09:44",
            "ENS Story Badge Issued",
            "De-concierge minted subname `palermo.weekend.host.eth` for shareable proof.",
        ),
        event(
            "tm-441-1",
            "prop-441",
            "08:15",
            "Payment Hold",
            "Circle Arc wallet opened 24-hour hold for executive stay.",
        ),
        event(
            "tm-441-2",
            "prop-441",
            "08:18",
            "Availability Cross-check",
            "Nylas Google Calendar sync double confirmed open desk hours.",
        ),
        event(
            "tm-828-1",
            "prop-828",
            "07:52",
            "Duplicate Resolved",
            "Vrbo + Airbnb listings merged; Filecoin CID updated for audit trace.",
        ),
    ]
}

/// Listed properties, last synced a few minutes before the call
pub fn property_digests() -> Vec<PropertyDigest> {
    let now = Utc::now();

    vec![
        PropertyDigest {
            id: "prop-132".to_string(),
            name: "Palermo Rooftop Loft".to_string(),
            ens_name: "loft1.host.eth".to_string(),
            status: PropertyStatus::Held,
            next_availability: "Feb 21 · auto-release in 27m".to_string(),
            price: "210 USDC".to_string(),
            cid: "cid://Qm123".to_string(),
            tags: strings(&["balcony", "espresso", "sunrise"]),
            related_recommendation_ids: strings(&["rec-palermo-loft"]),
            last_sync: now - Duration::minutes(6),
        },
        PropertyDigest {
            id: "prop-441".to_string(),
            name: "Recoleta Executive Suite".to_string(),
            ens_name: "suite.recoleta.eth".to_string(),
            status: PropertyStatus::Available,
            next_availability: "Sept 12-15".to_string(),
            price: "265 USDC".to_string(),
            cid: "cid://Qm22D".to_string(),
            tags: strings(&["desk", "fiber", "executive"]),
            related_recommendation_ids: strings(&["rec-conference-suite"]),
            last_sync: now - Duration::minutes(14),
        },
        PropertyDigest {
            id: "prop-828".to_string(),
            name: "Colegiales Family Duplex".to_string(),
            ens_name: "duplex.casa.eth".to_string(),
            status: PropertyStatus::Conflict,
            next_availability: "Flagged overlap on Sept 3".to_string(),
            price: "238 USDC".to_string(),
            cid: "cid://Qm456".to_string(),
            tags: strings(&["garden", "kids", "privacy"]),
            related_recommendation_ids: strings(&["rec-family-duplex"]),
            last_sync: now - Duration::minutes(32),
        },
    ]
}
