// Intent normalization

/// Canonicalize a raw intent for keyword comparison.
///
/// Lower-cases the input, turns every character that is not a letter, digit or
/// whitespace into a space, collapses whitespace runs and trims both ends.
/// The empty result stands for "no stated intent".
pub fn normalize_intent(intent: &str) -> String {
    let replaced: String = intent
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
