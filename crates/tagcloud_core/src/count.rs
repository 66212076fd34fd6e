use std::collections::HashMap;

/// Reduces a token sequence to a word -> count map in a single pass.
///
/// The sum of all counts equals `tokens.len()`, and the keys are exactly the
/// distinct tokens seen.
pub fn word_counts(tokens: &[String]) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}
