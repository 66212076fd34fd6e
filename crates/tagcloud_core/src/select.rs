use std::cmp::Ordering;
use std::collections::HashMap;

use crate::CoreError;

/// A word paired with its occurrence count, for ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub word: String,
    pub count: u32,
}

/// Popularity order: count descending, ties broken by `alphabetical_order`.
///
/// A plain stateless function rather than a comparator object, usable with
/// any sort. The order is total, so the ranking is deterministic no matter
/// how the underlying map iterates. When a limit cuts through a group of
/// equal counts, the alphabetically earliest words of the group survive.
pub fn popularity_order(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| alphabetical_order(&a.word, &b.word))
}

/// Case-insensitive alphabetical order, with a raw comparison as the final
/// tie-break so words differing only in case still order deterministically.
pub fn alphabetical_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Picks the `limit` most frequent words and returns them in display order.
///
/// Ranking and presentation are two independent orderings: the entries are
/// first sorted by `popularity_order` to decide which words survive, then
/// the survivors are re-sorted alphabetically (case-insensitive) for the
/// page. Returns `min(limit, |counts|)` distinct words.
pub fn select_top(counts: &HashMap<String, u32>, limit: usize) -> Result<Vec<String>, CoreError> {
    if limit == 0 {
        return Err(CoreError::LimitZero);
    }

    let mut ranked: Vec<RankedEntry> = counts
        .iter()
        .map(|(word, &count)| RankedEntry {
            word: word.clone(),
            count,
        })
        .collect();
    ranked.sort_by(popularity_order);
    ranked.truncate(limit);

    let mut words: Vec<String> = ranked.into_iter().map(|entry| entry.word).collect();
    words.sort_by(|a, b| alphabetical_order(a, b));
    Ok(words)
}
