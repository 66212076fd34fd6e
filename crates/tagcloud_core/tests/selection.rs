use std::collections::HashMap;
use std::sync::Once;

use pretty_assertions::assert_eq;
use tagcloud_core::{select_top, CoreError};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(cloud_logging::initialize_for_tests);
}

fn counts(entries: &[(&str, u32)]) -> HashMap<String, u32> {
    entries
        .iter()
        .map(|(word, count)| (word.to_string(), *count))
        .collect()
}

#[test]
fn takes_the_most_frequent_and_displays_alphabetically() {
    init_logging();
    let counts = counts(&[("a", 3), ("b", 2), ("c", 1)]);

    let selected = select_top(&counts, 2).unwrap();

    assert_eq!(selected, vec!["a", "b"]);
}

#[test]
fn display_order_is_independent_of_popularity_order() {
    init_logging();
    let counts = counts(&[("zebra", 5), ("ant", 1)]);

    // "zebra" ranks first by count but displays last.
    let selected = select_top(&counts, 2).unwrap();

    assert_eq!(selected, vec!["ant", "zebra"]);
}

#[test]
fn limit_beyond_vocabulary_returns_everything() {
    init_logging();
    let counts = counts(&[("pear", 2), ("apple", 7), ("plum", 4)]);

    let selected = select_top(&counts, 100).unwrap();

    assert_eq!(selected, vec!["apple", "pear", "plum"]);
}

#[test]
fn zero_limit_is_rejected() {
    init_logging();
    let counts = counts(&[("a", 1)]);

    assert_eq!(select_top(&counts, 0), Err(CoreError::LimitZero));
}

#[test]
fn mid_tie_truncation_keeps_alphabetically_earliest() {
    init_logging();
    // "kiwi" wins outright; the remaining slot cuts into a three-way tie at
    // count 2, which "apple" wins alphabetically.
    let counts = counts(&[("pear", 2), ("apple", 2), ("plum", 2), ("kiwi", 5)]);

    let selected = select_top(&counts, 2).unwrap();

    assert_eq!(selected, vec!["apple", "kiwi"]);
}

#[test]
fn selection_is_deterministic_across_calls() {
    init_logging();
    let counts = counts(&[
        ("alpha", 4),
        ("beta", 4),
        ("gamma", 4),
        ("delta", 4),
        ("epsilon", 4),
    ]);

    let first = select_top(&counts, 3).unwrap();
    for _ in 0..10 {
        assert_eq!(select_top(&counts, 3).unwrap(), first);
    }
    assert_eq!(first, vec!["alpha", "beta", "delta"]);
}

#[test]
fn empty_vocabulary_selects_nothing() {
    init_logging();
    let counts = HashMap::new();

    let selected = select_top(&counts, 5).unwrap();

    assert_eq!(selected, Vec::<String>::new());
}
