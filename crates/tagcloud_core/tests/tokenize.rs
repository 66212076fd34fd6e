use std::sync::Once;

use pretty_assertions::assert_eq;
use tagcloud_core::{tokenize, SeparatorSet, DEFAULT_SEPARATORS};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(cloud_logging::initialize_for_tests);
}

#[test]
fn splits_on_separators_and_lowercases() {
    init_logging();
    let separators = SeparatorSet::from(DEFAULT_SEPARATORS);

    let words = tokenize("Hello, World. Hello again!", &separators);

    assert_eq!(words, vec!["hello", "world", "hello", "again"]);
}

#[test]
fn runs_of_separators_yield_no_empty_words() {
    init_logging();
    let separators: SeparatorSet = [',', '.'].into_iter().collect();

    let words = tokenize("a,b..c", &separators);

    assert_eq!(words, vec!["a", "b", "c"]);
}

#[test]
fn trailing_word_without_separator_is_emitted() {
    init_logging();
    let separators = SeparatorSet::from(" ");

    let words = tokenize("one two", &separators);

    assert_eq!(words, vec!["one", "two"]);
}

#[test]
fn leading_and_trailing_separators_are_ignored() {
    init_logging();
    let separators = SeparatorSet::from(DEFAULT_SEPARATORS);

    let words = tokenize("  ...spaced out...  ", &separators);

    assert_eq!(words, vec!["spaced", "out"]);
}

#[test]
fn empty_text_yields_no_words() {
    init_logging();
    let separators = SeparatorSet::from(DEFAULT_SEPARATORS);

    assert_eq!(tokenize("", &separators), Vec::<String>::new());
    assert_eq!(tokenize(",,,", &separators), Vec::<String>::new());
}

#[test]
fn separator_set_ignores_order_and_duplicates() {
    init_logging();
    let noisy = SeparatorSet::from(",,..,,");
    let clean: SeparatorSet = ['.', ','].into_iter().collect();

    assert_eq!(noisy, clean);
    assert_eq!(tokenize("a,b.c", &noisy), tokenize("a,b.c", &clean));
}

#[test]
fn words_keep_source_order() {
    init_logging();
    let separators = SeparatorSet::from(" ");

    let words = tokenize("zebra apple zebra mango", &separators);

    assert_eq!(words, vec!["zebra", "apple", "zebra", "mango"]);
}
