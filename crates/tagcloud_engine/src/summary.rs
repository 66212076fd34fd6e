use serde_json::json;

use crate::page::RenderedPage;

/// Machine-readable counterpart of a rendered page: run counters plus the
/// `(word, count, size)` triples in display order.
pub fn summary_json(page: &RenderedPage) -> String {
    let value = json!({
        "total_tokens": page.summary.total_tokens,
        "distinct_words": page.summary.distinct_words,
        "rendered_words": page.summary.rendered_words,
        "words": page.words.iter().map(|entry| {
            json!({
                "word": entry.word,
                "count": entry.count,
                "size": entry.size,
            })
        }).collect::<Vec<_>>(),
    });
    value.to_string()
}
