use tagcloud_core::{
    map_sizes, select_top, tokenize, word_counts, CoreError, SeparatorSet, SizedWord,
    DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, DEFAULT_SEPARATORS,
};
use thiserror::Error;

use crate::render::{HtmlWriter, RenderError};

/// Stylesheet carrying the `f11`..`f48` size classes and the cloud layout.
pub const DEFAULT_STYLESHEET_URL: &str =
    "http://cse.osu.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css";

/// Which body the page gets: a sized cloud or a plain count table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageMode {
    #[default]
    Cloud,
    Report,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub title: String,
    pub limit: usize,
    pub separators: SeparatorSet,
    pub mode: PageMode,
    pub min_size: u32,
    pub max_size: u32,
    pub stylesheet: Option<String>,
}

impl PageOptions {
    pub fn new(title: impl Into<String>, limit: usize) -> Self {
        Self {
            title: title.into(),
            limit,
            separators: SeparatorSet::from(DEFAULT_SEPARATORS),
            mode: PageMode::Cloud,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            stylesheet: Some(DEFAULT_STYLESHEET_URL.to_string()),
        }
    }
}

/// Counters describing one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total_tokens: usize,
    pub distinct_words: usize,
    pub rendered_words: usize,
}

/// A fully rendered page plus the data behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    pub words: Vec<SizedWord>,
    pub summary: RunSummary,
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no words found in the input text")]
    EmptyVocabulary,
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// `Top {limit} words in {input}`, the historical report title.
pub fn default_title(limit: usize, input: &str) -> String {
    format!("Top {limit} words in {input}")
}

/// Runs the whole pipeline: tokenize, count, select, size, render.
///
/// Deterministic: identical text and options produce byte-identical HTML.
pub fn build_page(text: &str, options: &PageOptions) -> Result<RenderedPage, PageError> {
    let tokens = tokenize(text, &options.separators);
    if tokens.is_empty() {
        return Err(PageError::EmptyVocabulary);
    }

    let counts = word_counts(&tokens);
    let selected = select_top(&counts, options.limit)?;
    let words = map_sizes(&selected, &counts, options.min_size, options.max_size)?;

    let summary = RunSummary {
        total_tokens: tokens.len(),
        distinct_words: counts.len(),
        rendered_words: words.len(),
    };

    let html = match options.mode {
        PageMode::Cloud => render_cloud(&words, options)?,
        PageMode::Report => render_report(&words, options)?,
    };

    Ok(RenderedPage {
        html,
        words,
        summary,
    })
}

/// Renders the sized cloud body: one hoverable span per word.
pub fn render_cloud(words: &[SizedWord], options: &PageOptions) -> Result<String, RenderError> {
    render_frame(options, |writer| {
        writer.open_cloud()?;
        for entry in words {
            writer.write_word(&entry.word, entry.size, entry.count)?;
        }
        writer.close_cloud()
    })
}

/// Renders the plain report body: a word/count table.
pub fn render_report(words: &[SizedWord], options: &PageOptions) -> Result<String, RenderError> {
    render_frame(options, |writer| {
        writer.open_table()?;
        writer.write_header_row(&["Word", "Counts"])?;
        for entry in words {
            let count = entry.count.to_string();
            writer.write_table_row(&[entry.word.as_str(), count.as_str()])?;
        }
        writer.close_table()
    })
}

/// Shared page frame: head, on-screen heading, rule, then the mode body.
fn render_frame<F>(options: &PageOptions, body: F) -> Result<String, RenderError>
where
    F: FnOnce(&mut HtmlWriter<Vec<u8>>) -> Result<(), RenderError>,
{
    let mut writer = HtmlWriter::new(Vec::new());
    writer.open(&options.title, options.stylesheet.as_deref())?;
    writer.write_heading(&options.title)?;
    writer.write_rule()?;
    body(&mut writer)?;
    writer.close()?;

    let bytes = writer.into_sink();
    Ok(String::from_utf8(bytes).expect("renderer emits UTF-8"))
}
