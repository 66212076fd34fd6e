//! Interactive console front-end for the tag cloud generator.
mod prompt;
mod settings;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use cloud_logging::{cloud_info, LogDestination};
use tagcloud_core::SeparatorSet;
use tagcloud_engine::{
    build_page, default_title, load_text, summary_json, write_atomic, PageOptions, RenderedPage,
};

use crate::settings::{load_settings, Settings};

fn main() {
    cloud_logging::initialize(LogDestination::Both);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    if let Err(err) = run(&mut input, &mut output) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

/// The interactive flow: prompt, build the page in memory, then ask where to
/// put it. Nothing is written until the pipeline has fully succeeded.
fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let settings = load_settings(Path::new("."));

    let source_name = prompt::prompt_line(input, output, "Enter name of input file:")?;
    let limit = prompt::prompt_limit(input, output, "How many words in the output:")?;

    let source = load_text(Path::new(&source_name))?;
    cloud_info!("Read {} ({})", source_name, source.encoding_label);

    let options = page_options(&settings, limit, &source_name);
    let page = build_page(&source.text, &options)
        .with_context(|| format!("building the page for {source_name}"))?;
    cloud_info!(
        "{} tokens, {} distinct words, {} rendered",
        page.summary.total_tokens,
        page.summary.distinct_words,
        page.summary.rendered_words
    );

    let output_name = prompt::prompt_line(input, output, "Enter name of output file:")?;
    persist_page(&page, &output_name, &settings)?;

    writeln!(output, "Finished writing to {output_name}")?;
    Ok(())
}

fn persist_page(page: &RenderedPage, output_name: &str, settings: &Settings) -> Result<()> {
    write_atomic(Path::new(output_name), &page.html)
        .with_context(|| format!("writing {output_name}"))?;
    if settings.write_summary {
        let summary_name = format!("{output_name}.summary.json");
        write_atomic(Path::new(&summary_name), &summary_json(page))
            .with_context(|| format!("writing {summary_name}"))?;
        cloud_info!("Wrote run summary to {}", summary_name);
    }
    Ok(())
}

fn page_options(settings: &Settings, limit: usize, source_name: &str) -> PageOptions {
    PageOptions {
        title: default_title(limit, source_name),
        limit,
        separators: SeparatorSet::from(settings.separators.as_str()),
        mode: settings.mode.into(),
        min_size: settings.min_size,
        max_size: settings.max_size,
        stylesheet: settings.stylesheet.clone(),
    }
}
