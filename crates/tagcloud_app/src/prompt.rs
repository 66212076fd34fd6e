//! Console prompt helpers, written against `BufRead`/`Write` so the flow is
//! testable without a terminal.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Prints `message` and reads one trimmed line of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String> {
    writeln!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("reading console input")?;
    if read == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}

/// Prompts for the word limit and enforces the `>= 1` contract before the
/// core ever sees the value.
pub fn prompt_limit<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<usize> {
    let raw = prompt_line(input, output, message)?;
    let limit: usize = raw
        .parse()
        .with_context(|| format!("{raw:?} is not a whole number"))?;
    if limit < 1 {
        bail!("number of words must be at least 1");
    }
    Ok(limit)
}
