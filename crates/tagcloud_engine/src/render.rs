use std::io::{self, Write};

use thiserror::Error;

use crate::escape::{escape_attr, escape_text};

/// Where the writer is in the document lifecycle.
///
/// `open` drives `Unopened -> HeaderWritten -> BodyOpen`; `close` drives
/// `BodyOpen -> Closed`. Content operations are valid only in `BodyOpen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterState {
    Unopened,
    HeaderWritten,
    BodyOpen,
    Closed,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{op} called while the document is {state:?}")]
    InvalidState {
        op: &'static str,
        state: WriterState,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// HTML document writer over an owned sink.
///
/// Composition around any `io::Write` plus an explicit state, instead of
/// extending a stream type. The sink is dropped with the writer on every
/// exit path, so a failed render never leaks the handle. Calling an
/// operation outside its valid state is an error, never a silent no-op.
pub struct HtmlWriter<W: Write> {
    sink: W,
    state: WriterState,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            state: WriterState::Unopened,
        }
    }

    pub fn state(&self) -> WriterState {
        self.state
    }

    /// Writes the document preamble and opens the body.
    pub fn open(&mut self, title: &str, stylesheet: Option<&str>) -> Result<(), RenderError> {
        self.expect_state("open", WriterState::Unopened)?;
        writeln!(self.sink, "<!DOCTYPE html>")?;
        writeln!(self.sink, "<html>")?;
        writeln!(self.sink, "<head>")?;
        writeln!(self.sink, "<title>{}</title>", escape_text(title))?;
        if let Some(href) = stylesheet {
            writeln!(
                self.sink,
                "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
                escape_attr(href)
            )?;
        }
        writeln!(self.sink, "</head>")?;
        self.state = WriterState::HeaderWritten;

        writeln!(self.sink, "<body>")?;
        self.state = WriterState::BodyOpen;
        Ok(())
    }

    /// Wraps `text` (escaped) in a `<tag>...</tag>` pair on one line.
    pub fn write_nested(&mut self, text: &str, tag: &str) -> Result<(), RenderError> {
        self.expect_state("write_nested", WriterState::BodyOpen)?;
        writeln!(self.sink, "<{tag}>{}</{tag}>", escape_text(text))?;
        Ok(())
    }

    pub fn write_heading(&mut self, text: &str) -> Result<(), RenderError> {
        self.write_nested(text, "h2")
    }

    pub fn write_rule(&mut self) -> Result<(), RenderError> {
        self.expect_state("write_rule", WriterState::BodyOpen)?;
        writeln!(self.sink, "<hr/>")?;
        Ok(())
    }

    /// Opens the cloud container the stylesheet lays out.
    pub fn open_cloud(&mut self) -> Result<(), RenderError> {
        self.expect_state("open_cloud", WriterState::BodyOpen)?;
        writeln!(self.sink, "<div class=\"cdiv\">")?;
        writeln!(self.sink, "<p class=\"cbox\">")?;
        Ok(())
    }

    /// Emits one cloud word: size via the `f{size}` class, exact count in
    /// the hover title.
    pub fn write_word(&mut self, word: &str, size: u32, count: u32) -> Result<(), RenderError> {
        self.expect_state("write_word", WriterState::BodyOpen)?;
        writeln!(
            self.sink,
            "<span class=\"f{size}\" title=\"count: {count}\">{}</span>",
            escape_text(word)
        )?;
        Ok(())
    }

    pub fn close_cloud(&mut self) -> Result<(), RenderError> {
        self.expect_state("close_cloud", WriterState::BodyOpen)?;
        writeln!(self.sink, "</p>")?;
        writeln!(self.sink, "</div>")?;
        Ok(())
    }

    pub fn open_table(&mut self) -> Result<(), RenderError> {
        self.expect_state("open_table", WriterState::BodyOpen)?;
        writeln!(self.sink, "<table border=\"1\">")?;
        writeln!(self.sink, "<tbody>")?;
        Ok(())
    }

    /// Emits one header row with `<th>` cells.
    pub fn write_header_row(&mut self, cells: &[&str]) -> Result<(), RenderError> {
        self.expect_state("write_header_row", WriterState::BodyOpen)?;
        writeln!(self.sink, "<tr>")?;
        for cell in cells {
            writeln!(self.sink, "<th>{}</th>", escape_text(cell))?;
        }
        writeln!(self.sink, "</tr>")?;
        Ok(())
    }

    /// Emits one table row with `<td>` cells.
    pub fn write_table_row(&mut self, cells: &[&str]) -> Result<(), RenderError> {
        self.expect_state("write_table_row", WriterState::BodyOpen)?;
        writeln!(self.sink, "<tr>")?;
        for cell in cells {
            writeln!(self.sink, "<td>{}</td>", escape_text(cell))?;
        }
        writeln!(self.sink, "</tr>")?;
        Ok(())
    }

    pub fn close_table(&mut self) -> Result<(), RenderError> {
        self.expect_state("close_table", WriterState::BodyOpen)?;
        writeln!(self.sink, "</tbody>")?;
        writeln!(self.sink, "</table>")?;
        Ok(())
    }

    /// Closes body and document and flushes the sink.
    pub fn close(&mut self) -> Result<(), RenderError> {
        self.expect_state("close", WriterState::BodyOpen)?;
        writeln!(self.sink, "</body>")?;
        writeln!(self.sink, "</html>")?;
        self.sink.flush()?;
        self.state = WriterState::Closed;
        Ok(())
    }

    /// Releases the sink to the caller.
    pub fn into_sink(self) -> W {
        self.sink
    }

    fn expect_state(&self, op: &'static str, wanted: WriterState) -> Result<(), RenderError> {
        if self.state == wanted {
            Ok(())
        } else {
            Err(RenderError::InvalidState {
                op,
                state: self.state,
            })
        }
    }
}
