//! Markup output writer.
//!
//! Turns block events into output lines for the selected [`Mode`], and
//! optionally wraps every line as an escaped string literal.

use std::io::{self, Write};

use crate::block::{BlockEvent, ContentLine, LineKind};
use crate::{Mode, Options};

/// Comment placed in the html `<head>`.
pub const GENERATED_COMMENT: &str = "<!--- AUTOMATICALLY GENERATED FILE : DO NOT EDIT --->";

/// Indentation of paragraph content lines.
const CONTENT_INDENT: &str = "  ";

/// Markup writer with a reusable output buffer.
///
/// # Example
/// ```
/// use textmarkup::{MarkupWriter, Options};
/// use textmarkup::block::BlockEvent;
///
/// let mut writer = MarkupWriter::new(&Options::default());
/// writer.write_event(&BlockEvent::ParagraphStart);
/// writer.write_event(&BlockEvent::ParagraphEnd);
/// assert_eq!(writer.as_str(), "<p>\n</p>\n");
/// ```
#[derive(Debug)]
pub struct MarkupWriter {
    out: String,
    /// Scratch buffer for composing one line.
    line: String,
    mode: Mode,
    stringify: bool,
}

impl MarkupWriter {
    /// Create a new writer with default capacity.
    pub fn new(options: &Options) -> Self {
        Self::with_capacity(options, 1024)
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Tags add roughly a quarter on top of typical prose.
    pub fn with_capacity_for(options: &Options, input_len: usize) -> Self {
        Self::with_capacity(options, input_len + input_len / 4)
    }

    /// Create with explicit capacity.
    pub fn with_capacity(options: &Options, capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            line: String::with_capacity(128),
            mode: options.mode,
            stringify: options.stringify,
        }
    }

    /// Output mode this writer renders for.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Render one block event.
    pub fn write_event(&mut self, event: &BlockEvent) {
        match event {
            BlockEvent::DocumentStart => match self.mode {
                Mode::Html => self.dispose("<html>"),
                Mode::Qml | Mode::Plain => {}
            },
            BlockEvent::Title(text) => {
                self.document_header(text);
                self.heading(1, text);
            }
            BlockEvent::Heading { level, text } => self.heading(*level, text),
            BlockEvent::BlankLine => self.dispose(""),
            BlockEvent::ParagraphStart => self.dispose("<p>"),
            BlockEvent::Content(line) => self.content(line),
            BlockEvent::ListItemEnd => self.dispose("</li>"),
            BlockEvent::ListEnd => self.dispose("</ul>"),
            BlockEvent::ParagraphEnd => self.dispose("</p>"),
            BlockEvent::DocumentEnd { titled } => match self.mode {
                Mode::Html => {
                    if *titled {
                        self.dispose("</body>");
                    }
                    self.dispose("</html>");
                }
                // The qml wrapper is left open.
                Mode::Qml | Mode::Plain => {}
            },
        }
    }

    fn document_header(&mut self, title: &str) {
        match self.mode {
            Mode::Html => {
                self.dispose("<head>");
                self.dispose(GENERATED_COMMENT);
                self.compose(|line| {
                    line.push_str("<title>");
                    line.push_str(title);
                    line.push_str("</title>");
                });
                self.dispose("</head>");
                self.dispose("<body>");
            }
            Mode::Qml => self.compose(|line| {
                line.push_str("<qt title='");
                line.push_str(title);
                line.push_str("'>");
            }),
            Mode::Plain => {}
        }
    }

    fn heading(&mut self, level: u8, text: &str) {
        debug_assert!((1..=6).contains(&level));
        let digit = char::from(b'0' + level);
        self.compose(|line| {
            line.push_str("<h");
            line.push(digit);
            line.push('>');
            line.push_str(text);
            line.push_str("</h");
            line.push(digit);
            line.push('>');
        });
    }

    fn content(&mut self, content: &ContentLine) {
        self.compose(|line| {
            line.push_str(CONTENT_INDENT);
            if content.close_item {
                line.push_str("</li>");
            }
            if content.open_list {
                line.push_str("<ul>");
            }
            if content.open_item {
                line.push_str("<li>");
            }
            match content.kind {
                LineKind::Text => line.push_str(&content.text),
                LineKind::Code => {
                    line.push_str("<code>");
                    line.push_str(&content.text);
                    line.push_str("</code><br>");
                }
            }
            if content.special_break {
                line.push_str("<br>");
            }
        });
    }

    /// Build a line in the scratch buffer, then dispose of it.
    #[inline]
    fn compose(&mut self, build: impl FnOnce(&mut String)) {
        let mut line = std::mem::take(&mut self.line);
        line.clear();
        build(&mut line);
        self.dispose(&line);
        self.line = line;
    }

    /// Write one finished output line.
    pub fn dispose(&mut self, line: &str) {
        if self.stringify {
            self.out.push('"');
            let mut parts = line.split('"');
            if let Some(first) = parts.next() {
                self.out.push_str(first);
            }
            for part in parts {
                self.out.push_str("\\\"");
                self.out.push_str(part);
            }
            self.out.push_str("\\n\"\n");
        } else {
            self.out.push_str(line);
            self.out.push('\n');
        }
    }

    /// Write buffered output to `sink` and clear the buffer.
    pub fn flush_to<W: Write>(&mut self, sink: &mut W) -> io::Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        sink.write_all(self.out.as_bytes())?;
        self.out.clear();
        Ok(())
    }

    /// Buffered output.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consume the writer and return the buffered output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }
}
