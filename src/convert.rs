//! Push-based streaming converter.

use std::io::{self, Write};

use crate::block::{BlockEvent, BlockParser, LineOutcome};
use crate::render::MarkupWriter;
use crate::window::Lookahead;
use crate::Options;

/// Converts one document, a line at a time.
///
/// Output for a line becomes available once the line after it has been
/// pushed (or [`finish`](Self::finish) has been called), since headings are
/// recognized by looking at their underline.
///
/// # Example
/// ```
/// use textmarkup::{Converter, Options};
///
/// let mut converter = Converter::new(&Options::default());
/// converter.push_line("NOTES");
/// converter.push_line("=====");
/// converter.push_line("body");
/// assert_eq!(converter.into_string(), "<h1>Notes</h1>\n<p>\n  body \n</p>\n");
/// ```
#[derive(Debug)]
pub struct Converter {
    parser: BlockParser,
    window: Lookahead,
    events: Vec<BlockEvent>,
    writer: MarkupWriter,
    finished: bool,
}

impl Converter {
    /// Create a converter and emit the document preamble.
    pub fn new(options: &Options) -> Self {
        Self::with_writer(MarkupWriter::new(options))
    }

    /// Create a converter sized for an input of `input_len` bytes.
    pub fn with_capacity_for(options: &Options, input_len: usize) -> Self {
        Self::with_writer(MarkupWriter::with_capacity_for(options, input_len))
    }

    fn with_writer(writer: MarkupWriter) -> Self {
        log::debug!("converting in {} mode", writer.mode());
        let mut converter = Self {
            parser: BlockParser::new(),
            window: Lookahead::new(),
            events: Vec::with_capacity(8),
            writer,
            finished: false,
        };
        converter.parser.start(&mut converter.events);
        converter.render_events();
        converter
    }

    /// Feed the next input line (without its line terminator).
    pub fn push_line(&mut self, line: &str) {
        debug_assert!(!self.finished, "push_line after finish");
        let outcome = match self.window.push(line) {
            Some(window) => self.parser.parse_line(&window, &mut self.events),
            None => LineOutcome::Advance,
        };
        if outcome == LineOutcome::ConsumeNext {
            self.window.consume_next();
        }
        self.render_events();
    }

    /// Signal end of input: process the last line and close the document.
    ///
    /// Calling it again has no effect.
    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        if let Some(window) = self.window.drain() {
            // No lookahead, so the last line can never consume anything.
            self.parser.parse_line(&window, &mut self.events);
        }
        self.parser.finish(&mut self.events);
        self.render_events();
    }

    /// Output produced so far and not yet flushed.
    #[inline]
    pub fn output(&self) -> &str {
        self.writer.as_str()
    }

    /// Write pending output to `sink`.
    pub fn flush_to<W: Write>(&mut self, sink: &mut W) -> io::Result<()> {
        self.writer.flush_to(sink)
    }

    /// Finish the document and return all unflushed output.
    pub fn into_string(mut self) -> String {
        self.finish();
        self.writer.into_string()
    }

    fn render_events(&mut self) {
        for event in self.events.drain(..) {
            self.writer.write_event(&event);
        }
    }
}
