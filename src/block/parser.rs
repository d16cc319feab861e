//! Block parser implementation.

use log::{debug, trace};
use smallvec::SmallVec;

use crate::classify::{capwords, classify, LineClass, Underline};
use crate::inline;
use crate::window::Window;

use super::event::{BlockEvent, ContentLine, LineKind};

/// An open block container.
///
/// Containers nest strictly as `Paragraph > List > ListItem`, so the open
/// stack never holds more than three entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// `<p>`
    Paragraph,
    /// `<ul>`
    List,
    /// `<li>`
    ListItem,
}

/// What the driver must do with the lookahead line after `parse_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Move on; the next line becomes current.
    Advance,
    /// The next line was an underline and is consumed.
    ConsumeNext,
}

/// Block parser state for one document.
#[derive(Debug, Default)]
pub struct BlockParser {
    /// Open containers, outermost first.
    open: SmallVec<[Container; 3]>,
    /// Whether the first `=` heading has been emitted as the title.
    title_emitted: bool,
}

impl BlockParser {
    /// Create a new block parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit the events that precede any input.
    pub fn start(&mut self, events: &mut Vec<BlockEvent>) {
        events.push(BlockEvent::DocumentStart);
    }

    /// Parse the current line of `window`.
    pub fn parse_line(&mut self, window: &Window<'_>, events: &mut Vec<BlockEvent>) -> LineOutcome {
        let current = window.current_trimmed();
        let class = classify(current, window.next_trimmed());
        trace!("{class:?}: {current:?}");

        match class {
            LineClass::Heading(underline) => {
                self.heading(current, underline, events);
                LineOutcome::ConsumeNext
            }
            LineClass::Blank => {
                if self.in_paragraph() {
                    self.close_containers(events);
                } else {
                    events.push(BlockEvent::BlankLine);
                }
                LineOutcome::Advance
            }
            LineClass::Content => {
                if !self.in_paragraph() {
                    debug!("paragraph opened");
                    self.open.push(Container::Paragraph);
                    events.push(BlockEvent::ParagraphStart);
                }
                let line = self.content_line(current);
                events.push(BlockEvent::Content(line));
                LineOutcome::Advance
            }
        }
    }

    /// Close everything still open and emit the end of the document.
    pub fn finish(&mut self, events: &mut Vec<BlockEvent>) {
        self.close_containers(events);
        events.push(BlockEvent::DocumentEnd {
            titled: self.title_emitted,
        });
    }

    /// Whether a paragraph is open.
    #[inline]
    pub fn in_paragraph(&self) -> bool {
        self.open.contains(&Container::Paragraph)
    }

    /// Whether a list is open.
    #[inline]
    pub fn in_list(&self) -> bool {
        self.open.contains(&Container::List)
    }

    /// Whether a list item is open.
    #[inline]
    pub fn in_list_item(&self) -> bool {
        self.open.last() == Some(&Container::ListItem)
    }

    fn heading(&mut self, text: &str, underline: Underline, events: &mut Vec<BlockEvent>) {
        let text = capwords(text);
        let event = match underline {
            Underline::Equals if !self.title_emitted => {
                debug!("title: {text:?}");
                self.title_emitted = true;
                BlockEvent::Title(text)
            }
            Underline::Equals => BlockEvent::Heading { level: 2, text },
            Underline::Dashes => BlockEvent::Heading { level: 3, text },
        };
        events.push(event);
    }

    /// Build the output for one non-empty trimmed content line.
    fn content_line(&mut self, text: &str) -> ContentLine {
        let mut line = ContentLine::default();

        let body = if let Some(rest) = text.strip_prefix('-') {
            let body = match rest.strip_prefix(' ') {
                Some(body) => body,
                // A lone `-` is an empty item.
                None if rest.is_empty() => rest,
                None => {
                    line.special_break = true;
                    text
                }
            };
            self.open_list_item(&mut line);
            body
        } else if text.starts_with('$') {
            line.kind = LineKind::Code;
            skip_chars(text, 2)
        } else {
            text
        };

        line.text.reserve(body.len() + body.len() / 4);
        inline::transform_line_into(&mut line.text, body);
        line
    }

    fn open_list_item(&mut self, line: &mut ContentLine) {
        if self.in_list_item() {
            self.open.pop();
            line.close_item = true;
        }
        if !self.in_list() {
            self.open.push(Container::List);
            line.open_list = true;
        }
        self.open.push(Container::ListItem);
        line.open_item = true;
    }

    /// Close the item, list and paragraph, innermost first.
    fn close_containers(&mut self, events: &mut Vec<BlockEvent>) {
        while let Some(container) = self.open.pop() {
            events.push(match container {
                Container::ListItem => BlockEvent::ListItemEnd,
                Container::List => BlockEvent::ListEnd,
                Container::Paragraph => {
                    debug!("paragraph closed");
                    BlockEvent::ParagraphEnd
                }
            });
        }
    }
}

/// Drop the first `n` characters of `text`.
#[inline]
fn skip_chars(text: &str, n: usize) -> &str {
    text.char_indices().nth(n).map_or("", |(i, _)| &text[i..])
}
