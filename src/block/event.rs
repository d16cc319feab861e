//! Block-level event types.

/// Flavor of a paragraph content line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineKind {
    /// Ordinary text (possibly a list item).
    #[default]
    Text,
    /// One line of code (`$ command`), wrapped in `<code>` plus a break.
    Code,
}

/// One output line of paragraph content.
///
/// Carries the container transitions that happen at the start of the line
/// so the writer can emit them on the same output line as the text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentLine {
    /// Close the previous list item before this one.
    pub close_item: bool,
    /// Open a list.
    pub open_list: bool,
    /// Open a list item.
    pub open_item: bool,
    /// Text or code.
    pub kind: LineKind,
    /// Append a line break after the text (`-?` list lines).
    pub special_break: bool,
    /// Inline-processed text, one trailing space per word.
    pub text: String,
}

/// Events emitted by the block parser, one output line each
/// (except `Title`, whose rendering depends on the output mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEvent {
    /// Start of the document, before any input line.
    DocumentStart,
    /// First `=`-underlined heading (capworded).
    Title(String),
    /// Any later heading (capworded).
    Heading {
        /// 2 for `=` underlines after the title, 3 for `-` underlines.
        level: u8,
        /// Heading text.
        text: String,
    },
    /// Blank input line outside a paragraph.
    BlankLine,
    /// Start of a paragraph.
    ParagraphStart,
    /// A content line inside a paragraph.
    Content(ContentLine),
    /// End of the open list item.
    ListItemEnd,
    /// End of the open list.
    ListEnd,
    /// End of a paragraph.
    ParagraphEnd,
    /// End of input.
    DocumentEnd {
        /// Whether a title (and with it any document header) was emitted.
        titled: bool,
    },
}
