//! Block-level state machine.
//!
//! The block parser is line-oriented and handles:
//! - Underlined headings (title, h2, h3)
//! - Paragraphs, closed by blank lines
//! - Single-level bulleted lists (`- item`, `-?item`)
//! - One-line code (`$ command`)

mod event;
mod parser;

pub use event::{BlockEvent, ContentLine, LineKind};
pub use parser::{BlockParser, Container, LineOutcome};
