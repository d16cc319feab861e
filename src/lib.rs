//! textmarkup: streaming converter from underlined plain-text notes to markup
//!
//! The input dialect is plain text with a handful of conventions:
//! - a line underlined with `=` of the same length is the document title
//!   (later ones become `<h2>`), a `-` underline makes an `<h3>`;
//! - blank lines separate paragraphs;
//! - `- item` and `-?item` lines form a single-level bulleted list;
//! - `$ command` is one line of code;
//! - `<word>` is emphasized.
//!
//! # Design Principles
//! - Single pass, one line of lookahead
//! - No AST: block events rendered straight to output lines
//! - Any input is accepted; only I/O can fail

pub mod block;
pub mod classify;
pub mod convert;
pub mod error;
pub mod inline;
pub mod render;
pub mod window;

use std::fmt;
use std::io::{BufRead, Write};

// Re-export primary types
pub use block::{BlockEvent, BlockParser};
pub use convert::Converter;
pub use error::{Error, Result};
pub use render::MarkupWriter;

/// Output target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Full html document: `<html>`, `<head>`/`<body>` once a title is seen.
    Html,
    /// `<qt title='…'>` wrapper, opened at the title and never closed.
    Qml,
    /// Body-level tags only.
    #[default]
    Plain,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Html => "html",
            Self::Qml => "qml",
            Self::Plain => "plain",
        })
    }
}

/// Conversion options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Document wrapper to emit.
    pub mode: Mode,
    /// Emit every output line as a quoted string literal ending in `\n`,
    /// for pasting generated markup into source code.
    pub stringify: bool,
}

/// Convert text to markup with default options.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let out = textmarkup::to_markup("Some <very> nice text");
/// assert_eq!(out, "<p>\n  Some <i>very</i> nice text \n</p>\n");
/// ```
pub fn to_markup(input: &str) -> String {
    to_markup_with_options(input, &Options::default())
}

/// Convert text to markup with options.
pub fn to_markup_with_options(input: &str, options: &Options) -> String {
    let mut converter = Converter::with_capacity_for(options, input.len());
    for line in input.lines() {
        converter.push_line(line);
    }
    converter.into_string()
}

/// Convert a stream of lines, writing output as it becomes available.
///
/// Output is flushed to `writer` after every input line, so memory use is
/// bounded by the longest line rather than the document.
pub fn convert<R: BufRead, W: Write>(reader: R, mut writer: W, options: &Options) -> Result<()> {
    let mut converter = Converter::new(options);
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::Read {
            line: index + 1,
            source,
        })?;
        converter.push_line(&line);
        converter.flush_to(&mut writer).map_err(Error::Write)?;
    }
    converter.finish();
    converter.flush_to(&mut writer).map_err(Error::Write)?;
    writer.flush().map_err(Error::Write)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(input: &str) -> String {
        to_markup_with_options(
            input,
            &Options {
                mode: Mode::Html,
                stringify: false,
            },
        )
    }

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(to_markup("Hello, world!"), "<p>\n  Hello, world! \n</p>\n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_markup(""), "");
        assert_eq!(html(""), "<html>\n</html>\n");
    }

    #[test]
    fn test_only_whitespace() {
        assert_eq!(to_markup("   \n\t\n"), "\n\n");
    }

    #[test]
    fn test_complete_document() {
        let input = "TITLE LINE\n==========\n\nSome body text.\n\n- one\n- two\n";
        let expected = "<html>\n\
                        <head>\n\
                        <!--- AUTOMATICALLY GENERATED FILE : DO NOT EDIT --->\n\
                        <title>Title Line</title>\n\
                        </head>\n\
                        <body>\n\
                        <h1>Title Line</h1>\n\
                        \n\
                        <p>\n  Some body text. \n</p>\n\
                        <p>\n  <ul><li>one \n  </li><li>two \n</li>\n</ul>\n</p>\n\
                        </body>\n\
                        </html>\n";
        assert_eq!(html(input), expected);
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(to_markup("NOTES\r\n=====\r\n"), "<h1>Notes</h1>\n");
    }

    #[test]
    fn test_convert_matches_to_markup() {
        let input = "HEAD\n====\n\n- <a> b\n-?c d\n$ run it\n\nend";
        let options = Options {
            mode: Mode::Qml,
            stringify: true,
        };
        let mut out = Vec::new();
        convert(input.as_bytes(), &mut out, &options).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), to_markup_with_options(input, &options));
    }

    #[test]
    fn test_convert_reports_bad_utf8_line() {
        let input: &[u8] = b"fine\n\xff\xfe\n";
        let err = convert(input, Vec::new(), &Options::default()).unwrap_err();
        assert!(matches!(err, Error::Read { line: 2, .. }), "{err}");
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Html.to_string(), "html");
        assert_eq!(Mode::Qml.to_string(), "qml");
        assert_eq!(Mode::Plain.to_string(), "plain");
    }
}
