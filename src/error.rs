//! Error types for streaming conversion.
//!
//! The markup dialect itself has no invalid input, so every error here
//! comes from the input source or the output sink.

use std::io;

use thiserror::Error;

/// Errors raised by [`crate::convert`].
#[derive(Debug, Error)]
pub enum Error {
    /// Reading an input line failed (including non-UTF-8 input).
    #[error("failed to read input line {line}: {source}")]
    Read {
        /// 1-based number of the line that could not be read.
        line: usize,
        source: io::Error,
    },

    /// Writing converted output failed.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
