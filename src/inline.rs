//! Word-level inline markup.
//!
//! Each whitespace-separated word is rewritten independently:
//! - words of three or more characters turn `<` and `>` into `<i>` and
//!   `</i>`, and escape `"` and `&`;
//! - shorter words only escape `<` and `>`, so a bare `<` or `<>` stays
//!   literal text instead of opening emphasis.
//!
//! Emphasis markers are not balanced: `<unclosed` yields a lone `<i>`.
//!
//! Fast path: scans for the first special byte with memchr, then copies
//! segments between replacements. All special bytes are ASCII, so every
//! split point is a char boundary.

use memchr::{memchr, memchr2, memchr3};

/// Words with fewer characters than this never produce emphasis.
pub const MIN_EMPHASIS_WORD_LEN: usize = 3;

/// Replacements for words shorter than [`MIN_EMPHASIS_WORD_LEN`].
const SHORT_WORD_TABLE: [Option<&str>; 256] = {
    let mut table = [None; 256];
    table[b'<' as usize] = Some("&lt;");
    table[b'>' as usize] = Some("&gt;");
    table
};

/// Replacements for all other words.
const WORD_TABLE: [Option<&str>; 256] = {
    let mut table = [None; 256];
    table[b'<' as usize] = Some("<i>");
    table[b'>' as usize] = Some("</i>");
    table[b'"' as usize] = Some("&quot;");
    table[b'&' as usize] = Some("&amp;");
    table
};

/// Rewrite every word of `text`, each followed by a single space.
///
/// # Example
/// ```
/// use textmarkup::inline::transform_line_into;
///
/// let mut out = String::new();
/// transform_line_into(&mut out, "a <very>  big deal");
/// assert_eq!(out, "a <i>very</i> big deal ");
/// ```
pub fn transform_line_into(out: &mut String, text: &str) {
    for word in text.split_whitespace() {
        transform_word_into(out, word);
        out.push(' ');
    }
}

/// Rewrite a line and return it as a new String.
///
/// Prefer `transform_line_into` to reuse buffers.
pub fn transform_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    transform_line_into(&mut out, text);
    out
}

/// Rewrite a single word (no surrounding whitespace).
#[inline]
pub fn transform_word_into(out: &mut String, word: &str) {
    let bytes = word.as_bytes();
    if word.chars().count() < MIN_EMPHASIS_WORD_LEN {
        rewrite_into(out, word, memchr2(b'<', b'>', bytes), &SHORT_WORD_TABLE);
    } else {
        let first = min_opt(memchr3(b'<', b'>', b'&', bytes), memchr(b'"', bytes));
        rewrite_into(out, word, first, &WORD_TABLE);
    }
}

#[inline]
fn rewrite_into(out: &mut String, word: &str, first: Option<usize>, table: &[Option<&str>; 256]) {
    let Some(first) = first else {
        out.push_str(word);
        return;
    };

    let bytes = word.as_bytes();
    out.push_str(&word[..first]);

    let mut start = first;
    for (pos, &b) in bytes.iter().enumerate().skip(first) {
        if let Some(replacement) = table[b as usize] {
            out.push_str(&word[start..pos]);
            out.push_str(replacement);
            start = pos + 1;
        }
    }
    out.push_str(&word[start..]);
}

#[inline]
fn min_opt(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}
