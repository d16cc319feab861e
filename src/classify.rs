//! Line classification using one line of lookahead.
//!
//! A line is a heading when the line after it underlines it exactly:
//! the same number of `=` (title level) or `-` (section level) characters
//! as the trimmed heading text. Short lines never qualify, so a lone
//! `--` or `==` cannot turn its predecessor into a heading by accident.

/// Minimum trimmed length (exclusive) for a heading candidate.
const MIN_HEADING_LEN: usize = 2;

/// Underline style of a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Underline {
    /// `=====`: document title, or a secondary heading after the title.
    Equals,
    /// `-----`: tertiary heading.
    Dashes,
}

impl Underline {
    /// The character the underline is made of.
    #[inline]
    pub fn marker(self) -> char {
        match self {
            Self::Equals => '=',
            Self::Dashes => '-',
        }
    }
}

/// Role of a line, decided from the trimmed current and next lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Heading underlined by the next line.
    Heading(Underline),
    /// Empty after trimming.
    Blank,
    /// Anything else: paragraph or list content.
    Content,
}

/// Classify a trimmed line given the trimmed next line (`None` at end of input).
pub fn classify(current: &str, next: Option<&str>) -> LineClass {
    if let Some(underline) = next.and_then(|next| heading_underline(current, next)) {
        return LineClass::Heading(underline);
    }
    if current.is_empty() {
        LineClass::Blank
    } else {
        LineClass::Content
    }
}

fn heading_underline(current: &str, next: &str) -> Option<Underline> {
    let len = current.chars().count();
    if len <= MIN_HEADING_LEN {
        return None;
    }
    [Underline::Equals, Underline::Dashes]
        .into_iter()
        .find(|underline| is_underline(next, underline.marker(), len))
}

/// True if `line` is exactly `len` repetitions of `marker`.
#[inline]
fn is_underline(line: &str, marker: char, len: usize) -> bool {
    // Markers are ASCII, so byte length equals char count on a match.
    line.len() == len * marker.len_utf8() && line.chars().all(|c| c == marker)
}

/// Title-case each whitespace-separated word, joining with single spaces.
///
/// The first character of every word is upper-cased and the rest
/// lower-cased, so applying it twice gives the same result as once.
/// A first character whose upper case expands to several characters
/// (`ß` → `SS`) keeps only the leading one upper-cased (`Ss`).
///
/// # Example
/// ```
/// use textmarkup::classify::capwords;
///
/// assert_eq!(capwords("  SOME   heading text "), "Some Heading Text");
/// ```
pub fn capwords(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            let mut upper = first.to_uppercase();
            out.extend(upper.next());
            for c in upper.chain(chars) {
                out.extend(c.to_lowercase());
            }
        }
    }
    out
}
