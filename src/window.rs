//! Two-slot lookahead window over input lines.
//!
//! Lines are pushed one at a time. A line only becomes "current" once the
//! line after it has arrived, so every current line is seen together with
//! exactly one line of lookahead. A heading consumes its underline by moving
//! the window into the consumed state; the underline then never becomes
//! current.

/// A current line and the line physically after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<'a> {
    /// Raw current line (without its line terminator).
    pub current: &'a str,
    /// Raw next line, `None` at end of input.
    pub next: Option<&'a str>,
}

impl<'a> Window<'a> {
    /// Current line with surrounding whitespace removed.
    #[inline]
    pub fn current_trimmed(&self) -> &'a str {
        self.current.trim()
    }

    /// Next line with surrounding whitespace removed.
    #[inline]
    pub fn next_trimmed(&self) -> Option<&'a str> {
        self.next.map(str::trim)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing buffered yet.
    Empty,
    /// `slots[head]` holds a line waiting for its lookahead.
    Pending,
    /// `slots[head]` was consumed by the previous line and must be dropped.
    Consumed,
}

/// Ring buffer of two line slots.
///
/// Slot buffers are reused across pushes, so steady-state operation does
/// not allocate once the longest line has been seen.
#[derive(Debug)]
pub struct Lookahead {
    slots: [String; 2],
    head: usize,
    state: State,
}

impl Lookahead {
    /// Create an empty window.
    pub fn new() -> Self {
        Self {
            slots: [String::new(), String::new()],
            head: 0,
            state: State::Empty,
        }
    }

    /// Push the next physical line.
    ///
    /// Returns the window whose current line is the previously pushed line,
    /// or `None` if there was no such line or it had been consumed.
    pub fn push(&mut self, line: &str) -> Option<Window<'_>> {
        let tail = self.head ^ 1;
        self.slots[tail].clear();
        self.slots[tail].push_str(line);

        let ready = self.state == State::Pending;
        let current = self.head;
        self.head = tail;
        self.state = State::Pending;

        if ready {
            Some(Window {
                current: &self.slots[current],
                next: Some(&self.slots[tail]),
            })
        } else {
            None
        }
    }

    /// Mark the most recently pushed line as consumed.
    ///
    /// Called after a heading has used that line as its underline.
    pub fn consume_next(&mut self) {
        if self.state == State::Pending {
            self.state = State::Consumed;
        }
    }

    /// Signal end of input and return the last pending line, if any.
    pub fn drain(&mut self) -> Option<Window<'_>> {
        let pending = self.state == State::Pending;
        self.state = State::Empty;
        if pending {
            Some(Window {
                current: &self.slots[self.head],
                next: None,
            })
        } else {
            None
        }
    }
}

impl Default for Lookahead {
    fn default() -> Self {
        Self::new()
    }
}
