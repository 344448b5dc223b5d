//! Numbered lines of journal text.

/// One line of a journal, without its terminating newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number.
    pub number: usize,
    /// The line text. A `\r` before the newline is kept.
    pub text: &'a str,
}

impl<'a> Line<'a> {
    /// Create a new line.
    #[must_use]
    pub const fn new(number: usize, text: &'a str) -> Self {
        Self { number, text }
    }

    /// Check if the line ends in a space, tab, carriage return, vertical tab
    /// or form feed.
    #[must_use]
    pub fn has_trailing_whitespace(&self) -> bool {
        matches!(
            self.text.as_bytes().last(),
            Some(b' ' | b'\t' | b'\r' | 0x0b | 0x0c)
        )
    }
}

/// Split `source` into numbered lines.
///
/// Lines are split on `\n` only. A final newline does not start another line.
pub fn split_lines(source: &str) -> impl Iterator<Item = Line<'_>> {
    source
        .split_terminator('\n')
        .enumerate()
        .map(|(i, text)| Line::new(i + 1, text))
}
