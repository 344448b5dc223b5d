//! Line-at-a-time reading with a finding sink.

use crate::error::{ErrorKind, LintError};
use ledgerlint_core::{split_lines, Line};

/// Walks the journal one line at a time and collects findings.
///
/// Every line is checked for trailing whitespace as it is read. Reading past
/// the last line yields an empty line numbered one past the end, and leaves
/// the cursor exhausted.
pub struct LineCursor<'a> {
    lines: Box<dyn Iterator<Item = Line<'a>> + 'a>,
    current: Line<'a>,
    exhausted: bool,
    errors: Vec<LintError>,
}

impl<'a> LineCursor<'a> {
    /// Create a cursor positioned before the first line of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: Box::new(split_lines(source)),
            current: Line::new(0, ""),
            exhausted: false,
            errors: Vec::new(),
        }
    }

    /// Move to the next line. Returns `false` once input has ended.
    pub fn advance(&mut self) -> bool {
        let number = self.current.number + 1;
        match self.lines.next() {
            Some(line) => {
                self.current = line;
                if line.has_trailing_whitespace() {
                    self.report(ErrorKind::TrailingWhitespace);
                }
                true
            }
            None => {
                self.current = Line::new(number, "");
                self.exhausted = true;
                false
            }
        }
    }

    /// Move to the next line unless input ends or the line equals `stop`.
    pub fn advance_until(&mut self, stop: Option<&str>) -> bool {
        self.advance() && stop.map_or(true, |stop| self.current.text != stop)
    }

    /// The current line.
    #[must_use]
    pub const fn line(&self) -> Line<'a> {
        self.current
    }

    /// Text of the current line.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.current.text
    }

    /// Check if reading has run past the last line.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Record a finding on the current line.
    pub fn report(&mut self, kind: ErrorKind) {
        tracing::trace!(line = self.current.number, "{kind}");
        self.errors.push(LintError::new(self.current.number, kind));
    }

    /// Consume the cursor, returning its findings in report order.
    #[must_use]
    pub fn into_errors(self) -> Vec<LintError> {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_and_exhaust() {
        let mut cursor = LineCursor::new("a\nb\n");
        assert!(cursor.advance());
        assert_eq!(cursor.line(), Line::new(1, "a"));
        assert!(cursor.advance());
        assert_eq!(cursor.text(), "b");
        assert!(!cursor.is_exhausted());

        assert!(!cursor.advance());
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.line(), Line::new(3, ""));

        assert!(!cursor.advance());
        assert_eq!(cursor.line().number, 4);
    }

    #[test]
    fn test_advance_until_stops_on_marker() {
        let mut cursor = LineCursor::new("x\n; Assets\ny\n");
        assert!(cursor.advance_until(Some("; Assets")));
        assert!(!cursor.advance_until(Some("; Assets")));
        assert_eq!(cursor.text(), "; Assets");
        assert!(!cursor.is_exhausted());
        assert!(cursor.advance_until(None));
        assert!(!cursor.advance_until(None));
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_trailing_whitespace_reported_on_read() {
        let mut cursor = LineCursor::new("ok\nbad \nok\n");
        while cursor.advance() {}
        assert_eq!(
            cursor.into_errors(),
            vec![LintError::new(2, ErrorKind::TrailingWhitespace)]
        );
    }
}
