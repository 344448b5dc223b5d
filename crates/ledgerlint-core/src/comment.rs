//! Semicolon comments.

/// A line whose first non-space character is `;`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comment<'a> {
    /// Number of spaces before the semicolon.
    pub indent: usize,
    /// The comment starting at the semicolon.
    pub full: &'a str,
    /// The comment text after the semicolon and any spaces following it.
    pub content: &'a str,
}

impl<'a> Comment<'a> {
    /// Parse a comment line.
    ///
    /// Returns `None` for blank lines, lines of only spaces, and lines whose
    /// first non-space character is not `;`.
    #[must_use]
    pub fn parse(text: &'a str) -> Option<Self> {
        let indent = text.find(|c: char| c != ' ')?;
        let full = &text[indent..];
        let after = full.strip_prefix(';')?;
        Some(Self {
            indent,
            full,
            content: after.trim_start_matches(' '),
        })
    }

    /// Number of spaces between the semicolon and the content.
    #[must_use]
    pub fn spaces_after_semicolon(&self) -> usize {
        self.full.len() - 1 - self.content.len()
    }
}
