//! Lint findings.

use ledgerlint_core::{AmountError, Division};
use std::fmt;
use thiserror::Error;

/// Broad class of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Wrong or missing section header, unexpected end of input.
    Structural,
    /// Accounts, tags or dates out of order.
    Ordering,
    /// Malformed dates and amounts.
    Format,
    /// Misaligned posting columns.
    Alignment,
    /// Whitespace and indentation.
    Style,
}

impl Category {
    /// Lowercase name of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::Ordering => "ordering",
            Self::Format => "format",
            Self::Alignment => "alignment",
            Self::Style => "style",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What is wrong with a line.
///
/// The `Display` text of each variant is the exact message printed after
/// `<file>:<line>: `. Columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    // === Structural ===
    /// Input ended while a section header was still expected.
    #[error("reached EOF before {0}")]
    EofBeforeHeader(&'static str),
    /// The line after the transactions header is not blank.
    #[error("expected a blank line")]
    ExpectedBlankLine,
    /// A blank line where an entry or a note was expected.
    #[error("unexpected blank line")]
    UnexpectedBlankLine,
    /// The line after an entry is not a comment.
    #[error("expected a transaction note")]
    MissingNote,
    /// A posting appears before the amount column.
    #[error("amount goes past column 60")]
    AmountPastColumn,

    // === Ordering ===
    /// An account in a sorted section is not greater than the previous one.
    #[error("{label} account out of order: {account}")]
    AccountOutOfOrder {
        /// Section label, e.g. `Income`.
        label: &'static str,
        /// The account name.
        account: String,
    },
    /// A tag is not greater than the previous one.
    #[error("tag out of order: {0}")]
    TagOutOfOrder(String),
    /// A `*` transaction follows a `!` transaction.
    #[error("posted transaction appears after pending ones")]
    PostedAfterPending,
    /// A transaction is dated before the previous one.
    #[error("date out of order: {primary}={aux}")]
    DateOutOfOrder {
        /// Primary date.
        primary: String,
        /// Auxiliary date, or the primary date when there is none.
        aux: String,
    },
    /// An auxiliary date equal to the primary date.
    #[error("aux date {0} is redundant")]
    RedundantAuxDate(String),
    /// An auxiliary date after the primary date.
    #[error("aux date {aux} is later than primary date {primary}")]
    AuxDateAfterPrimary {
        /// Auxiliary date.
        aux: String,
        /// Primary date.
        primary: String,
    },
    /// A transaction is not followed by a blank line.
    #[error("expected a blank line separating transactions")]
    MissingSeparator,
    /// A division appears after a later division on the same line.
    #[error("column {column}: {division} out of order")]
    DivisionOutOfOrder {
        /// Column where the slice starts.
        column: usize,
        /// The division found.
        division: Division,
    },

    // === Format ===
    /// An account without its section's prefix.
    #[error("non-{label} account in {label} section: {account}")]
    AccountPrefix {
        /// Section label, e.g. `Asset`.
        label: &'static str,
        /// The account name.
        account: String,
    },
    /// An entry line with neither `*` nor `!`.
    #[error("transaction has neither '*' nor '!'")]
    MissingFlag,
    /// A date that is not `YYYY/MM/DD`.
    #[error("ill-formed date: {0}")]
    IllFormedDate(String),
    /// A slice that should hold an amount is empty.
    #[error("no amount found")]
    NoAmount,
    /// A malformed amount token.
    #[error("{token}: {error}")]
    Amount {
        /// The token, leading spaces removed.
        token: String,
        /// What is wrong with it.
        error: AmountError,
    },
    /// A transaction of three or more postings elides an amount.
    #[error("transactions with 3+ postings must not omit amounts")]
    ElidedAmount,
    /// A posting without an amount has something besides an assertion.
    #[error("postings that omit $amount can only have =assert")]
    AmountlessWithoutAssert,
    /// A lot price without a cost.
    #[error("posting has {{}}price but no @cost")]
    PriceWithoutCost,
    /// A transfer-like posting without a balance assertion.
    #[error("expected balance assertion")]
    ExpectedBalanceAssertion,
    /// A slice ending in `}` without a `{`.
    #[error("column {0}: ill-formed lot price")]
    IllFormedLotPrice(usize),
    /// A slice ending in `]` without a `[`.
    #[error("column {0}: ill-formed lot date")]
    IllFormedLotDate(usize),
    /// Something other than a space or `@` after `@`.
    #[error("column {column}: {found}: unexpected character")]
    UnexpectedCharacter {
        /// Column of the character.
        column: usize,
        /// The character.
        found: char,
    },
    /// A non-blank slice of no known kind.
    #[error("column {0}: unrecognized posting section")]
    UnrecognizedSection(usize),

    // === Alignment ===
    /// A posting line that does not end on a slice boundary.
    #[error("posting not aligned to 60+20n")]
    NotAligned,
    /// A division ends at a different column than in an earlier posting.
    #[error("column {0}: misaligned posting section")]
    Misaligned(usize),

    // === Style ===
    /// Whitespace at the end of a line.
    #[error("trailing whitespace")]
    TrailingWhitespace,
    /// A space before the ` * ` or ` ! ` marker.
    #[error("excess whitespace after date")]
    SpaceAfterDate,
    /// A space after the ` * ` or ` ! ` marker.
    #[error("excess whitespace before payee")]
    SpaceBeforePayee,
    /// A note with the wrong indentation.
    #[error("expected note to be indented {expected} spaces, not {found}")]
    NoteIndent {
        /// Required indentation.
        expected: usize,
        /// Actual indentation.
        found: usize,
    },
    /// A note with no text.
    #[error("ill-formed note (too short)")]
    NoteTooShort,
    /// A note with no space after the semicolon.
    #[error("missing space after ';'")]
    NoSpaceAfterSemicolon,
    /// A note with more than one space after the semicolon.
    #[error("too many spaces after ';'")]
    ExtraSpaceAfterSemicolon,
    /// A slice that does not start with a space.
    #[error("column {0}: expected space")]
    ExpectedSpace(usize),
    /// A space right after `{`.
    #[error("column {0}: unexpected space in lot price")]
    SpaceInLotPrice(usize),
    /// No space after `=`.
    #[error("column {0}: missing space after '='")]
    NoSpaceAfterEquals(usize),
}

impl ErrorKind {
    /// Get the category of this finding.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::EofBeforeHeader(_)
            | Self::ExpectedBlankLine
            | Self::UnexpectedBlankLine
            | Self::MissingNote
            | Self::AmountPastColumn => Category::Structural,
            Self::AccountOutOfOrder { .. }
            | Self::TagOutOfOrder(_)
            | Self::PostedAfterPending
            | Self::DateOutOfOrder { .. }
            | Self::RedundantAuxDate(_)
            | Self::AuxDateAfterPrimary { .. }
            | Self::MissingSeparator
            | Self::DivisionOutOfOrder { .. } => Category::Ordering,
            Self::AccountPrefix { .. }
            | Self::MissingFlag
            | Self::IllFormedDate(_)
            | Self::NoAmount
            | Self::Amount { .. }
            | Self::ElidedAmount
            | Self::AmountlessWithoutAssert
            | Self::PriceWithoutCost
            | Self::ExpectedBalanceAssertion
            | Self::IllFormedLotPrice(_)
            | Self::IllFormedLotDate(_)
            | Self::UnexpectedCharacter { .. }
            | Self::UnrecognizedSection(_) => Category::Format,
            Self::NotAligned | Self::Misaligned(_) => Category::Alignment,
            Self::TrailingWhitespace
            | Self::SpaceAfterDate
            | Self::SpaceBeforePayee
            | Self::NoteIndent { .. }
            | Self::NoteTooShort
            | Self::NoSpaceAfterSemicolon
            | Self::ExtraSpaceAfterSemicolon
            | Self::ExpectedSpace(_)
            | Self::SpaceInLotPrice(_)
            | Self::NoSpaceAfterEquals(_) => Category::Style,
        }
    }
}

/// A finding on one line of the journal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}: {kind}")]
pub struct LintError {
    /// 1-based line number.
    pub line: usize,
    /// What is wrong.
    pub kind: ErrorKind,
}

impl LintError {
    /// Create a new finding.
    #[must_use]
    pub const fn new(line: usize, kind: ErrorKind) -> Self {
        Self { line, kind }
    }

    /// Get the category of this finding.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }

    /// The message text without the line number.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            LintError::new(7, ErrorKind::TrailingWhitespace).to_string(),
            "7: trailing whitespace"
        );
        assert_eq!(
            ErrorKind::PriceWithoutCost.to_string(),
            "posting has {}price but no @cost"
        );
        assert_eq!(
            ErrorKind::AccountPrefix {
                label: "Liability",
                account: "Assets:Cash".to_string(),
            }
            .to_string(),
            "non-Liability account in Liability section: Assets:Cash"
        );
        assert_eq!(
            ErrorKind::Amount {
                token: "$1234.56".to_string(),
                error: AmountError::MissingSeparator,
            }
            .to_string(),
            "$1234.56: amount missing comma (thousands separator)"
        );
        assert_eq!(
            ErrorKind::DivisionOutOfOrder {
                column: 81,
                division: Division::Price,
            }
            .to_string(),
            "column 81: lot price out of order"
        );
        assert_eq!(
            ErrorKind::UnexpectedCharacter {
                column: 63,
                found: 'x',
            }
            .to_string(),
            "column 63: x: unexpected character"
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            ErrorKind::EofBeforeHeader(";;; Tags").category(),
            Category::Structural
        );
        assert_eq!(ErrorKind::NotAligned.category(), Category::Alignment);
        assert_eq!(ErrorKind::TrailingWhitespace.category(), Category::Style);
        assert_eq!(
            ErrorKind::TagOutOfOrder("a".to_string()).category(),
            Category::Ordering
        );
        assert_eq!(Category::Format.to_string(), "format");
    }
}
