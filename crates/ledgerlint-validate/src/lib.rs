//! Ledger journal linting.
//!
//! This crate checks a hand-formatted journal against a fixed layout:
//!
//! - Sections and sub-sections in order, each opened by a literal header
//! - Account names under the right prefix, sorted where required
//! - Tags in sorted order
//! - Transactions: entry line, note, postings, blank separator
//! - Posting columns: amount ending at column 60, then 20-column slices for
//!   lot price, lot date, cost and balance assertion
//! - Date and amount formats, and trailing whitespace everywhere
//!
//! Every problem is collected as a [`LintError`]; nothing stops the scan
//! except running out of input while a section header is still expected.
//!
//! # Example
//!
//! ```
//! use ledgerlint_validate::{lint, ErrorKind, LintError};
//!
//! let journal = "\
//! ;;; Commodities
//! ; Currencies
//! ; Mutual funds
//! ; Stocks
//! ; Other
//! ;;; Tags
//! tag travel
//! tag food
//! ";
//! let errors = lint(journal);
//! assert_eq!(
//!     errors,
//!     vec![
//!         LintError::new(8, ErrorKind::TagOutOfOrder("food".to_string())),
//!         LintError::new(9, ErrorKind::EofBeforeHeader(";;; Accounts")),
//!     ]
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cursor;
pub mod error;
pub mod posting;
pub mod sections;
pub mod tokens;
pub mod transaction;

pub use cursor::LineCursor;
pub use error::{Category, ErrorKind, LintError};
pub use sections::{Section, SectionRule, JOURNAL};

/// Switches for checks that are off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LintOptions {
    /// Require a balance assertion on `Assets:` and `Liabilities:` postings
    /// of transfer-like transactions (ATM, transfers, debt payments, payroll).
    pub expect_assertions: bool,
}

/// Lint a journal with default options.
///
/// Returns findings in the order they were found, which is line order.
#[must_use]
pub fn lint(source: &str) -> Vec<LintError> {
    lint_with_options(source, LintOptions::default())
}

/// Lint a journal with custom options.
#[must_use]
pub fn lint_with_options(source: &str, options: LintOptions) -> Vec<LintError> {
    let span = tracing::debug_span!("lint", bytes = source.len());
    let _guard = span.enter();

    let mut cursor = LineCursor::new(source);
    sections::check_sections(&mut cursor, JOURNAL, None, &options);
    let errors = cursor.into_errors();

    tracing::debug!(findings = errors.len(), "lint complete");
    errors
}
