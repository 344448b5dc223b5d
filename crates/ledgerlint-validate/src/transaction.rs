//! The transactions section.
//!
//! Each transaction is an entry line, an indented note, and postings, with a
//! blank line between transactions:
//!
//! ```text
//! 2024/01/05 * Coffee Shop
//!     ; Morning coffee
//!     Expenses:Dining                                    $5.00
//!     Assets:Checking
//! ```

use crate::cursor::LineCursor;
use crate::error::ErrorKind;
use crate::posting::check_posting;
use crate::tokens::{check_date, check_note};
use crate::LintOptions;
use ledgerlint_core::{Comment, Division, POSTING_INDENT};

/// Indentation of a transaction note and of comments before the first posting.
const NOTE_INDENT: usize = 4;

/// Indentation of comments annotating a posting.
const POSTING_NOTE_INDENT: usize = 8;

/// Per-transaction state, reset at every entry line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionState<'a> {
    pub(crate) payee: &'a str,
    pub(crate) note: &'a str,
    pub(crate) postings: usize,
    pub(crate) amountless: usize,
    pub(crate) columns: [Option<usize>; Division::ALL.len()],
}

impl TransactionState<'_> {
    /// Record that `division` ends at column `end`. Returns `false` if an
    /// earlier posting put it somewhere else.
    pub(crate) fn align(&mut self, division: Division, end: usize) -> bool {
        let column = &mut self.columns[division.index()];
        match *column {
            Some(expected) => expected == end,
            None => {
                *column = Some(end);
                true
            }
        }
    }

    /// Check if this looks like a transfer whose postings should assert a
    /// balance.
    pub(crate) fn expects_assertion(&self) -> bool {
        self.payee.contains("ATM")
            || self.payee.contains("Transfer")
            || matches!(self.note, "Pay debt" | "Collect debt" | "Visa statement")
            || self.note.contains("domain")
            || self.note.contains("payroll")
    }
}

/// What the next non-blank line should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Entry,
    Note,
    Postings,
}

/// State carried from one transaction to the next.
struct TransactionValidator<'a> {
    options: LintOptions,
    pending: bool,
    previous: Option<(&'a str, &'a str)>,
    state: TransactionState<'a>,
}

impl<'a> TransactionValidator<'a> {
    fn new(options: LintOptions) -> Self {
        Self {
            options,
            pending: false,
            previous: None,
            state: TransactionState::default(),
        }
    }

    /// Start a new transaction at the current line.
    fn begin(&mut self, cursor: &mut LineCursor<'a>) {
        tracing::trace!(line = cursor.line().number, "transaction");
        self.state = TransactionState::default();
        self.check_entry(cursor);
    }

    fn check_entry(&mut self, cursor: &mut LineCursor<'a>) {
        let text = cursor.text();
        let (dates, payee) = if let Some(split) = text.split_once(" * ") {
            if self.pending {
                cursor.report(ErrorKind::PostedAfterPending);
            }
            split
        } else if let Some(split) = text.split_once(" ! ") {
            self.pending = true;
            split
        } else {
            cursor.report(ErrorKind::MissingFlag);
            return;
        };
        self.state.payee = payee;
        if dates.ends_with(' ') {
            cursor.report(ErrorKind::SpaceAfterDate);
        }
        if payee.starts_with(' ') {
            cursor.report(ErrorKind::SpaceBeforePayee);
        }

        let (primary, aux) = match dates.split_once('=') {
            Some((primary, aux)) => {
                check_date(cursor, aux);
                if primary == aux {
                    cursor.report(ErrorKind::RedundantAuxDate(aux.to_string()));
                } else if primary < aux {
                    cursor.report(ErrorKind::AuxDateAfterPrimary {
                        aux: aux.to_string(),
                        primary: primary.to_string(),
                    });
                }
                (primary, aux)
            }
            None => (dates, dates),
        };
        check_date(cursor, primary);
        if self.previous.is_some_and(|previous| (primary, aux) < previous) {
            cursor.report(ErrorKind::DateOutOfOrder {
                primary: primary.to_string(),
                aux: aux.to_string(),
            });
        }
        self.previous = Some((primary, aux));
    }

    fn note(&mut self, cursor: &mut LineCursor<'a>) -> Expect {
        match Comment::parse(cursor.text()) {
            Some(comment) => {
                check_note(cursor, &comment, NOTE_INDENT);
                self.state.note = comment.content;
                Expect::Postings
            }
            None => {
                cursor.report(ErrorKind::MissingNote);
                self.posting_line(cursor)
            }
        }
    }

    fn posting_line(&mut self, cursor: &mut LineCursor<'a>) -> Expect {
        let text = cursor.text();
        if let Some(comment) = Comment::parse(text) {
            let indent = if self.state.postings == 0 {
                NOTE_INDENT
            } else {
                POSTING_NOTE_INDENT
            };
            check_note(cursor, &comment, indent);
            Expect::Postings
        } else if text.starts_with(POSTING_INDENT) {
            check_posting(cursor, &mut self.state, &self.options);
            Expect::Postings
        } else if text.is_empty() {
            Expect::Entry
        } else {
            cursor.report(ErrorKind::MissingSeparator);
            self.begin(cursor);
            Expect::Note
        }
    }
}

/// Check the transactions section, up to `stop` or end of input.
pub fn check_transactions(
    cursor: &mut LineCursor<'_>,
    stop: Option<&str>,
    options: &LintOptions,
) {
    if !(cursor.advance_until(stop) && cursor.text().is_empty()) {
        cursor.report(ErrorKind::ExpectedBlankLine);
    }
    let mut validator = TransactionValidator::new(*options);
    let mut expect = Expect::Entry;
    while cursor.advance_until(stop) {
        if expect != Expect::Postings && cursor.text().is_empty() {
            cursor.report(ErrorKind::UnexpectedBlankLine);
            continue;
        }
        expect = match expect {
            Expect::Entry => {
                validator.begin(cursor);
                Expect::Note
            }
            Expect::Note => validator.note(cursor),
            Expect::Postings => validator.posting_line(cursor),
        };
    }
}
