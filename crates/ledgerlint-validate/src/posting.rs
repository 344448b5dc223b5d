//! Posting line column validation.
//!
//! After the account name, a posting is cut into fixed-width slices: the
//! first ends at column 60, the rest are 20 columns wide. Each non-blank
//! slice is classified as one [`Division`] by its last character or by the
//! character after its leading space, then checked for syntax, ordering and
//! alignment with the other postings of the transaction.

use crate::cursor::LineCursor;
use crate::error::ErrorKind;
use crate::tokens::{check_amount, check_date};
use crate::transaction::TransactionState;
use crate::LintOptions;
use ledgerlint_core::{
    Division, DivisionSet, AMOUNT_END_COLUMN, DIVISION_WIDTH, POSTING_INDENT,
};

/// What a single slice turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slice {
    /// Only spaces.
    Blank,
    /// A division, checked; keep scanning.
    Found(Division),
    /// Scanning of the line must stop; the division, if recognized, still
    /// counts as present.
    Stop(Option<Division>),
}

/// Check the posting on the cursor's current line.
pub fn check_posting(
    cursor: &mut LineCursor<'_>,
    state: &mut TransactionState<'_>,
    options: &LintOptions,
) {
    let text = cursor.text();
    let body = text.get(POSTING_INDENT.len()..).unwrap_or_default();
    let account = body.split_once("  ").map(|(account, _)| account);

    state.postings += 1;
    if account.is_none() {
        state.amountless += 1;
    }
    if state.postings > 2 && state.amountless > 0 {
        cursor.report(ErrorKind::ElidedAmount);
    }
    let Some(account) = account else {
        return;
    };

    let mut start = POSTING_INDENT.len() + account.len() + 2;
    let mut end = AMOUNT_END_COLUMN;
    if start >= end {
        cursor.report(ErrorKind::AmountPastColumn);
        return;
    }

    let mut position = Division::Amount.index();
    let mut present = DivisionSet::new();
    while text.len() > start {
        if text.len() < end {
            cursor.report(ErrorKind::NotAligned);
            break;
        }
        if position != Division::Amount.index() && text.as_bytes()[start] != b' ' {
            cursor.report(ErrorKind::ExpectedSpace(start + 1));
        }
        let Some(section) = text.get(start..end) else {
            cursor.report(ErrorKind::UnrecognizedSection(start + 1));
            break;
        };
        match classify(cursor, section, start + 1, position, present) {
            Slice::Blank => {}
            Slice::Found(division) => {
                present.insert(division);
                position = division.index();
                if !state.align(division, end) {
                    cursor.report(ErrorKind::Misaligned(end + 1));
                }
            }
            Slice::Stop(division) => {
                if let Some(division) = division {
                    present.insert(division);
                }
                break;
            }
        }
        start = end;
        end += DIVISION_WIDTH;
        position += 1;
    }

    if !present.contains(Division::Amount) && !present.is_only(Division::Assert) {
        cursor.report(ErrorKind::AmountlessWithoutAssert);
    }
    if present.contains(Division::Price) && !present.contains(Division::Cost) {
        cursor.report(ErrorKind::PriceWithoutCost);
    }
    if options.expect_assertions
        && !present.contains(Division::Assert)
        && (account.starts_with("Assets:") || account.starts_with("Liabilities:"))
        && state.expects_assertion()
    {
        cursor.report(ErrorKind::ExpectedBalanceAssertion);
    }
}

/// Classify and check one slice starting at 1-based `column`.
fn classify(
    cursor: &mut LineCursor<'_>,
    section: &str,
    column: usize,
    position: usize,
    present: DivisionSet,
) -> Slice {
    if section.bytes().all(|b| b == b' ') {
        return Slice::Blank;
    }
    if position == Division::Amount.index() {
        check_amount(cursor, section, Division::Amount);
        return Slice::Found(Division::Amount);
    }
    let bytes = section.as_bytes();
    match (bytes.last(), bytes.get(1)) {
        (Some(b'}'), _) => lot_price(cursor, section, column, position),
        (Some(b']'), _) => lot_date(cursor, section, column, position),
        (_, Some(b'@')) => cost(cursor, section, column, position),
        (_, Some(b'=')) => assertion(cursor, section, column, present),
        _ => {
            cursor.report(ErrorKind::UnrecognizedSection(column));
            Slice::Stop(None)
        }
    }
}

fn check_order(cursor: &mut LineCursor<'_>, division: Division, column: usize, position: usize) {
    if position > division.index() {
        cursor.report(ErrorKind::DivisionOutOfOrder { column, division });
    }
}

/// Text between the opening delimiter at `open` and the closing one that
/// ends the slice.
fn enclosed(section: &str, open: usize) -> &str {
    section
        .get(open + 1..section.len().saturating_sub(1))
        .unwrap_or_default()
}

fn lot_price(cursor: &mut LineCursor<'_>, section: &str, column: usize, position: usize) -> Slice {
    check_order(cursor, Division::Price, column, position);
    let Some(open) = section.find('{') else {
        cursor.report(ErrorKind::IllFormedLotPrice(column));
        return Slice::Stop(Some(Division::Price));
    };
    if section.as_bytes().get(open + 1) == Some(&b' ') {
        cursor.report(ErrorKind::SpaceInLotPrice(column + open + 1));
    }
    check_amount(cursor, enclosed(section, open), Division::Price);
    Slice::Found(Division::Price)
}

fn lot_date(cursor: &mut LineCursor<'_>, section: &str, column: usize, position: usize) -> Slice {
    check_order(cursor, Division::Date, column, position);
    let Some(open) = section.find('[') else {
        cursor.report(ErrorKind::IllFormedLotDate(column));
        return Slice::Stop(Some(Division::Date));
    };
    check_date(cursor, enclosed(section, open));
    Slice::Found(Division::Date)
}

fn cost(cursor: &mut LineCursor<'_>, section: &str, column: usize, position: usize) -> Slice {
    check_order(cursor, Division::Cost, column, position);
    if !matches!(section.as_bytes().get(2), Some(b' ' | b'@')) {
        let found = section
            .get(2..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(' ');
        cursor.report(ErrorKind::UnexpectedCharacter {
            column: column + 2,
            found,
        });
        return Slice::Stop(Some(Division::Cost));
    }
    check_amount(cursor, section.get(3..).unwrap_or_default(), Division::Cost);
    Slice::Found(Division::Cost)
}

/// Check a `= amount` balance assertion. `= 0` is accepted in any commodity.
fn assertion(
    cursor: &mut LineCursor<'_>,
    section: &str,
    column: usize,
    present: DivisionSet,
) -> Slice {
    if present.contains(Division::Assert) {
        cursor.report(ErrorKind::DivisionOutOfOrder {
            column,
            division: Division::Assert,
        });
    }
    if section.as_bytes().get(2) != Some(&b' ') {
        cursor.report(ErrorKind::NoSpaceAfterEquals(column + 2));
    }
    let rest = section.get(3..).unwrap_or_default();
    if rest.trim_start_matches(' ') != "0" {
        check_amount(cursor, rest, Division::Assert);
    }
    Slice::Found(Division::Assert)
}
