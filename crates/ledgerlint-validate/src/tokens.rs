//! Checks for the small tokens shared by entries and postings.

use crate::cursor::LineCursor;
use crate::error::ErrorKind;
use ledgerlint_core::{is_valid_date, Amount, AmountError, Comment, Division};

/// Report `token` if it is not a well-formed date.
pub fn check_date(cursor: &mut LineCursor<'_>, token: &str) {
    if !is_valid_date(token) {
        cursor.report(ErrorKind::IllFormedDate(token.to_string()));
    }
}

/// Report problems with the amount token in `text` used as `division`.
///
/// A token that cannot be read at all yields one finding. Otherwise a missing
/// thousands separator and a decimal-place problem are reported separately.
pub fn check_amount(cursor: &mut LineCursor<'_>, text: &str, division: Division) {
    let amount = match Amount::parse(text) {
        Ok(amount) => amount,
        Err(AmountError::Missing) => {
            cursor.report(ErrorKind::NoAmount);
            return;
        }
        Err(error) => {
            cursor.report(ErrorKind::Amount {
                token: text.trim_start_matches(' ').to_string(),
                error,
            });
            return;
        }
    };
    if !amount.is_grouped() {
        cursor.report(ErrorKind::Amount {
            token: amount.text.to_string(),
            error: AmountError::MissingSeparator,
        });
    }
    if let Err(error) = amount.check_places(division) {
        cursor.report(ErrorKind::Amount {
            token: amount.text.to_string(),
            error,
        });
    }
}

/// Report layout problems with a transaction or posting note.
pub fn check_note(cursor: &mut LineCursor<'_>, comment: &Comment<'_>, expected_indent: usize) {
    if comment.indent != expected_indent {
        cursor.report(ErrorKind::NoteIndent {
            expected: expected_indent,
            found: comment.indent,
        });
    }
    if comment.content.is_empty() {
        cursor.report(ErrorKind::NoteTooShort);
        return;
    }
    match comment.spaces_after_semicolon() {
        0 => cursor.report(ErrorKind::NoSpaceAfterSemicolon),
        1 => {}
        _ => cursor.report(ErrorKind::ExtraSpaceAfterSemicolon),
    }
}
