//! The journal date grammar.
//!
//! Dates are written `YYYY/MM/DD`. Only the shape is checked: the tens digit
//! of the month must be `0` or `1` and the tens digit of the day `0` through
//! `3`. `2024/13/01` and `2024/02/39` are accepted; there is no calendar
//! validation.

/// Check whether `token` is a well-formed date.
#[must_use]
pub fn is_valid_date(token: &str) -> bool {
    match token.as_bytes() {
        [y0, y1, y2, y3, b'/', b'0'..=b'1', m1, b'/', b'0'..=b'3', d1] => {
            [y0, y1, y2, y3, m1, d1].iter().all(|b| b.is_ascii_digit())
        }
        _ => false,
    }
}
