//! Core types for ledgerlint
//!
//! This crate provides the building blocks shared by the journal linter:
//!
//! - [`Line`] - A numbered line of journal text
//! - [`Comment`] - A semicolon comment and its indentation
//! - [`Division`] - The fixed-width columns of a posting line
//! - [`Amount`] - An amount token split into commodity and value
//! - [`CommodityClass`] - Decimal-place rules per commodity
//! - [`is_valid_date`] - The `YYYY/MM/DD` date grammar
//!
//! Nothing here reports diagnostics; the validator crate decides what a
//! malformed token means in context.
//!
//! # Example
//!
//! ```
//! use ledgerlint_core::{Amount, AmountError, Division, is_valid_date};
//!
//! assert!(is_valid_date("2024/01/05"));
//!
//! let amount = Amount::parse("   $1,234.56").unwrap();
//! assert_eq!(amount.commodity, "$");
//! assert!(amount.is_grouped());
//! assert!(amount.check_places(Division::Amount).is_ok());
//!
//! let loose = Amount::parse("$1234.5").unwrap();
//! assert!(!loose.is_grouped());
//! assert_eq!(
//!     loose.check_places(Division::Amount),
//!     Err(AmountError::ExpectedTwoPlaces)
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod amount;
pub mod comment;
pub mod date;
pub mod division;
pub mod line;

pub use amount::{Amount, AmountError, CommodityClass};
pub use comment::Comment;
pub use date::is_valid_date;
pub use division::{
    Division, DivisionSet, AMOUNT_END_COLUMN, DIVISION_WIDTH, POSTING_INDENT,
};
pub use line::{split_lines, Line};
