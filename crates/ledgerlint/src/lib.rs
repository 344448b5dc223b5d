//! Command-line front end for the ledger journal linter.
//!
//! # Example Usage
//!
//! ```bash
//! ledgerlint -f ~/ledger.dat
//! LEDGER_FILE=~/ledger.dat ledgerlint --format json
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
pub mod report;
