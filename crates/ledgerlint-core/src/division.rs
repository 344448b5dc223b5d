//! Posting line geometry.
//!
//! Everything after a posting's account name is laid out in fixed-width
//! slices. The first slice ends at [`AMOUNT_END_COLUMN`] and every later
//! slice is [`DIVISION_WIDTH`] columns wide, so slice boundaries fall at
//! columns 60, 80, 100, and so on. Each non-blank slice holds one
//! [`Division`], and divisions must appear in declaration order.

use std::fmt;

/// Indentation that marks a posting line.
pub const POSTING_INDENT: &str = "    ";

/// Column (0-based, exclusive) at which the amount slice ends.
pub const AMOUNT_END_COLUMN: usize = 60;

/// Width of every slice after the amount.
pub const DIVISION_WIDTH: usize = 20;

/// One kind of slice in a posting line, in required left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Division {
    /// Regular amount on every posting.
    Amount,
    /// Lot price of the commodity, i.e. cost basis, written `{...}`.
    Price,
    /// Lot date of the commodity, written `[...]`.
    Date,
    /// What the amount was valued at, written `@ ...` or `@@ ...`.
    Cost,
    /// Balance assertion, written `= ...`.
    Assert,
}

impl Division {
    /// All divisions in order.
    pub const ALL: [Self; 5] = [
        Self::Amount,
        Self::Price,
        Self::Date,
        Self::Cost,
        Self::Assert,
    ];

    /// Position of this division in the required order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Price => "lot price",
            Self::Date => "lot date",
            Self::Cost => "posting cost",
            Self::Assert => "balance assertion",
        }
    }

    const fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of divisions seen on one posting line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DivisionSet(u8);

impl DivisionSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a division.
    pub fn insert(&mut self, division: Division) {
        self.0 |= division.bit();
    }

    /// Check if a division is present.
    #[must_use]
    pub const fn contains(self, division: Division) -> bool {
        self.0 & division.bit() != 0
    }

    /// Check if `division` is the only division present.
    #[must_use]
    pub const fn is_only(self, division: Division) -> bool {
        self.0 == division.bit()
    }
}
