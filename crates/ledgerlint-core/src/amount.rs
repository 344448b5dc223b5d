//! Amount tokens.
//!
//! An amount is either `$` immediately followed by a number, or a commodity
//! symbol, one space, and a number. Numbers may start with `-`, must carry a
//! comma every three digits left of the decimal point, and must have the
//! number of decimal places their [`CommodityClass`] requires.

use crate::Division;
use thiserror::Error;

/// Problems with an amount token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmountError {
    /// The token is empty or only spaces.
    #[error("no amount found")]
    Missing,
    /// No commodity/value split could be found, or the value is empty.
    #[error("could not parse amount")]
    Unparsable,
    /// The value contains something other than digits, commas and a point.
    #[error("amount has non-numeric character")]
    NonNumeric,
    /// A digit sits where a thousands separator belongs.
    #[error("amount missing comma (thousands separator)")]
    MissingSeparator,
    /// A currency amount without exactly two decimal places.
    #[error("expected 2 decimal places")]
    ExpectedTwoPlaces,
    /// A currency price, cost or assertion with fewer than two places.
    #[error("expected at least 2 decimal places")]
    ExpectedAtLeastTwoPlaces,
    /// A price or cost in something other than a currency.
    #[error("price must be currency")]
    PriceMustBeCurrency,
    /// A fund amount without exactly four decimal places.
    #[error("expected 4 decimal places")]
    ExpectedFourPlaces,
    /// A whole-unit amount with a decimal point.
    #[error("expected a whole number")]
    ExpectedWholeNumber,
    /// A commodity the journal does not know.
    #[error("invalid commodity")]
    InvalidCommodity,
}

/// Decimal-place rules for the known commodities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommodityClass {
    /// `$`, `USD`, `EUR`, `VMFXX`: two decimal places.
    Currency,
    /// `VTSAX`, `VTIAX`, `VBTLX`, `VTRTS`, `GOOG`: four decimal places.
    Fund,
    /// `Audible`: whole numbers only.
    WholeUnit,
}

impl CommodityClass {
    /// Look up the class of a commodity symbol.
    #[must_use]
    pub fn of(symbol: &str) -> Option<Self> {
        match symbol {
            "$" | "USD" | "EUR" | "VMFXX" => Some(Self::Currency),
            "VTSAX" | "VTIAX" | "VBTLX" | "VTRTS" | "GOOG" => Some(Self::Fund),
            "Audible" => Some(Self::WholeUnit),
            _ => None,
        }
    }
}

/// A syntactically valid amount token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount<'a> {
    /// The whole token, leading spaces removed.
    pub text: &'a str,
    /// The commodity symbol, e.g. `$` or `VTSAX`.
    pub commodity: &'a str,
    /// The value without its sign.
    pub value: &'a str,
    point: usize,
    grouped: bool,
}

impl<'a> Amount<'a> {
    /// Parse an amount token. Leading spaces are ignored.
    pub fn parse(text: &'a str) -> Result<Self, AmountError> {
        let text = text.trim_start_matches(' ');
        if text.is_empty() {
            return Err(AmountError::Missing);
        }
        let (commodity, value) = if text.starts_with('$') {
            text.split_at(1)
        } else {
            text.split_once(' ').ok_or(AmountError::Unparsable)?
        };
        if value.is_empty() {
            return Err(AmountError::Unparsable);
        }
        let value = value.strip_prefix('-').unwrap_or(value);

        let point = value.find('.').unwrap_or(value.len());
        let mut grouped = true;
        for (i, b) in value.bytes().enumerate() {
            if i < point && (point - i) % 4 == 0 {
                match b {
                    b',' => {}
                    b'0'..=b'9' => grouped = false,
                    _ => return Err(AmountError::NonNumeric),
                }
            } else if i != point && !b.is_ascii_digit() {
                return Err(AmountError::NonNumeric);
            }
        }

        Ok(Self {
            text,
            commodity,
            value,
            point,
            grouped,
        })
    }

    /// Check if every thousands position holds a comma.
    #[must_use]
    pub const fn is_grouped(&self) -> bool {
        self.grouped
    }

    /// Number of digits after the decimal point, or `None` without a point.
    #[must_use]
    pub fn decimal_places(&self) -> Option<usize> {
        (self.point < self.value.len()).then(|| self.value.len() - self.point - 1)
    }

    /// Check the commodity's decimal-place rule for use in `division`.
    ///
    /// Plain amounts in a currency need exactly two places; prices, costs and
    /// assertions need at least two. Prices and costs must be in a currency.
    pub fn check_places(&self, division: Division) -> Result<CommodityClass, AmountError> {
        let class = CommodityClass::of(self.commodity);
        if class != Some(CommodityClass::Currency)
            && matches!(division, Division::Price | Division::Cost)
        {
            return Err(AmountError::PriceMustBeCurrency);
        }
        let class = class.ok_or(AmountError::InvalidCommodity)?;
        let places = self.decimal_places();
        match class {
            CommodityClass::Currency => {
                if division == Division::Amount && places != Some(2) {
                    return Err(AmountError::ExpectedTwoPlaces);
                }
                if places.map_or(true, |p| p < 2) {
                    return Err(AmountError::ExpectedAtLeastTwoPlaces);
                }
            }
            CommodityClass::Fund => {
                if places != Some(4) {
                    return Err(AmountError::ExpectedFourPlaces);
                }
            }
            CommodityClass::WholeUnit => {
                if places.is_some() {
                    return Err(AmountError::ExpectedWholeNumber);
                }
            }
        }
        Ok(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dollar() {
        let amount = Amount::parse("          $1,234.56").unwrap();
        assert_eq!(amount.text, "$1,234.56");
        assert_eq!(amount.commodity, "$");
        assert_eq!(amount.value, "1,234.56");
        assert!(amount.is_grouped());
        assert_eq!(amount.decimal_places(), Some(2));
        assert_eq!(
            amount.check_places(Division::Amount),
            Ok(CommodityClass::Currency)
        );
    }

    #[test]
    fn test_parse_symbol() {
        let amount = Amount::parse("VTSAX -12.3456").unwrap();
        assert_eq!(amount.commodity, "VTSAX");
        assert_eq!(amount.value, "12.3456");
        assert_eq!(
            amount.check_places(Division::Amount),
            Ok(CommodityClass::Fund)
        );
    }

    #[test]
    fn test_missing_and_unparsable() {
        assert_eq!(Amount::parse("    "), Err(AmountError::Missing));
        assert_eq!(Amount::parse(""), Err(AmountError::Missing));
        assert_eq!(Amount::parse("USD"), Err(AmountError::Unparsable));
        assert_eq!(Amount::parse("$"), Err(AmountError::Unparsable));
        assert_eq!(Amount::parse("USD "), Err(AmountError::Unparsable));
    }

    #[test]
    fn test_grouping() {
        assert!(!Amount::parse("$1234.56").unwrap().is_grouped());
        assert!(Amount::parse("$234.56").unwrap().is_grouped());
        assert!(Amount::parse("$1,234,567.00").unwrap().is_grouped());
        assert!(Amount::parse("$-1,000.00").unwrap().is_grouped());
        assert!(!Amount::parse("Audible 1000").unwrap().is_grouped());
    }

    #[test]
    fn test_non_numeric() {
        assert_eq!(Amount::parse("$12a.00"), Err(AmountError::NonNumeric));
        assert_eq!(Amount::parse("$1,23.00"), Err(AmountError::NonNumeric));
        assert_eq!(Amount::parse("$1.00.00"), Err(AmountError::NonNumeric));
        assert_eq!(Amount::parse("$12x456.00"), Err(AmountError::NonNumeric));
    }

    #[test]
    fn test_currency_places() {
        let one_place = Amount::parse("$1,234.5").unwrap();
        assert_eq!(
            one_place.check_places(Division::Amount),
            Err(AmountError::ExpectedTwoPlaces)
        );
        assert_eq!(
            one_place.check_places(Division::Assert),
            Err(AmountError::ExpectedAtLeastTwoPlaces)
        );

        let three_places = Amount::parse("USD 10.125").unwrap();
        assert_eq!(
            three_places.check_places(Division::Amount),
            Err(AmountError::ExpectedTwoPlaces)
        );
        assert!(three_places.check_places(Division::Cost).is_ok());

        let whole = Amount::parse("$5").unwrap();
        assert_eq!(
            whole.check_places(Division::Price),
            Err(AmountError::ExpectedAtLeastTwoPlaces)
        );
    }

    #[test]
    fn test_price_must_be_currency() {
        let fund = Amount::parse("VTSAX 1.0000").unwrap();
        assert_eq!(
            fund.check_places(Division::Price),
            Err(AmountError::PriceMustBeCurrency)
        );
        assert_eq!(
            fund.check_places(Division::Cost),
            Err(AmountError::PriceMustBeCurrency)
        );
        assert!(fund.check_places(Division::Assert).is_ok());

        let unknown = Amount::parse("BTC 1.00").unwrap();
        assert_eq!(
            unknown.check_places(Division::Cost),
            Err(AmountError::PriceMustBeCurrency)
        );
    }

    #[test]
    fn test_fund_and_whole_unit_places() {
        assert_eq!(
            Amount::parse("GOOG 3.00").unwrap().check_places(Division::Amount),
            Err(AmountError::ExpectedFourPlaces)
        );
        assert_eq!(
            Amount::parse("Audible 2").unwrap().check_places(Division::Amount),
            Ok(CommodityClass::WholeUnit)
        );
        assert_eq!(
            Amount::parse("Audible 2.").unwrap().check_places(Division::Amount),
            Err(AmountError::ExpectedWholeNumber)
        );
    }

    #[test]
    fn test_invalid_commodity() {
        assert_eq!(
            Amount::parse("BTC 0.10").unwrap().check_places(Division::Amount),
            Err(AmountError::InvalidCommodity)
        );
        assert_eq!(CommodityClass::of("usd"), None);
    }
}
