//! The journal's section layout and the dispatcher that walks it.
//!
//! A journal is a fixed sequence of sections, each introduced by a literal
//! header comment. Some sections are themselves sequences of sub-sections.
//! The dispatcher scans to the first header of a level, then hands each
//! section the lines up to the next section's header.

use crate::cursor::LineCursor;
use crate::error::ErrorKind;
use crate::transaction::check_transactions;
use crate::LintOptions;

/// A named region of the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Name used in logs.
    pub name: &'static str,
    /// The header comment that opens the section, matched exactly.
    pub header: &'static str,
    /// How the section's lines are checked.
    pub rule: SectionRule,
}

/// How the lines of a section are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionRule {
    /// Lines are not checked.
    Skip,
    /// The section is a sequence of sub-sections.
    Nested(&'static [Section]),
    /// `tag` lines in strictly increasing order.
    Tags,
    /// `account` lines under a required prefix.
    Accounts(AccountRule),
    /// Transactions.
    Transactions,
}

/// Requirements on the `account` lines of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountRule {
    /// Label used in messages, e.g. `Liability`.
    pub label: &'static str,
    /// Prefix every account name must start with.
    pub prefix: &'static str,
    /// Whether names must be strictly increasing.
    pub sorted: bool,
}

impl Section {
    const fn new(name: &'static str, header: &'static str, rule: SectionRule) -> Self {
        Self { name, header, rule }
    }

    const fn accounts(
        header: &'static str,
        label: &'static str,
        prefix: &'static str,
        sorted: bool,
    ) -> Self {
        Self::new(
            label,
            header,
            SectionRule::Accounts(AccountRule {
                label,
                prefix,
                sorted,
            }),
        )
    }
}

/// Sub-sections of the commodities section.
pub const COMMODITY_SECTIONS: &[Section] = &[
    Section::new("Currencies", "; Currencies", SectionRule::Skip),
    Section::new("Mutual funds", "; Mutual funds", SectionRule::Skip),
    Section::new("Stocks", "; Stocks", SectionRule::Skip),
    Section::new("Other", "; Other", SectionRule::Skip),
];

/// Sub-sections of the accounts section.
pub const ACCOUNT_SECTIONS: &[Section] = &[
    Section::accounts("; Equity", "Equity", "Equity:", false),
    Section::accounts("; Assets", "Asset", "Assets:", false),
    Section::accounts("; Liabilities", "Liability", "Liabilities:", false),
    Section::accounts("; Income", "Income", "Income:", true),
    Section::accounts("; Expenses", "Expense", "Expenses:", true),
    Section::accounts("; Virtual", "Virtual", "Virtual:", false),
];

/// Sub-sections of the people section.
pub const PEOPLE_SECTIONS: &[Section] = &[
    Section::accounts("; Debtors", "Debtor", "Assets:Due From:", true),
    Section::accounts("; Creditors", "Creditor", "Liabilities:Due To:", true),
];

/// The top-level layout of a journal.
pub const JOURNAL: &[Section] = &[
    Section::new(
        "Commodities",
        ";;; Commodities",
        SectionRule::Nested(COMMODITY_SECTIONS),
    ),
    Section::new("Tags", ";;; Tags", SectionRule::Tags),
    Section::new(
        "Accounts",
        ";;; Accounts",
        SectionRule::Nested(ACCOUNT_SECTIONS),
    ),
    Section::new("People", ";;; People", SectionRule::Nested(PEOPLE_SECTIONS)),
    Section::new(
        "Transactions",
        ";;; Transactions",
        SectionRule::Transactions,
    ),
];

/// Check a sequence of sections ending at `stop` (or end of input).
///
/// Lines before the first section's header are skipped. If input ends
/// before a section starts, that is reported and the rest of this level is
/// abandoned.
pub fn check_sections(
    cursor: &mut LineCursor<'_>,
    sections: &[Section],
    stop: Option<&'static str>,
    options: &LintOptions,
) {
    let Some(first) = sections.first() else {
        return;
    };
    while cursor.advance() {
        if cursor.text() == first.header {
            break;
        }
    }
    for (i, section) in sections.iter().enumerate() {
        if cursor.is_exhausted() {
            cursor.report(ErrorKind::EofBeforeHeader(section.header));
            break;
        }
        let substop = sections.get(i + 1).map_or(stop, |next| Some(next.header));
        tracing::debug!(
            section = section.name,
            line = cursor.line().number,
            "checking section"
        );
        check_section(cursor, section, substop, options);
    }
}

fn check_section(
    cursor: &mut LineCursor<'_>,
    section: &Section,
    stop: Option<&'static str>,
    options: &LintOptions,
) {
    match section.rule {
        SectionRule::Skip => while cursor.advance_until(stop) {},
        SectionRule::Nested(sections) => check_sections(cursor, sections, stop, options),
        SectionRule::Tags => check_tags(cursor, stop),
        SectionRule::Accounts(rule) => check_accounts(cursor, &rule, stop),
        SectionRule::Transactions => check_transactions(cursor, stop, options),
    }
}

fn check_tags(cursor: &mut LineCursor<'_>, stop: Option<&str>) {
    let mut last: Option<&str> = None;
    while cursor.advance_until(stop) {
        let Some(tag) = cursor.text().strip_prefix("tag ") else {
            continue;
        };
        if last.is_some_and(|last| last >= tag) {
            cursor.report(ErrorKind::TagOutOfOrder(tag.to_string()));
        }
        last = Some(tag);
    }
}

fn check_accounts(cursor: &mut LineCursor<'_>, rule: &AccountRule, stop: Option<&str>) {
    let mut last: Option<&str> = None;
    while cursor.advance_until(stop) {
        let Some(account) = cursor.text().strip_prefix("account ") else {
            continue;
        };
        if !account.starts_with(rule.prefix) {
            cursor.report(ErrorKind::AccountPrefix {
                label: rule.label,
                account: account.to_string(),
            });
        } else if rule.sorted && last.is_some_and(|last| last >= account) {
            cursor.report(ErrorKind::AccountOutOfOrder {
                label: rule.label,
                account: account.to_string(),
            });
        }
        last = Some(account);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LintError;

    fn run(sections: &[Section], source: &str) -> Vec<LintError> {
        let mut cursor = LineCursor::new(source);
        check_sections(&mut cursor, sections, None, &LintOptions::default());
        cursor.into_errors()
    }

    #[test]
    fn test_headers_are_distinct_per_level() {
        for level in [JOURNAL, COMMODITY_SECTIONS, ACCOUNT_SECTIONS, PEOPLE_SECTIONS] {
            for (i, a) in level.iter().enumerate() {
                for b in &level[i + 1..] {
                    assert_ne!(a.header, b.header);
                }
            }
        }
    }

    #[test]
    fn test_tags_sorted() {
        let errors = run(
            &[Section::new("Tags", ";;; Tags", SectionRule::Tags)],
            ";;; Tags\ntag food\ntag travel\ntag rent\ntag rent\n",
        );
        assert_eq!(
            errors,
            vec![
                LintError::new(4, ErrorKind::TagOutOfOrder("rent".to_string())),
                LintError::new(5, ErrorKind::TagOutOfOrder("rent".to_string())),
            ]
        );
    }

    #[test]
    fn test_prefix_only_accounts_may_be_unsorted() {
        let errors = run(
            ACCOUNT_SECTIONS,
            "; Equity\n\
             ; Assets\n\
             account Assets:Savings\n\
             account Assets:Checking\n\
             account Liabilities:Visa\n\
             ; Liabilities\n; Income\n; Expenses\n; Virtual\n",
        );
        assert_eq!(
            errors,
            vec![LintError::new(
                5,
                ErrorKind::AccountPrefix {
                    label: "Asset",
                    account: "Liabilities:Visa".to_string(),
                }
            )]
        );
    }

    #[test]
    fn test_sorted_accounts() {
        let errors = run(
            PEOPLE_SECTIONS,
            "; Debtors\n\
             account Assets:Due From:Bob\n\
             account Assets:Due From:Alice\n\
             ; Creditors\n\
             account Liabilities:Due To:Carol\n\
             account Liabilities:Due To:Carol\n",
        );
        assert_eq!(
            errors,
            vec![
                LintError::new(
                    3,
                    ErrorKind::AccountOutOfOrder {
                        label: "Debtor",
                        account: "Assets:Due From:Alice".to_string(),
                    }
                ),
                LintError::new(
                    6,
                    ErrorKind::AccountOutOfOrder {
                        label: "Creditor",
                        account: "Liabilities:Due To:Carol".to_string(),
                    }
                ),
            ]
        );
    }

    #[test]
    fn test_lines_before_first_header_are_skipped() {
        let errors = run(
            PEOPLE_SECTIONS,
            "account Income:Nonsense\n; Debtors\n; Creditors\n",
        );
        assert!(errors.is_empty(), "unexpected findings: {errors:?}");
    }

    #[test]
    fn test_eof_before_header() {
        let errors = run(PEOPLE_SECTIONS, "; Debtors\naccount Assets:Due From:Bob\n");
        assert_eq!(
            errors,
            vec![LintError::new(3, ErrorKind::EofBeforeHeader("; Creditors"))]
        );
    }

    #[test]
    fn test_missing_first_header_reports_once() {
        let errors = run(PEOPLE_SECTIONS, "nothing here\n");
        assert_eq!(
            errors,
            vec![LintError::new(2, ErrorKind::EofBeforeHeader("; Debtors"))]
        );
    }
}
