use rbridge_core::NormalizedTransaction;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::SkipReason;
use crate::format::StatementFormat;

/// A row or line that could not be turned into a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based line number in the raw statement text
    pub line: usize,
    pub reason: SkipReason,
    pub raw: String,
}

/// Output of a statement adapter: the records it built plus what it had to skip
#[derive(Debug, Clone)]
pub struct ParsedStatement {
    pub format: StatementFormat,
    pub account: String,
    pub transactions: Vec<NormalizedTransaction>,
    pub skipped: Vec<SkippedRecord>,
}

/// Counts and totals for a parsed statement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub transactions: usize,
    pub expenses: usize,
    pub incomes: usize,
    pub total_expense: Decimal,
    pub total_income: Decimal,
    /// Income minus expenses
    pub net: Decimal,
    pub uncategorized: usize,
    pub skipped: usize,
}

impl ParsedStatement {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn summary(&self) -> Summary {
        let mut s = Summary {
            transactions: self.transactions.len(),
            skipped: self.skipped.len(),
            ..Summary::default()
        };
        for t in &self.transactions {
            if t.is_expense() {
                s.expenses += 1;
                s.total_expense += t.amount();
            } else {
                s.incomes += 1;
                s.total_income += t.amount();
            }
            s.net += t.signed_amount();
            if t.category() == rbridge_core::UNKNOWN {
                s.uncategorized += 1;
            }
        }
        s
    }
}

/// Accumulates records and warnings while an adapter walks a statement.
pub(crate) struct StatementBuilder {
    format: StatementFormat,
    account: String,
    transactions: Vec<NormalizedTransaction>,
    skipped: Vec<SkippedRecord>,
}

impl StatementBuilder {
    pub(crate) fn new(format: StatementFormat, account: &str) -> Self {
        Self {
            format,
            account: account.to_string(),
            transactions: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub(crate) fn account(&self) -> &str {
        &self.account
    }

    pub(crate) fn push(&mut self, txn: NormalizedTransaction) {
        self.transactions.push(txn);
    }

    pub(crate) fn skip(&mut self, line: usize, raw: &str, reason: SkipReason) {
        warn!(format = %self.format, line, %reason, "skipping record: {}", raw.trim());
        self.skipped.push(SkippedRecord {
            line,
            reason,
            raw: raw.to_string(),
        });
    }

    pub(crate) fn finish(self) -> ParsedStatement {
        debug!(
            format = %self.format,
            parsed = self.transactions.len(),
            skipped = self.skipped.len(),
            "statement parsed"
        );
        ParsedStatement {
            format: self.format,
            account: self.account,
            transactions: self.transactions,
            skipped: self.skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rbridge_core::Direction;
    use rust_decimal_macros::dec;

    #[test]
    fn test_summary_totals_by_direction() {
        let d = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
        let txn = |desc: &str, amount: Decimal, direction: Direction| {
            NormalizedTransaction::new(d, desc, amount, direction, "Axis Credit Card")
        };
        let mut b = StatementBuilder::new(StatementFormat::Axis, "Axis Credit Card");
        b.push(txn("AMAZON", dec!(1200.00), Direction::Expense));
        b.push(txn("SWIGGY", dec!(300.50), Direction::Expense));
        b.push(txn("QWZ", dec!(50.00), Direction::Income));
        b.skip(4, "garbage", SkipReason::PatternMismatch);
        let parsed = b.finish();

        let s = parsed.summary();
        assert_eq!(s.transactions, 3);
        assert_eq!(s.expenses, 2);
        assert_eq!(s.incomes, 1);
        assert_eq!(s.total_expense, dec!(1500.50));
        assert_eq!(s.total_income, dec!(50.00));
        assert_eq!(s.net, dec!(-1450.50));
        assert_eq!(s.uncategorized, 1);
        assert_eq!(s.skipped, 1);
        assert_eq!(parsed.skipped[0].line, 4);
    }
}
