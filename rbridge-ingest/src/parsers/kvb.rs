//! Karur Vysya Bank (KVB) statement parser (CSV)
//!
//! Expected section:
//!   Transaction Date,Value Date,Branch,Cheque No.,Description,Debit,Credit,Balance
//!   01-03-2024 10:15:22,01-03-2024,MAIN BRANCH,,UPI/...,500.00,,"12,000.00"
//!
//! Only the money columns are used: narration and cheque number are left empty.
//! A positive debit is an expense; otherwise the credit column is income. When both
//! columns are positive the debit wins.

use rbridge_core::{Direction, NormalizedTransaction};
use rust_decimal::Decimal;
use tracing::debug;

use super::{cell, find_header, parse_amount, parse_date_time, split_csv_line};
use crate::error::{IngestError, SkipReason};
use crate::format::StatementFormat;
use crate::types::{ParsedStatement, StatementBuilder};

const HEADER: &str =
    "Transaction Date,Value Date,Branch,Cheque No.,Description,Debit,Credit,Balance";
const MIN_COLUMNS: usize = 8;

fn parse_row(row: &csv::StringRecord, account: &str) -> Result<NormalizedTransaction, SkipReason> {
    let date = parse_date_time(cell(row, 0), "%d-%m-%Y %H:%M:%S")?;
    let debit = parse_amount(cell(row, 5))?;
    let credit = parse_amount(cell(row, 6))?;

    let (amount, direction) = if debit > Decimal::ZERO {
        (debit, Direction::Expense)
    } else {
        (credit, Direction::Income)
    };

    Ok(NormalizedTransaction::new(date, "", amount, direction, account))
}

/// Parse a KVB CSV statement into normalized transactions.
pub fn parse_kvb_text(text: &str, account: &str) -> Result<ParsedStatement, IngestError> {
    let lines: Vec<&str> = text.lines().collect();
    let start = find_header(&lines, |l| l.contains(HEADER)).ok_or(
        IngestError::FormatNotRecognized {
            format: StatementFormat::Kvb,
            reason: "transaction header not found",
        },
    )?;

    let mut out = StatementBuilder::new(StatementFormat::Kvb, account);

    for (idx, line) in lines.iter().enumerate().skip(start + 1) {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let row = match split_csv_line(line) {
            Ok(r) => r,
            Err(reason) => {
                out.skip(line_no, line, reason);
                continue;
            }
        };
        if row.len() < MIN_COLUMNS {
            debug!(line = line_no, "not a transaction row");
            continue;
        }

        match parse_row(&row, out.account()) {
            Ok(txn) => out.push(txn),
            Err(reason) => out.skip(line_no, line, reason),
        }
    }

    Ok(out.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn statement(rows: &[&str]) -> String {
        let mut s = String::from("Karur Vysya Bank\nAccount No: 1234\n\n");
        s.push_str(HEADER);
        s.push('\n');
        for r in rows {
            s.push_str(r);
            s.push('\n');
        }
        s
    }

    #[test]
    fn test_debit_column_is_expense() {
        let text = statement(&[
            "01-03-2024 10:15:22,01-03-2024,MAIN,,UPI/SWIGGY,500.00,,\"12,000.00\"",
        ]);
        let parsed = parse_kvb_text(&text, "KVB").unwrap();
        assert_eq!(parsed.len(), 1);
        let t = &parsed.transactions[0];
        assert_eq!(t.direction(), Direction::Expense);
        assert_eq!(t.amount(), dec!(500.00));
        assert_eq!(t.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(t.account(), "KVB");
    }

    #[test]
    fn test_credit_column_is_income() {
        let text = statement(&["02-03-2024 09:00:00,02-03-2024,MAIN,,NEFT,,500.00,\"12,500.00\""]);
        let parsed = parse_kvb_text(&text, "KVB").unwrap();
        let t = &parsed.transactions[0];
        assert_eq!(t.direction(), Direction::Income);
        assert_eq!(t.amount(), dec!(500.00));
    }

    #[test]
    fn test_description_and_reference_are_dropped() {
        let text = statement(&["02-03-2024 09:00:00,02-03-2024,MAIN,CHQ99,SWIGGY,\"1,000.00\",,0"]);
        let parsed = parse_kvb_text(&text, "KVB").unwrap();
        let t = &parsed.transactions[0];
        assert_eq!(t.description(), "");
        assert_eq!(t.reference(), None);
        assert_eq!(t.category(), "unknown");
        assert_eq!(t.subcategory(), "");
        assert_eq!(t.amount(), dec!(1000.00));
    }

    #[test]
    fn test_both_zero_falls_back_to_credit() {
        let text = statement(&["03-03-2024 09:00:00,03-03-2024,MAIN,,X,0.00,,100.00"]);
        let parsed = parse_kvb_text(&text, "KVB").unwrap();
        let t = &parsed.transactions[0];
        assert_eq!(t.direction(), Direction::Income);
        assert_eq!(t.amount(), Decimal::ZERO);
    }

    #[test]
    fn test_both_positive_prefers_debit() {
        let text = statement(&["03-03-2024 09:00:00,03-03-2024,MAIN,,X,10.00,20.00,100.00"]);
        let parsed = parse_kvb_text(&text, "KVB").unwrap();
        let t = &parsed.transactions[0];
        assert_eq!(t.direction(), Direction::Expense);
        assert_eq!(t.amount(), dec!(10.00));
    }

    #[test]
    fn test_date_without_time_is_skipped() {
        let text = statement(&[
            "03-03-2024,03-03-2024,MAIN,,X,10.00,,100.00",
            "04-03-2024 11:11:11,04-03-2024,MAIN,,X,10.00,,90.00",
            "Closing Balance,90.00",
        ]);
        let parsed = parse_kvb_text(&text, "KVB").unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].line, 5);
    }

    #[test]
    fn test_missing_header_is_not_recognized() {
        let err = parse_kvb_text("nothing to see", "KVB").unwrap_err();
        assert!(matches!(err, IngestError::FormatNotRecognized { .. }));
    }
}
