//! Kotak Mahindra Bank statement parser (CSV)
//!
//! Expected section:
//!   Sl. No.,Transaction Date,Value Date,Description,Chq / Ref No.,Amount,Dr / Cr,Balance
//!   1,01-03-2024 10:00:00,01-03-2024,UPI/SWIGGY/4061,UPI-406112,"1,250.00",DR,"48,750.00"
//!
//! Rows not starting with a serial number (opening balance lines, footers) are ignored.
//! A numbered row with missing columns is skipped and reported.
//! The reference column is not carried over.

use chrono::NaiveDate;
use rbridge_core::{Direction, NormalizedTransaction};
use tracing::debug;

use super::{cell, find_header, parse_amount, parse_date, split_csv_line};
use crate::error::{IngestError, SkipReason};
use crate::format::StatementFormat;
use crate::types::{ParsedStatement, StatementBuilder};

const HEADER: &str = "Sl. No.,Transaction Date,Value Date,Description";
const MIN_COLUMNS: usize = 8;

fn parse_row(row: &csv::StringRecord, account: &str) -> Result<NormalizedTransaction, SkipReason> {
    // "01-03-2024 10:00:00" or just "01-03-2024"
    let trans_date = cell(row, 1);
    let date_part = trans_date.split_whitespace().next().unwrap_or("");
    let date: NaiveDate = parse_date(date_part, "%d-%m-%Y")?;

    let amount = parse_amount(cell(row, 5))?;
    let direction = if cell(row, 6) == "DR" {
        Direction::Expense
    } else {
        Direction::Income
    };

    Ok(NormalizedTransaction::new(date, cell(row, 3), amount, direction, account))
}

/// Parse a Kotak CSV statement into normalized transactions.
pub fn parse_kotak_text(text: &str, account: &str) -> Result<ParsedStatement, IngestError> {
    let lines: Vec<&str> = text.lines().collect();
    let start = find_header(&lines, |l| l.contains(HEADER)).ok_or(
        IngestError::FormatNotRecognized {
            format: StatementFormat::Kotak,
            reason: "transaction header not found",
        },
    )?;

    let mut out = StatementBuilder::new(StatementFormat::Kotak, account);

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

        let numbered = row
            .get(0)
            .is_some_and(|s| s.starts_with(|c: char| c.is_ascii_digit()));
        if !numbered {
            debug!(line = line_no, "not a transaction row");
            continue;
        }
        if row.len() < MIN_COLUMNS {
            let reason = SkipReason::MissingColumns {
                expected: MIN_COLUMNS,
                found: row.len(),
            };
            out.skip(line_no, line, reason);
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
    use rust_decimal_macros::dec;

    const STATEMENT: &str = r#"Kotak Mahindra Bank
Account Statement 01-03-2024 to 31-03-2024

Sl. No.,Transaction Date,Value Date,Description,Chq / Ref No.,Amount,Dr / Cr,Balance
1,01-03-2024 10:00:00,01-03-2024,UBER TRIP,REF1,250.00,DR,5000.00
2,02-03-2024 18:21:09,02-03-2024,"UPI/SWIGGY/BANGALORE",UPI-2,"1,250.00",DR,"3,750.00"
3,05-03-2024,05-03-2024,NEFT SALARY ACME,N123,"50,000.00",CR,"53,750.00"

Opening Balance,,,,,,,5250.00
Statement generated on 01-04-2024
"#;

    #[test]
    fn test_parse_kotak_basic() {
        let parsed = parse_kotak_text(STATEMENT, "Kotak").unwrap();
        assert_eq!(parsed.len(), 3);
        assert!(parsed.skipped.is_empty());

        let uber = &parsed.transactions[0];
        assert_eq!(uber.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(uber.amount(), dec!(250.00));
        assert_eq!(uber.direction(), Direction::Expense);
        assert_eq!(uber.category(), "Transportation");
        assert_eq!(uber.description(), "UBER TRIP");
        assert_eq!(uber.reference(), None);
        assert_eq!(uber.account(), "Kotak");

        let swiggy = &parsed.transactions[1];
        assert_eq!(swiggy.amount(), dec!(1250.00));
        assert_eq!(swiggy.category(), "Food");
        assert_eq!(swiggy.subcategory(), "Eating out");

        let salary = &parsed.transactions[2];
        assert_eq!(salary.direction(), Direction::Income);
        assert_eq!(salary.amount(), dec!(50000.00));
        assert_eq!(salary.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn test_header_on_first_line_is_found() {
        let text = "Sl. No.,Transaction Date,Value Date,Description,Ref,Amount,Dr / Cr,Balance\n\
                    1,01-03-2024,01-03-2024,ZOMATO,R,99.00,DR,1.00\n";
        let parsed = parse_kotak_text(text, "Kotak").unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_missing_header_is_not_recognized() {
        let err = parse_kotak_text("Date,Amount\n01-03-2024,5.00\n", "Kotak").unwrap_err();
        assert!(matches!(
            err,
            IngestError::FormatNotRecognized { format: StatementFormat::Kotak, .. }
        ));
    }

    #[test]
    fn test_bad_row_is_skipped_not_fatal() {
        let text = format!(
            "{HEADER}\n\
             1,32-13-2024,x,SWIGGY,R,10.00,DR,0\n\
             2,02-03-2024,x,SWIGGY,R,abc,DR,0\n\
             3,03-03-2024,x,SWIGGY,R,10.00,DR,0\n"
        );
        let parsed = parse_kotak_text(&text, "Kotak").unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.skipped.len(), 2);
        assert_eq!(parsed.skipped[0].line, 2);
        assert!(matches!(parsed.skipped[0].reason, SkipReason::InvalidDate { .. }));
        assert_eq!(parsed.skipped[1].reason, SkipReason::InvalidAmount("abc".to_string()));
    }

    #[test]
    fn test_numbered_row_missing_columns_is_reported() {
        let text = format!(
            "{HEADER}\n\
             1,01-03-2024,01-03-2024,ZOMATO,R,99.00\n\
             2,02-03-2024,02-03-2024,ZOMATO,R,99.00,DR,1.00\n\
             Closing Balance,1.00\n"
        );
        let parsed = parse_kotak_text(&text, "Kotak").unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].line, 2);
        assert_eq!(
            parsed.skipped[0].reason,
            SkipReason::MissingColumns { expected: 8, found: 6 }
        );
    }
}
