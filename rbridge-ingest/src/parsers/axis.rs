//! Axis Bank credit card statement parser (text)
//!
//! Expected rows after PDF-to-text:
//!   15/04/2024  AMAZON PURCHASE                 1,200.00 Dr   50.00 Cr
//!   16/04/2024  SWIGGY BANGALORE                  350.00 Dr
//!
//! There is no header row; any line matching the row pattern counts. A second
//! amount on the same line is a separate record for the same merchant: a `Cr`
//! there is cashback, a `Dr` is another charge.

use chrono::NaiveDate;
use rbridge_core::{Direction, NormalizedTransaction};
use regex::{Captures, Regex};
use rust_decimal::Decimal;

use super::{parse_amount, parse_date};
use crate::error::{IngestError, SkipReason};
use crate::format::StatementFormat;
use crate::types::{ParsedStatement, StatementBuilder};

fn direction(tag: &str) -> Direction {
    if tag == "Dr" {
        Direction::Expense
    } else {
        Direction::Income
    }
}

fn parse_line(
    caps: &Captures<'_>,
    account: &str,
) -> Result<Vec<NormalizedTransaction>, SkipReason> {
    let date: NaiveDate = parse_date(&caps["date"], "%d/%m/%Y")?;
    let description = caps["desc"].trim();
    let mut out = Vec::with_capacity(2);

    let first = parse_amount(&caps["amt1"])?;
    if first > Decimal::ZERO {
        out.push(NormalizedTransaction::new(
            date,
            description,
            first,
            direction(&caps["tag1"]),
            account,
        ));
    }

    if let (Some(amt2), Some(tag2)) = (caps.name("amt2"), caps.name("tag2")) {
        let second = parse_amount(amt2.as_str())?;
        if second > Decimal::ZERO {
            let dir = direction(tag2.as_str());
            let desc = match dir {
                Direction::Income => format!("Cashback for {description}"),
                Direction::Expense => description.to_string(),
            };
            out.push(NormalizedTransaction::new(date, desc, second, dir, account));
        }
    }

    Ok(out)
}

/// Parse extracted Axis credit card statement text into normalized transactions.
pub fn parse_axis_text(text: &str, account: &str) -> Result<ParsedStatement, IngestError> {
    let txn_re = Regex::new(concat!(
        r"(?P<date>\d{2}/\d{2}/\d{4})\s+",
        r"(?P<desc>.*?)\s+",
        r"(?P<amt1>[\d,]+\.\d{2})\s+(?P<tag1>Dr|Cr)",
        r"(?:\s+(?P<amt2>[\d,]+\.\d{2})\s+(?P<tag2>Dr|Cr))?"
    ))?;

    let mut out = StatementBuilder::new(StatementFormat::Axis, account);
    let mut matched_any = false;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(caps) = txn_re.captures(line) else {
            out.skip(line_no, line, SkipReason::PatternMismatch);
            continue;
        };
        matched_any = true;

        match parse_line(&caps, out.account()) {
            Ok(txns) => txns.into_iter().for_each(|t| out.push(t)),
            Err(reason) => out.skip(line_no, line, reason),
        }
    }

    if !matched_any {
        return Err(IngestError::FormatNotRecognized {
            format: StatementFormat::Axis,
            reason: "no line matches the transaction pattern",
        });
    }

    Ok(out.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cashback_on_same_line() {
        let parsed =
            parse_axis_text("15/04/2024 AMAZON PURCHASE 1,200.00 Dr 50.00 Cr", "Axis Credit Card")
                .unwrap();
        assert_eq!(parsed.len(), 2);

        let purchase = &parsed.transactions[0];
        assert_eq!(purchase.date(), NaiveDate::from_ymd_opt(2024, 4, 15).unwrap());
        assert_eq!(purchase.description(), "AMAZON PURCHASE");
        assert_eq!(purchase.amount(), dec!(1200.00));
        assert_eq!(purchase.direction(), Direction::Expense);
        assert_eq!(purchase.category(), "Shopping");

        let cashback = &parsed.transactions[1];
        assert_eq!(cashback.description(), "Cashback for AMAZON PURCHASE");
        assert_eq!(cashback.amount(), dec!(50.00));
        assert_eq!(cashback.direction(), Direction::Income);
        assert_eq!(cashback.account(), "Axis Credit Card");
    }

    #[test]
    fn test_second_debit_is_independent_expense() {
        let parsed = parse_axis_text("16/04/2024 IRCTC TICKET 500.00 Dr 17.70 Dr", "Axis").unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.transactions[1].description(), "IRCTC TICKET");
        assert_eq!(parsed.transactions[1].direction(), Direction::Expense);
        assert_eq!(parsed.transactions[1].amount(), dec!(17.70));
        assert_eq!(parsed.transactions[1].category(), "Transportation");
    }

    #[test]
    fn test_payment_credit_is_income() {
        let parsed =
            parse_axis_text("20/04/2024 BBPS PAYMENT RECEIVED 9,999.00 Cr", "Axis").unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.transactions[0].direction(), Direction::Income);
        assert_eq!(parsed.transactions[0].amount(), dec!(9999.00));
    }

    #[test]
    fn test_zero_amounts_are_dropped() {
        let parsed = parse_axis_text("17/04/2024 FUEL SURCHARGE 0.00 Dr 12.00 Cr", "Axis").unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.transactions[0].description(), "Cashback for FUEL SURCHARGE");
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_malformed_line_does_not_stop_parsing() {
        let text = "\
Axis Bank Credit Card Statement
15/04/2024 SWIGGY BANGALORE 350.00 Dr

this line is garbage 12 Dr
31/02/2024 BAD DATE 10.00 Dr
16/04/2024 ZOMATO 220.00 Dr
";
        let parsed = parse_axis_text(text, "Axis").unwrap();
        let descs: Vec<_> = parsed.transactions.iter().map(|t| t.description()).collect();
        assert_eq!(descs, vec!["SWIGGY BANGALORE", "ZOMATO"]);

        let lines: Vec<_> = parsed.skipped.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![1, 4, 5]);
        assert_eq!(parsed.skipped[1].reason, SkipReason::PatternMismatch);
        assert!(matches!(parsed.skipped[2].reason, SkipReason::InvalidDate { .. }));
    }

    #[test]
    fn test_no_matching_lines_is_not_recognized() {
        let err = parse_axis_text("Sl. No.,Transaction Date\n1,2,3\n", "Axis").unwrap_err();
        assert!(matches!(
            err,
            IngestError::FormatNotRecognized { format: StatementFormat::Axis, .. }
        ));
    }
}
