//! RealByte Money Manager import file (tab-separated).
//!
//! Columns, in order:
//! Date, Account, Category, Subcategory, Note, Amount, Income/Expense, Description
//!
//! Dates are DD/MM/YYYY, amounts are absolute with two decimals, and the note
//! column carries the bank reference when there is one.

use csv::WriterBuilder;
use rbridge_core::NormalizedTransaction;
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::Write;

use crate::ExportError;

pub const HEADERS: [&str; 8] = [
    "Date",
    "Account",
    "Category",
    "Subcategory",
    "Note",
    "Amount",
    "Income/Expense",
    "Description",
];

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Two decimals, rounded half away from zero (`1.239` -> `1.24`, `0.005` -> `0.01`).
fn format_amount(amount: Decimal) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

fn row(txn: &NormalizedTransaction) -> [String; 8] {
    [
        txn.date().format(DATE_FORMAT).to_string(),
        txn.account().to_string(),
        txn.category().to_string(),
        txn.subcategory().to_string(),
        txn.reference().unwrap_or("").to_string(),
        format_amount(txn.amount()),
        txn.direction().label().to_string(),
        txn.description().to_string(),
    ]
}

/// Write the header row and one row per transaction to `writer`.
pub fn write_tsv<W: Write>(txns: &[NormalizedTransaction], writer: W) -> Result<(), ExportError> {
    let mut wtr = WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    wtr.write_record(HEADERS)?;
    for txn in txns {
        wtr.write_record(row(txn))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Serialize transactions into an in-memory TSV document.
pub fn to_tsv(txns: &[NormalizedTransaction]) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    write_tsv(txns, &mut buf)?;
    Ok(buf)
}
