//! Bank-specific statement adapters and the helpers they share

pub mod axis;
pub mod equitas;
pub mod kotak;
pub mod kvb;

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::SkipReason;

/// Index of the first line containing `marker`.
fn find_header(lines: &[&str], marker: impl Fn(&str) -> bool) -> Option<usize> {
    lines.iter().position(|&l| marker(l))
}

/// Split one comma-delimited line, honoring quotes.
fn split_csv_line(line: &str) -> Result<StringRecord, SkipReason> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    match rdr.records().next() {
        Some(rec) => Ok(rec?),
        None => Ok(StringRecord::new()),
    }
}

/// Parse a money cell: thousands separators stripped, blank means zero.
fn parse_amount(raw: &str) -> Result<Decimal, SkipReason> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&cleaned).map_err(|_| SkipReason::InvalidAmount(raw.trim().to_string()))
}

fn parse_date(raw: &str, pattern: &'static str) -> Result<NaiveDate, SkipReason> {
    let value = raw.trim();
    NaiveDate::parse_from_str(value, pattern).map_err(|_| SkipReason::InvalidDate {
        value: value.to_string(),
        pattern,
    })
}

fn parse_date_time(raw: &str, pattern: &'static str) -> Result<NaiveDate, SkipReason> {
    let value = raw.trim();
    NaiveDateTime::parse_from_str(value, pattern)
        .map(|dt| dt.date())
        .map_err(|_| SkipReason::InvalidDate {
            value: value.to_string(),
            pattern,
        })
}

fn cell(row: &StringRecord, idx: usize) -> &str {
    row.get(idx).unwrap_or("").trim()
}
