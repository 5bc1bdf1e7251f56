//! Equitas Small Finance Bank statement parser (CSV)
//!
//! The export has a preamble, then a header whose cells are quoted and may span
//! several lines:
//!   Date,Reference No. / Cheque No.,Narration,"Withdrawal
//!   INR","Deposit
//!   INR","Closing Balance
//!   INR"
//!   05-Apr-2024,UPI-4091,UPI/SWIGGY/ORDER,350.00,,"10,150.00"
//!   *** End of the Statement ***

use csv::{ReaderBuilder, StringRecord, Trim};
use rbridge_core::{Direction, NormalizedTransaction};
use rust_decimal::Decimal;
use tracing::debug;

use super::{find_header, parse_amount, parse_date};
use crate::error::{IngestError, SkipReason};
use crate::format::StatementFormat;
use crate::types::{ParsedStatement, StatementBuilder};

const END_MARKER: &str = "***";

const DATE: &[&str] = &["Date"];
const NARRATION: &[&str] = &["Narration"];
const REFERENCE: &[&str] = &["Reference No. / Cheque No."];
const WITHDRAWAL: &[&str] = &["Withdrawal\nINR", "Withdrawal INR"];
const DEPOSIT: &[&str] = &["Deposit\nINR", "Deposit INR"];

fn normalize_header(h: &str) -> String {
    h.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Header cells, addressable by their raw or whitespace-normalized spelling
struct Columns {
    headers: Vec<(String, String)>,
}

impl Columns {
    fn new(record: &StringRecord) -> Self {
        let headers = record
            .iter()
            .map(|h| (h.to_string(), normalize_header(h)))
            .collect();
        Self { headers }
    }

    fn find(&self, spellings: &[&str]) -> Option<usize> {
        spellings.iter().find_map(|s| {
            self.headers
                .iter()
                .position(|(raw, norm)| raw.as_str() == *s || norm.as_str() == *s)
        })
    }
}

struct Layout {
    date: usize,
    narration: Option<usize>,
    reference: Option<usize>,
    withdrawal: usize,
    deposit: usize,
}

impl Layout {
    fn resolve(columns: &Columns) -> Option<Self> {
        Some(Self {
            date: columns.find(DATE)?,
            narration: columns.find(NARRATION),
            reference: columns.find(REFERENCE),
            withdrawal: columns.find(WITHDRAWAL)?,
            deposit: columns.find(DEPOSIT)?,
        })
    }
}

fn get(row: &StringRecord, idx: Option<usize>) -> &str {
    idx.and_then(|i| row.get(i)).unwrap_or("").trim()
}

/// The text of the line starting at byte offset `byte` of `table`.
fn line_at(table: &str, byte: u64) -> &str {
    let start = usize::try_from(byte).unwrap_or(usize::MAX).min(table.len());
    table
        .get(start..)
        .and_then(|rest| rest.lines().next())
        .unwrap_or("")
}

/// `Ok(None)` means the row moved no money and is dropped.
fn parse_row(
    row: &StringRecord,
    layout: &Layout,
    account: &str,
) -> Result<Option<NormalizedTransaction>, SkipReason> {
    let date = parse_date(get(row, Some(layout.date)), "%d-%b-%Y")?;
    let narration = get(row, layout.narration);
    let withdrawal = parse_amount(get(row, Some(layout.withdrawal)))?;
    let deposit = parse_amount(get(row, Some(layout.deposit)))?;

    let (amount, direction) = if withdrawal > Decimal::ZERO {
        (withdrawal, Direction::Expense)
    } else if deposit > Decimal::ZERO {
        (deposit, Direction::Income)
    } else {
        return Ok(None);
    };

    let txn = NormalizedTransaction::new(date, narration, amount, direction, account)
        .with_reference(get(row, layout.reference));
    Ok(Some(txn))
}

/// Parse an Equitas CSV statement into normalized transactions.
pub fn parse_equitas_text(text: &str, account: &str) -> Result<ParsedStatement, IngestError> {
    let not_recognized = |reason: &'static str| IngestError::FormatNotRecognized {
        format: StatementFormat::Equitas,
        reason,
    };

    let lines: Vec<&str> = text.lines().collect();
    let start = find_header(&lines, |l| l.contains("Narration") && l.contains("Date"))
        .ok_or_else(|| not_recognized("no header with Date and Narration"))?;

    let table = lines[start..].join("\n");
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(table.as_bytes());

    let columns = Columns::new(rdr.headers()?);
    let layout = Layout::resolve(&columns)
        .ok_or_else(|| not_recognized("missing Date, Withdrawal or Deposit column"))?;

    let mut out = StatementBuilder::new(StatementFormat::Equitas, account);

    let mut last_line = start + 1;
    for result in rdr.records() {
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                let (line_no, raw) = match e.position() {
                    Some(p) => (start + p.line() as usize, line_at(&table, p.byte())),
                    None => (last_line + 1, ""),
                };
                last_line = line_no;
                out.skip(line_no, raw, e.into());
                continue;
            }
        };
        let line_no = row
            .position()
            .map_or(last_line + 1, |p| start + p.line() as usize);
        last_line = line_no;

        let date_cell = get(&row, Some(layout.date));
        if date_cell.is_empty() || date_cell.starts_with(END_MARKER) {
            continue;
        }

        match parse_row(&row, &layout, out.account()) {
            Ok(Some(txn)) => out.push(txn),
            Ok(None) => debug!(line = line_no, "no withdrawal or deposit, dropping row"),
            Err(reason) => out.skip(line_no, &row.iter().collect::<Vec<_>>().join(","), reason),
        }
    }

    Ok(out.finish())
}
