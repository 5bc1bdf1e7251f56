//! rbridge-ingest: bank statement adapters producing normalized, categorized transactions.

pub mod error;
pub mod format;
pub mod parsers;
pub mod types;

pub use error::{IngestError, SkipReason};
pub use format::StatementFormat;
pub use types::{ParsedStatement, SkippedRecord, Summary};

/// Parse a statement with the format's default account label.
///
/// Unlike [`StatementFormat::parse`], an empty result is an error: callers get
/// either at least one transaction or [`IngestError::NoTransactions`].
pub fn ingest(format: StatementFormat, text: &str) -> Result<ParsedStatement, IngestError> {
    ingest_with_account(format, text, format.default_account())
}

/// Same as [`ingest`], stamping `account` on every record.
pub fn ingest_with_account(
    format: StatementFormat,
    text: &str,
    account: &str,
) -> Result<ParsedStatement, IngestError> {
    let parsed = format.parse(text, account)?;
    if parsed.is_empty() {
        return Err(IngestError::NoTransactions {
            format,
            skipped: parsed.skipped.len(),
        });
    }
    Ok(parsed)
}
