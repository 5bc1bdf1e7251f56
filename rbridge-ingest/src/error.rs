//! Ingest errors

use thiserror::Error;

use crate::format::StatementFormat;

/// File-level failures. Per-row problems are reported as [`SkipReason`]s instead.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("unknown statement format '{0}' (expected kotak, kvb, equitas or axis)")]
    UnknownFormat(String),

    #[error("{format} statement not recognized: {reason}")]
    FormatNotRecognized {
        format: StatementFormat,
        reason: &'static str,
    },

    #[error("no transactions found in {format} statement ({skipped} rows skipped)")]
    NoTransactions {
        format: StatementFormat,
        skipped: usize,
    },

    #[error("invalid transaction pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("reading CSV header: {0}")]
    Csv(#[from] csv::Error),
}

/// Why a single row or line was left out of the output
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("expected at least {expected} columns, found {found}")]
    MissingColumns { expected: usize, found: usize },

    #[error("date '{value}' does not match {pattern}")]
    InvalidDate { value: String, pattern: &'static str },

    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("line does not match the transaction pattern")]
    PatternMismatch,

    #[error("malformed CSV: {0}")]
    Csv(String),
}

impl From<csv::Error> for SkipReason {
    fn from(e: csv::Error) -> Self {
        SkipReason::Csv(e.to_string())
    }
}
