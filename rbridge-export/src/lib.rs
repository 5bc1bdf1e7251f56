//! rbridge-export: serializers for normalized transactions

pub mod realbyte;

pub use realbyte::{HEADERS, to_tsv, write_tsv};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("writing TSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
