//! Statement layouts and the identifiers callers use to select them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IngestError;
use crate::parsers;
use crate::types::ParsedStatement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementFormat {
    /// Kotak Mahindra savings CSV: numbered rows, DR/CR tag column (layout A)
    Kotak,
    /// KVB CSV: separate debit and credit columns, no narration kept (layout B)
    Kvb,
    /// Equitas CSV export with multi-line quoted headers (layout C)
    Equitas,
    /// Axis credit card statement as extracted text lines (layout D)
    Axis,
}

impl StatementFormat {
    pub const ALL: [StatementFormat; 4] = [
        StatementFormat::Kotak,
        StatementFormat::Kvb,
        StatementFormat::Equitas,
        StatementFormat::Axis,
    ];

    /// Bank identifier accepted on the command line and in config files
    pub fn id(&self) -> &'static str {
        match self {
            StatementFormat::Kotak => "kotak",
            StatementFormat::Kvb => "kvb",
            StatementFormat::Equitas => "equitas",
            StatementFormat::Axis => "axis",
        }
    }

    /// Layout alias (`formatA`..`formatD`), also accepted by `from_str`
    pub fn layout(&self) -> &'static str {
        match self {
            StatementFormat::Kotak => "formatA",
            StatementFormat::Kvb => "formatB",
            StatementFormat::Equitas => "formatC",
            StatementFormat::Axis => "formatD",
        }
    }

    /// Account label stamped on every record unless the caller overrides it
    pub fn default_account(&self) -> &'static str {
        match self {
            StatementFormat::Kotak => "Kotak",
            StatementFormat::Kvb => "KVB",
            StatementFormat::Equitas => "Equitas",
            StatementFormat::Axis => "Axis Credit Card",
        }
    }

    /// Run this format's adapter over raw statement text.
    pub fn parse(&self, text: &str, account: &str) -> Result<ParsedStatement, IngestError> {
        match self {
            StatementFormat::Kotak => parsers::kotak::parse_kotak_text(text, account),
            StatementFormat::Kvb => parsers::kvb::parse_kvb_text(text, account),
            StatementFormat::Equitas => parsers::equitas::parse_equitas_text(text, account),
            StatementFormat::Axis => parsers::axis::parse_axis_text(text, account),
        }
    }
}

impl fmt::Display for StatementFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for StatementFormat {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StatementFormat::ALL
            .into_iter()
            .find(|f| {
                f.id().eq_ignore_ascii_case(wanted) || f.layout().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| IngestError::UnknownFormat(wanted.to_string()))
    }
}
