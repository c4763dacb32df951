use thiserror::Error;

use crate::types::LedgerSequence;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Ledger {sequence} is missing from the backend")]
    MissingLedger { sequence: LedgerSequence },
    #[error("Invalid ledger range: start {start} is past end {end}")]
    InvalidRange {
        start: LedgerSequence,
        end: LedgerSequence,
    },
    #[error("Failed to read ledger file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode ledger entry: {0}")]
    Decode(#[from] serde_json::Error),
}
