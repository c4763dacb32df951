mod errors;
mod json_backend;

use serde::{Deserialize, Serialize};

pub use errors::InputError;
pub use json_backend::JsonFileBackend;

use crate::models::{LedgerHeader, LedgerTransaction};
use crate::types::LedgerSequence;

/// A source of decoded ledgers for a bounded sequence range.
///
/// Implementations surface retrieval failures to the caller; a failure is
/// fatal for the requested range and no partial-range retry happens here.
pub trait LedgerBackend: Send + Sync + 'static {
    /// Ensures the inclusive range [start, end] can be served.
    fn prepare_range(&self, start: LedgerSequence, end: LedgerSequence) -> Result<(), InputError>;

    /// Fetches one decoded ledger.
    fn get_ledger(&self, sequence: LedgerSequence) -> Result<LedgerData, InputError>;
}

/// One decoded ledger: its closing header and the transactions applied in
/// it, in application order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerData {
    pub header: LedgerHeader,
    pub transactions: Vec<LedgerTransaction>,
}

/// One transaction paired with the header of the ledger it closed in;
/// the unit of work handed to the transformer.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerTransformInput {
    pub transaction: LedgerTransaction,
    pub header: LedgerHeader,
}

/// Reads all transactions for the ledgers in [start, end] (inclusive on
/// both ends), in ledger-then-transaction order.
///
/// A negative `limit` means all input is processed; otherwise reading
/// stops once `limit` transactions have been collected, even mid-ledger.
pub fn read_ledger_range<B: LedgerBackend>(
    backend: &B,
    start: LedgerSequence,
    end: LedgerSequence,
    limit: i64,
) -> Result<Vec<LedgerTransformInput>, InputError> {
    backend.prepare_range(start, end)?;

    let mut inputs = Vec::new();

    for sequence in start..=end {
        let ledger = backend.get_ledger(sequence)?;

        for transaction in ledger.transactions {
            if limit >= 0 && inputs.len() as i64 >= limit {
                return Ok(inputs);
            }

            inputs.push(LedgerTransformInput {
                transaction,
                header: ledger.header,
            });
        }
    }

    Ok(inputs)
}
