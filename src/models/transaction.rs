use serde::{Deserialize, Serialize};

use crate::models::{AccountId, Operation, OperationResult};
use crate::types::LedgerSequence;

/// A decoded transaction together with its execution results.
///
/// `results`, when present, is positionally aligned with `operations`;
/// it is absent for replays that never recorded execution (dry reads).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerTransaction {
    /// Default source account for every operation without an override.
    pub source_account: AccountId,
    pub operations: Vec<Operation>,
    pub results: Option<Vec<OperationResult>>,
}

/// Closing metadata of the ledger a transaction was applied in; passed
/// through for output record completeness, never transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerHeader {
    pub sequence: LedgerSequence,
    /// Close time as unix seconds.
    pub closed_at: i64,
}
