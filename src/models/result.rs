use serde::{Deserialize, Serialize};

use crate::models::{AccountId, Asset};

/// The recorded outcome of one operation within a transaction's result
/// set, positionally aligned with the transaction's operation sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResult {
    pub code: OperationResultCode,
    /// Present only when `code` is `Inner` and the kind records a result
    /// the transformer consumes.
    pub result: Option<OperationResultBody>,
}

impl OperationResult {
    /// An outcome for a kind whose inner result the transformer never
    /// reads.
    pub fn empty() -> Self {
        OperationResult {
            code: OperationResultCode::Inner,
            result: None,
        }
    }
}

/// Outer result code: anything other than `Inner` means the operation
/// never executed and no per-kind result exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationResultCode {
    Inner,
    BadAuth,
    NoAccount,
    NotSupported,
}

/// Kind-specific inner results, carried only for the kinds whose output
/// fields depend on execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum OperationResultBody {
    PathPaymentStrictReceive(PathPaymentResult),
    PathPaymentStrictSend(PathPaymentResult),
}

/// Successful path payment execution: the offers claimed along the path,
/// in source-to-destination order, and the final hop's payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPaymentResult {
    pub offers: Vec<ClaimedOffer>,
    pub last: SimplePaymentResult,
}

impl PathPaymentResult {
    /// Amount the source account actually spent: what the first claimed
    /// offer bought from it, or the final delivery when the path was
    /// direct.
    pub fn send_amount(&self) -> i64 {
        self.offers
            .first()
            .map(|offer| offer.amount_bought)
            .unwrap_or(self.last.amount)
    }

    /// Amount actually delivered to the destination.
    pub fn delivered_amount(&self) -> i64 {
        self.last.amount
    }
}

/// One offer consumed while walking the exchange path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimedOffer {
    pub seller: AccountId,
    pub offer_id: i64,
    pub asset_sold: Asset,
    pub amount_sold: i64,
    pub asset_bought: Asset,
    pub amount_bought: i64,
}

/// The final payment made to the destination of a path payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplePaymentResult {
    pub destination: AccountId,
    pub asset: Asset,
    pub amount: i64,
}
