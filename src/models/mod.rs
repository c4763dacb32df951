mod account;
mod asset;
mod operation;
mod result;
#[cfg(test)]
mod tests;
mod transaction;

pub use account::{AccountId, Signer, SignerKey};
pub use asset::Asset;
pub use operation::{
    AllowTrustOp, BumpSequenceOp, ChangeTrustOp, CreateAccountOp, CreatePassiveSellOfferOp,
    ManageBuyOfferOp, ManageDataOp, ManageSellOfferOp, Operation, OperationBody,
    PathPaymentStrictReceiveOp, PathPaymentStrictSendOp, PaymentOp, Price, SetOptionsOp,
};
pub use result::{
    ClaimedOffer, OperationResult, OperationResultBody, OperationResultCode, PathPaymentResult,
    SimplePaymentResult,
};
pub use transaction::{LedgerHeader, LedgerTransaction};
