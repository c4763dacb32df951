use serde::{Deserialize, Serialize};

use crate::models::{AccountId, Asset, Signer};

/// A single decoded operation inside a transaction.
///
/// The source account is optional; an absent value means the operation
/// inherits the owning transaction's source account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub source_account: Option<AccountId>,
    pub body: OperationBody,
}

/// Tagged union over operation kind, carrying exactly one kind-specific
/// payload per variant.
///
/// `Unsupported` captures kind codes outside the supported set (including
/// negative ones) so that validation errors stay representable without
/// widening every other variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum OperationBody {
    CreateAccount(CreateAccountOp),
    Payment(PaymentOp),
    PathPaymentStrictReceive(PathPaymentStrictReceiveOp),
    ManageSellOffer(ManageSellOfferOp),
    CreatePassiveSellOffer(CreatePassiveSellOfferOp),
    SetOptions(SetOptionsOp),
    ChangeTrust(ChangeTrustOp),
    AllowTrust(AllowTrustOp),
    AccountMerge { destination: AccountId },
    Inflation,
    ManageData(ManageDataOp),
    BumpSequence(BumpSequenceOp),
    ManageBuyOffer(ManageBuyOfferOp),
    PathPaymentStrictSend(PathPaymentStrictSendOp),
    Unsupported { kind_code: i32 },
}

impl OperationBody {
    /// The small integer code identifying this operation kind in output
    /// records (and on the wire in the original protocol).
    pub fn kind_code(&self) -> i32 {
        match self {
            OperationBody::CreateAccount(_) => 0,
            OperationBody::Payment(_) => 1,
            OperationBody::PathPaymentStrictReceive(_) => 2,
            OperationBody::ManageSellOffer(_) => 3,
            OperationBody::CreatePassiveSellOffer(_) => 4,
            OperationBody::SetOptions(_) => 5,
            OperationBody::ChangeTrust(_) => 6,
            OperationBody::AllowTrust(_) => 7,
            OperationBody::AccountMerge { .. } => 8,
            OperationBody::Inflation => 9,
            OperationBody::ManageData(_) => 10,
            OperationBody::BumpSequence(_) => 11,
            OperationBody::ManageBuyOffer(_) => 12,
            OperationBody::PathPaymentStrictSend(_) => 13,
            OperationBody::Unsupported { kind_code } => *kind_code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAccountOp {
    pub destination: AccountId,
    pub starting_balance: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOp {
    pub destination: AccountId,
    pub asset: Asset,
    pub amount: i64,
}

/// Multi-hop payment where the destination amount is fixed; the source
/// amount is only known once the exchange path executes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPaymentStrictReceiveOp {
    pub send_asset: Asset,
    pub send_max: i64,
    pub destination: AccountId,
    pub destination_asset: Asset,
    pub destination_amount: i64,
    pub path: Vec<Asset>,
}

/// Multi-hop payment where the source amount is fixed; the delivered
/// amount is only known once the exchange path executes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPaymentStrictSendOp {
    pub send_asset: Asset,
    pub send_amount: i64,
    pub destination: AccountId,
    pub destination_asset: Asset,
    pub destination_min: i64,
    pub path: Vec<Asset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManageSellOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
    /// 0 creates a new offer; any other value updates or deletes an
    /// existing one.
    pub offer_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePassiveSellOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManageBuyOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub buy_amount: i64,
    pub price: Price,
    pub offer_id: i64,
}

/// Account settings update; every sub-field is independently optional and
/// only applied when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetOptionsOp {
    pub inflation_destination: Option<AccountId>,
    pub clear_flags: Option<u32>,
    pub set_flags: Option<u32>,
    pub master_weight: Option<u32>,
    pub low_threshold: Option<u32>,
    pub medium_threshold: Option<u32>,
    pub high_threshold: Option<u32>,
    pub home_domain: Option<String>,
    pub signer: Option<Signer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeTrustOp {
    pub line: Asset,
    pub limit: i64,
}

/// The trust asset carries only a code; its issuer is implicitly the
/// operation's source account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowTrustOp {
    pub trustor: AccountId,
    pub asset_code: String,
    pub authorize: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManageDataOp {
    pub name: String,
    /// An absent value deletes the data entry.
    pub value: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BumpSequenceOp {
    pub bump_to: i64,
}

/// A rational trade price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub numerator: i32,
    pub denominator: i32,
}
