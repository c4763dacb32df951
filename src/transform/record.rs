use serde::Serialize;

use crate::models::{AccountId, Asset};
use crate::types::ApplicationOrder;

/// One normalized output record per input operation, suitable for
/// serialization to row-oriented interchange formats.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OperationRecord {
    /// String-encoded address of the effective source account.
    pub source_account: String,
    /// Small integer code of the operation kind.
    #[serde(rename = "type")]
    pub type_code: i32,
    /// 1-based position of the operation within its transaction.
    pub application_order: ApplicationOrder,
    pub details: OperationDetails,
}

/// Kind-discriminated details payload. Only the fields relevant to the
/// matched kind are populated; everything else stays absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OperationDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub into: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_asset_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_asset_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_asset_issuer: Option<String>,
    /// Amount the source actually spent, resolved from the execution
    /// result of a strict-receive path payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_max: Option<f64>,
    /// Fixed-decimal string to avoid numeric overflow in consumers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<AssetRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_r: Option<PriceRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_asset_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_asset_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_asset_issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buying_asset_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buying_asset_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buying_asset_issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflation_dest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_flags: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_flags_string: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_flags: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_flags_string: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_key_weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub med_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer_weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trustor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trustee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorize: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Base64-encoded data entry value; absent when the entry is being
    /// deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Decimal string to avoid numeric overflow in consumers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bump_to: Option<String>,
}

impl OperationDetails {
    pub(crate) fn set_asset(&mut self, asset: &Asset) {
        let (asset_type, code, issuer) = asset_triple(asset);
        self.asset_type = Some(asset_type);
        self.asset_code = code;
        self.asset_issuer = issuer;
    }

    pub(crate) fn set_source_asset(&mut self, asset: &Asset) {
        let (asset_type, code, issuer) = asset_triple(asset);
        self.source_asset_type = Some(asset_type);
        self.source_asset_code = code;
        self.source_asset_issuer = issuer;
    }

    pub(crate) fn set_selling_asset(&mut self, asset: &Asset) {
        let (asset_type, code, issuer) = asset_triple(asset);
        self.selling_asset_type = Some(asset_type);
        self.selling_asset_code = code;
        self.selling_asset_issuer = issuer;
    }

    pub(crate) fn set_buying_asset(&mut self, asset: &Asset) {
        let (asset_type, code, issuer) = asset_triple(asset);
        self.buying_asset_type = Some(asset_type);
        self.buying_asset_code = code;
        self.buying_asset_issuer = issuer;
    }
}

fn asset_triple(asset: &Asset) -> (String, Option<String>, Option<String>) {
    (
        asset.type_string().to_string(),
        asset.code().map(str::to_string),
        asset.issuer().map(AccountId::address),
    )
}

/// An asset rendered as the (type, code, issuer) triple; code and issuer
/// are absent for the native asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssetRecord {
    pub asset_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_issuer: Option<String>,
}

impl From<&Asset> for AssetRecord {
    fn from(asset: &Asset) -> Self {
        let (asset_type, asset_code, asset_issuer) = asset_triple(asset);
        AssetRecord {
            asset_type,
            asset_code,
            asset_issuer,
        }
    }
}

/// The exact rational form of a trade price, kept alongside the rounded
/// decimal for consumers needing exactness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRecord {
    pub numerator: i32,
    pub denominator: i32,
}
