use serde::{Deserialize, Serialize};

use crate::models::AccountId;

/// Canonical identification of a fungible asset: the native asset, or an
/// issued asset with a short (up to 4 characters) or long (up to 12
/// characters) code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "asset_type")]
pub enum Asset {
    Native,
    CreditAlphanum4 { code: String, issuer: AccountId },
    CreditAlphanum12 { code: String, issuer: AccountId },
}

impl Asset {
    /// Builds an issued asset, choosing the short or long code flavor by
    /// code length.
    pub fn issued(code: &str, issuer: AccountId) -> Self {
        if code.len() <= 4 {
            Asset::CreditAlphanum4 {
                code: code.to_string(),
                issuer,
            }
        } else {
            Asset::CreditAlphanum12 {
                code: code.to_string(),
                issuer,
            }
        }
    }

    pub fn type_string(&self) -> &'static str {
        match self {
            Asset::Native => "native",
            Asset::CreditAlphanum4 { .. } => "credit_alphanum4",
            Asset::CreditAlphanum12 { .. } => "credit_alphanum12",
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Asset::Native => None,
            Asset::CreditAlphanum4 { code, .. } | Asset::CreditAlphanum12 { code, .. } => {
                Some(code)
            }
        }
    }

    pub fn issuer(&self) -> Option<&AccountId> {
        match self {
            Asset::Native => None,
            Asset::CreditAlphanum4 { issuer, .. } | Asset::CreditAlphanum12 { issuer, .. } => {
                Some(issuer)
            }
        }
    }
}
