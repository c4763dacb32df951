use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::types::{
    StrkeyError, VERSION_ACCOUNT, VERSION_HASH_X, VERSION_PRE_AUTH_TX, decode, decode_any, encode,
};

/// A 32-byte ed25519 public key identifying an account on the ledger.
///
/// Serializes as its canonical string-encoded address so fixtures and
/// output records stay human-readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId([u8; 32]);

impl AccountId {
    pub fn new(key: [u8; 32]) -> Self {
        AccountId(key)
    }

    /// Canonical string-encoded public address ('G...').
    pub fn address(&self) -> String {
        encode(VERSION_ACCOUNT, &self.0)
    }

    pub fn from_address(address: &str) -> Result<Self, StrkeyError> {
        decode(VERSION_ACCOUNT, address).map(AccountId)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.address())
    }
}

impl Serialize for AccountId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.address())
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let address = String::deserialize(deserializer)?;
        AccountId::from_address(&address).map_err(de::Error::custom)
    }
}

/// A key authorized to sign for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignerKey {
    Ed25519([u8; 32]),
    PreAuthTx([u8; 32]),
    HashX([u8; 32]),
}

impl SignerKey {
    /// Canonical string encoding; the leading character identifies the
    /// key flavor ('G', 'T', or 'X').
    pub fn address(&self) -> String {
        match self {
            SignerKey::Ed25519(key) => encode(VERSION_ACCOUNT, key),
            SignerKey::PreAuthTx(hash) => encode(VERSION_PRE_AUTH_TX, hash),
            SignerKey::HashX(hash) => encode(VERSION_HASH_X, hash),
        }
    }

    pub fn from_address(address: &str) -> Result<Self, StrkeyError> {
        let (version, payload) = decode_any(address)?;

        match version {
            VERSION_ACCOUNT => Ok(SignerKey::Ed25519(payload)),
            VERSION_PRE_AUTH_TX => Ok(SignerKey::PreAuthTx(payload)),
            VERSION_HASH_X => Ok(SignerKey::HashX(payload)),
            unknown => Err(StrkeyError::UnknownVersion(unknown)),
        }
    }
}

impl Serialize for SignerKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.address())
    }
}

impl<'de> Deserialize<'de> for SignerKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let address = String::deserialize(deserializer)?;
        SignerKey::from_address(&address).map_err(de::Error::custom)
    }
}

/// A signer entry on an account: a key plus its voting weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
    pub key: SignerKey,
    pub weight: u32,
}
