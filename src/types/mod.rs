mod amounts;
mod errors;
mod strkey;
#[cfg(test)]
mod tests;

pub use amounts::{STROOP_SCALE, price_to_decimal, stroops_to_decimal, stroops_to_string};
pub use errors::StrkeyError;
pub use strkey::{VERSION_ACCOUNT, VERSION_HASH_X, VERSION_PRE_AUTH_TX, decode, decode_any, encode};

pub type LedgerSequence = u32;
pub type ApplicationOrder = i32;
