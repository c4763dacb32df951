use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrkeyError {
    #[error("Strkey error: encoded key has invalid length {0}")]
    InvalidLength(usize),
    #[error("Strkey error: invalid base32 character '{0}'")]
    InvalidCharacter(char),
    #[error("Strkey error: checksum mismatch")]
    ChecksumMismatch,
    #[error("Strkey error: expected version byte {expected:#04x}, found {found:#04x}")]
    VersionMismatch { expected: u8, found: u8 },
    #[error("Strkey error: unknown version byte {0:#04x}")]
    UnknownVersion(u8),
}
