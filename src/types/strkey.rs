use crate::types::errors::StrkeyError;

/// Version byte for ed25519 public keys ('G' addresses).
pub const VERSION_ACCOUNT: u8 = 6 << 3;
/// Version byte for pre-authorized transaction hashes ('T' addresses).
pub const VERSION_PRE_AUTH_TX: u8 = 19 << 3;
/// Version byte for SHA-256 hash-x signers ('X' addresses).
pub const VERSION_HASH_X: u8 = 23 << 3;

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Length of an encoded 32-byte key: (1 + 32 + 2) bytes * 8 / 5 bits.
const ENCODED_LENGTH: usize = 56;

/// Encodes a 32-byte key as an unpadded base32 string over
/// `version || payload || crc16-xmodem(le)`.
pub fn encode(version: u8, payload: &[u8; 32]) -> String {
    let mut data = Vec::with_capacity(35);
    data.push(version);
    data.extend_from_slice(payload);
    let check = checksum(&data);
    data.extend_from_slice(&check.to_le_bytes());
    base32_encode(&data)
}

/// Decodes a string-encoded key, verifying length, checksum, and the
/// expected version byte.
pub fn decode(expected_version: u8, encoded: &str) -> Result<[u8; 32], StrkeyError> {
    let (version, payload) = decode_any(encoded)?;

    if version != expected_version {
        return Err(StrkeyError::VersionMismatch {
            expected: expected_version,
            found: version,
        });
    }

    Ok(payload)
}

/// Decodes a string-encoded key without fixing the version in advance,
/// returning the version byte alongside the payload.
pub fn decode_any(encoded: &str) -> Result<(u8, [u8; 32]), StrkeyError> {
    if encoded.len() != ENCODED_LENGTH {
        return Err(StrkeyError::InvalidLength(encoded.len()));
    }

    let data = base32_decode(encoded)?;
    let (body, check) = data.split_at(data.len() - 2);

    if checksum(body).to_le_bytes() != [check[0], check[1]] {
        return Err(StrkeyError::ChecksumMismatch);
    }

    let mut payload = [0u8; 32];
    payload.copy_from_slice(&body[1..]);

    Ok((body[0], payload))
}

fn base32_encode(data: &[u8]) -> String {
    let mut encoded = String::with_capacity(data.len().div_ceil(5) * 8);
    let mut buffer: u32 = 0;
    let mut bits = 0;

    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;

        while bits >= 5 {
            bits -= 5;
            encoded.push(ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
    }

    if bits > 0 {
        encoded.push(ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }

    encoded
}

fn base32_decode(encoded: &str) -> Result<Vec<u8>, StrkeyError> {
    let mut decoded = Vec::with_capacity(encoded.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits = 0;

    for character in encoded.chars() {
        let value = ALPHABET
            .iter()
            .position(|&symbol| symbol as char == character)
            .ok_or(StrkeyError::InvalidCharacter(character))?;

        buffer = (buffer << 5) | value as u32;
        bits += 5;

        if bits >= 8 {
            bits -= 8;
            decoded.push(((buffer >> bits) & 0xff) as u8);
        }
    }

    Ok(decoded)
}

/// CRC16-XModem: polynomial 0x1021, zero initial value.
fn checksum(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;

    for &byte in data {
        crc ^= u16::from(byte) << 8;

        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }

    crc
}
