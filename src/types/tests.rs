use super::{
    STROOP_SCALE, StrkeyError, VERSION_ACCOUNT, VERSION_HASH_X, VERSION_PRE_AUTH_TX, decode,
    decode_any, encode, price_to_decimal, stroops_to_decimal, stroops_to_string,
};
use anyhow::Result;

const ZERO_KEY_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

#[test]
fn test_strkey_encodes_known_zero_key_vector() {
    assert_eq!(encode(VERSION_ACCOUNT, &[0u8; 32]), ZERO_KEY_ADDRESS);
}

#[test]
fn test_strkey_round_trips_all_version_bytes() -> Result<()> {
    let payload = [0xA5u8; 32];

    for version in [VERSION_ACCOUNT, VERSION_PRE_AUTH_TX, VERSION_HASH_X] {
        let encoded = encode(version, &payload);

        assert_eq!(encoded.len(), 56);
        assert_eq!(decode(version, &encoded)?, payload);
        assert_eq!(decode_any(&encoded)?, (version, payload));
    }

    Ok(())
}

#[test]
fn test_strkey_rejects_corrupted_input() {
    let encoded = encode(VERSION_ACCOUNT, &[7u8; 32]);

    // Flip one payload character so the checksum no longer matches.
    let mut corrupted = encoded.clone().into_bytes();
    corrupted[10] = if corrupted[10] == b'A' { b'B' } else { b'A' };
    let corrupted = String::from_utf8(corrupted).unwrap();

    assert_eq!(decode_any(&corrupted), Err(StrkeyError::ChecksumMismatch));
    assert_eq!(decode_any(&encoded[..55]), Err(StrkeyError::InvalidLength(55)));

    let mut lowered = encoded.clone().into_bytes();
    lowered[3] = b'a';
    let lowered = String::from_utf8(lowered).unwrap();

    assert_eq!(decode_any(&lowered), Err(StrkeyError::InvalidCharacter('a')));
}

#[test]
fn test_strkey_rejects_wrong_version_byte() {
    let encoded = encode(VERSION_PRE_AUTH_TX, &[1u8; 32]);

    assert_eq!(
        decode(VERSION_ACCOUNT, &encoded),
        Err(StrkeyError::VersionMismatch {
            expected: VERSION_ACCOUNT,
            found: VERSION_PRE_AUTH_TX
        })
    );
}

#[test]
fn test_stroop_scaling_matches_expected_decimals() {
    assert_eq!(stroops_to_decimal(25000000), 2.5);
    assert_eq!(stroops_to_decimal(350000000), 35.0);
    assert_eq!(stroops_to_decimal(8946764349), 894.6764349);
    assert_eq!(stroops_to_decimal(1598182), 0.1598182);
    assert_eq!(stroops_to_decimal(500000000000000000), 50000000000.0);
    assert_eq!(stroops_to_decimal(-25000000), -2.5);
    assert_eq!(stroops_to_decimal(0), 0.0);
}

#[test]
fn test_stroop_scaling_round_trips_exactly() {
    let samples: [i64; 8] = [
        0,
        1,
        -1,
        25000000,
        8946764349,
        4280460538,
        765860000,
        -8951495900,
    ];

    for stroops in samples {
        let rescaled = (stroops_to_decimal(stroops) * STROOP_SCALE as f64).round() as i64;

        assert_eq!(rescaled, stroops);
    }
}

#[test]
fn test_stroop_string_rendering_keeps_all_seven_decimals() {
    assert_eq!(stroops_to_string(4280460538), "428.0460538");
    assert_eq!(stroops_to_string(25000000), "2.5000000");
    assert_eq!(stroops_to_string(1), "0.0000001");
    assert_eq!(stroops_to_string(-4280460538), "-428.0460538");
    assert_eq!(stroops_to_string(0), "0.0000000");
}

#[test]
fn test_price_decimal_rounds_to_seven_places() {
    assert_eq!(price_to_decimal(128523, 250000), 0.514092);
    assert_eq!(price_to_decimal(99583200, 1257990000), 0.0791606);
    assert_eq!(price_to_decimal(635863285, 1818402817), 0.3496823);
}
