/// Number of stroops in one unit of the native asset.
pub const STROOP_SCALE: i64 = 10_000_000;

const DECIMAL_PLACES: usize = 7;

/// Converts a stroop-denominated integer to a decimal amount.
///
/// This is a deliberately lossy convenience rendering; consumers needing
/// exactness use the string form or the raw integer.
pub fn stroops_to_decimal(stroops: i64) -> f64 {
    stroops as f64 / STROOP_SCALE as f64
}

/// Renders a stroop-denominated integer as a fixed seven-decimal string,
/// preserving full integer precision for consumers that cannot hold the
/// value in a double.
pub fn stroops_to_string(stroops: i64) -> String {
    let sign = if stroops < 0 { "-" } else { "" };
    let abs = stroops.unsigned_abs();
    let integer = abs / STROOP_SCALE as u64;
    let fraction = abs % STROOP_SCALE as u64;
    format!("{}{}.{:0width$}", sign, integer, fraction, width = DECIMAL_PLACES)
}

/// Converts a rational price to its decimal approximation, rounded to
/// seven decimal places to match the precision the trade was quoted at.
pub fn price_to_decimal(numerator: i32, denominator: i32) -> f64 {
    let quotient = f64::from(numerator) / f64::from(denominator);
    (quotient * STROOP_SCALE as f64).round() / STROOP_SCALE as f64
}
