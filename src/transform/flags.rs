/// Account/trust-line authorization flags, in ascending bit order so the
/// decoded lists come out deterministic.
const ACCOUNT_FLAGS: [(u32, &str); 3] = [
    (0x1, "auth_required"),
    (0x2, "auth_revocable"),
    (0x4, "auth_immutable"),
];

/// Decodes a flag bitmask into the parallel lists of set-bit values and
/// their canonical lowercase names.
pub fn decode_account_flags(mask: u32) -> (Vec<u32>, Vec<String>) {
    let mut values = Vec::new();
    let mut names = Vec::new();

    for (bit, name) in ACCOUNT_FLAGS {
        if mask & bit != 0 {
            values.push(bit);
            names.push(name.to_string());
        }
    }

    (values, names)
}
