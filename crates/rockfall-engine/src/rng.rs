//! Portable episode RNG.
//!
//! The per-episode RNG is a bare xorshift64 seeded through splitmix64,
//! so rollouts reproduce bit-for-bit across platforms and builds. The
//! heavier `rand` stack is reserved for Zobrist table construction,
//! where a full generator is warranted and per-tick cost is irrelevant.

/// Derive a well-mixed xorshift seed from an arbitrary seed value.
pub fn splitmix64(seed: u64) -> u64 {
    let mut result = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    result = (result ^ (result >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    result = (result ^ (result >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    result ^ (result >> 31)
}

/// Advance the xorshift64 state and return the next value.
pub fn xorshift64(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *state = x;
    x
}
