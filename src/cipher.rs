//! # BlueFrog Payload Cipher
//!
//! Keyed nibble-substitution transform protecting most characteristic
//! payloads. The two permutation tables and the modular recurrence are
//! proprietary constants recovered from the machine firmware; no simpler
//! equivalent is known, so they are reproduced verbatim.
//!
//! The transform is an involution: the same function encodes writes and
//! decodes reads, and `transform(transform(b, k), k) == b` for every key
//! byte and buffer. It is total, pure, and length-preserving.

/// First substitution table of the obfuscation rounds.
const TABLE_1: [i64; 16] = [14, 4, 3, 2, 1, 13, 8, 11, 6, 15, 12, 7, 10, 5, 0, 9];

/// Second substitution table of the obfuscation rounds.
const TABLE_2: [i64; 16] = [10, 6, 13, 12, 14, 11, 1, 9, 15, 7, 0, 5, 3, 2, 4, 8];

/// One round of the nibble recurrence.
///
/// `count` is the running nibble index within the current call; it resets to
/// zero at the start of every buffer and is never shared across calls.
fn shuffle(nibble: u8, count: i64, key_hi: i64, key_lo: i64) -> u8 {
    let count_hi = count >> 4;
    let a = TABLE_1[(i64::from(nibble) + count + key_hi).rem_euclid(16) as usize];
    let b = TABLE_2[(a + key_lo + count_hi - count - key_hi).rem_euclid(16) as usize];
    let c = TABLE_1[(b + key_hi + count - key_lo - count_hi).rem_euclid(16) as usize];
    (c - count - key_hi).rem_euclid(16) as u8
}

/// Encode or decode a buffer under a one-byte key.
///
/// Processes the buffer as a stream of nibbles, high nibble of each byte
/// first, and reassembles the transformed nibbles pairwise into the output.
/// Output length always equals input length.
#[must_use]
pub fn transform(data: &[u8], key: u8) -> Vec<u8> {
    let key_hi = i64::from(key >> 4);
    let key_lo = i64::from(key & 0x0F);

    let mut out = Vec::with_capacity(data.len());
    let mut count: i64 = 0;
    for &byte in data {
        let hi = shuffle(byte >> 4, count, key_hi, key_lo);
        count += 1;
        let lo = shuffle(byte & 0x0F, count, key_hi, key_lo);
        count += 1;
        out.push((hi << 4) | lo);
    }
    out
}
