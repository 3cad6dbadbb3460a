//! Geohash base-32 alphabet.
//!
//! Digits followed by lowercase letters, without `a`, `i`, `l` and `o`.
//! Five bits per character, most significant character first.

use crate::error::{GeohashError, Result};

/// The 32 geohash symbols in value order.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Bits carried by one character.
pub const BITS_PER_CHAR: usize = 5;

/// Longest hash the 64-bit accumulator supports.
pub const MAX_HASH_LEN: usize = 12;

const CHAR_MASK: u64 = 0x1F;
const INVALID: u8 = u8::MAX;

/// ASCII byte -> symbol value, `INVALID` for everything outside the alphabet.
const DECODE_TABLE: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Symbol value for a character, if it belongs to the alphabet.
#[inline]
pub fn symbol_value(ch: char) -> Option<u64> {
    if !ch.is_ascii() {
        return None;
    }
    match DECODE_TABLE[ch as usize] {
        INVALID => None,
        value => Some(u64::from(value)),
    }
}

/// Render the low `len * 5` bits of `bits` as `len` characters.
///
/// `len` must be within `1..=MAX_HASH_LEN`.
///
/// # Examples
///
/// ```
/// use spatio_geohash::compute::base32::to_base32;
///
/// assert_eq!(to_base32(0b01001, 1), "9");
/// assert_eq!(to_base32(0, 5), "00000");
/// ```
pub fn to_base32(bits: u64, len: usize) -> String {
    debug_assert!((1..=MAX_HASH_LEN).contains(&len));

    let top_shift = u64::BITS as usize - BITS_PER_CHAR;
    let mut word = bits << (u64::BITS as usize - len * BITS_PER_CHAR);

    let mut buf = [0u8; MAX_HASH_LEN];
    for slot in buf.iter_mut().take(len) {
        let index = (word >> top_shift) & CHAR_MASK;
        *slot = ALPHABET[index as usize];
        word <<= BITS_PER_CHAR;
    }

    buf[..len].iter().map(|&b| char::from(b)).collect()
}

/// Parse a hash into its bits and character count.
///
/// Lookup is case-sensitive; any character outside [`ALPHABET`] fails with
/// [`GeohashError::InvalidHashFormat`].
pub fn from_base32(hash: &str) -> Result<(u64, usize)> {
    let mut bits: u64 = 0;

    for ch in hash.chars() {
        let value = symbol_value(ch).ok_or(GeohashError::InvalidHashFormat(ch))?;
        bits = (bits << BITS_PER_CHAR) | value;
    }

    Ok((bits, hash.len()))
}
