use crate::error::HashIdError;

pub const BASE36_RADIX: u32 = 36;

/// The 36-symbol digit alphabet, index = digit value. This exact
/// ordering is the interop contract with previously issued hashes and
/// must never change.
pub(crate) const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

const INVALID: i8 = -1;

/// Inverse of [`ALPHABET`]: byte -> digit value, `INVALID` for bytes
/// outside the alphabet. Built at compile time, so decode never races
/// on initialization.
const LOOKUP: [i8; 256] = build_lookup();

const fn build_lookup() -> [i8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as i8;
        i += 1;
    }
    table
}

/// Lowercase (when `insensitive`) and drop every byte outside the
/// alphabet. Tolerant parsing is part of the contract: malformed input
/// degrades to its valid digits rather than erroring.
pub(crate) fn sanitize(hash: &str, insensitive: bool) -> String {
    hash.bytes()
        .map(|b| if insensitive { b.to_ascii_lowercase() } else { b })
        .filter(|&b| LOOKUP[b as usize] != INVALID)
        .map(char::from)
        .collect()
}

/// Codec between non-negative native integers and base-36 strings.
#[derive(Debug, Copy, Clone)]
pub struct Base36;

impl Base36 {
    /// Encode a non-negative number as a minimal lowercase base-36
    /// string. `0` encodes to `"0"`.
    pub fn encode(number: i64) -> Result<String, HashIdError> {
        if number < 0 {
            return Err(HashIdError::NegativeNumber(number));
        }

        let mut n = number as u64;
        let mut digits = Vec::with_capacity(13); // log_36(2^63) ≈ 12.2
        while n > 0 {
            digits.push(ALPHABET[(n % BASE36_RADIX as u64) as usize]);
            n /= BASE36_RADIX as u64;
        }
        if digits.is_empty() {
            digits.push(ALPHABET[0]);
        }
        digits.reverse();

        Ok(String::from_utf8(digits).expect("alphabet is ASCII"))
    }

    /// Decode a base-36 string, case-insensitively. Non-alphabet
    /// characters are dropped; an input with no valid digits yields 0.
    pub fn decode(hash: &str) -> i64 {
        Self::decode_with(hash, true)
    }

    /// Decode with explicit case handling. With `insensitive == false`
    /// uppercase letters are not lowercased and are therefore filtered
    /// out like any other non-alphabet character.
    ///
    /// Values wider than an `i64` wrap (two's complement).
    pub fn decode_with(hash: &str, insensitive: bool) -> i64 {
        let hash = sanitize(hash, insensitive);

        let mut result: i64 = 0;
        for byte in hash.bytes() {
            result = result
                .wrapping_mul(BASE36_RADIX as i64)
                .wrapping_add(LOOKUP[byte as usize] as i64);
        }
        result
    }
}
