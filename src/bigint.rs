use num_bigint::BigUint;
use num_traits::Num;

use crate::base36::{BASE36_RADIX, sanitize};

/// Arbitrary-width companion to [`Base36`](crate::Base36) for values
/// that do not fit a native integer, such as 256-bit digests. The
/// buffer is read as a big-endian unsigned integer.
#[derive(Debug, Copy, Clone)]
pub struct BigBase36;

impl BigBase36 {
    /// Encode a big-endian byte buffer. Empty and all-zero buffers
    /// encode to `"0"`.
    pub fn encode(buf: &[u8]) -> String {
        BigUint::from_bytes_be(buf).to_str_radix(BASE36_RADIX)
    }

    /// Decode to big-endian bytes, case-insensitively, with the same
    /// tolerant filtering as the integer codec. An input with no valid
    /// digits yields `[0]`.
    pub fn decode(hash: &str) -> Vec<u8> {
        Self::decode_with(hash, true)
    }

    /// Decode with explicit case handling, see
    /// [`Base36::decode_with`](crate::Base36::decode_with).
    pub fn decode_with(hash: &str, insensitive: bool) -> Vec<u8> {
        let digits = sanitize(hash, insensitive);
        if digits.is_empty() {
            return vec![0];
        }

        BigUint::from_str_radix(&digits, BASE36_RADIX)
            .expect("sanitized input contains only base-36 digits")
            .to_bytes_be()
    }
}
