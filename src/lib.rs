//! Deterministic base-36 codec for numeric identifiers.
//!
//! [`Base36`] turns a non-negative integer into a compact lowercase
//! base-36 string and back. Decoding is deliberately tolerant: it
//! lowercases by default and silently drops anything outside the
//! alphabet, so a mangled identifier degrades instead of erroring.
//! [`BigBase36`] is the arbitrary-width variant for byte buffers that
//! do not fit a native integer.
//!
//! # Examples
//!
//! ```
//! use hashid::Base36;
//!
//! let hash = Base36::encode(1234567890)?;
//! assert_eq!(hash, "kf12oi");
//! assert_eq!(Base36::decode(&hash), 1234567890);
//! # Ok::<(), hashid::HashIdError>(())
//! ```

mod base36;
mod bigint;
mod error;

pub use base36::{BASE36_RADIX, Base36};
pub use bigint::BigBase36;
pub use error::HashIdError;
