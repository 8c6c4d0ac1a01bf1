//! 512-bit fixed-width big-endian integer.
//!
//! Used for 64-byte BLAKE2b digests, which the signature scheme reads as
//! unsigned big-endian integers.

use num_bigint::BigUint;
use std::fmt::{Display, Formatter, Result};

/// Fixed-size 512-bit unsigned integer stored as 64 big-endian bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U512(pub(crate) [u8; 64]);

impl U512 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 64]);

    /// Interprets the 64 bytes as an unsigned big-endian integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }

    /// The most significant half, bytes `0..32`.
    pub fn high(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.0[..32]);
        out
    }

    /// The least significant half, bytes `32..64`.
    pub fn low(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.0[32..]);
        out
    }
}

/// Manual `Default`, arrays longer than 32 elements do not derive it.
impl Default for U512 {
    fn default() -> Self {
        U512::ZERO
    }
}

impl From<[u8; 64]> for U512 {
    fn from(value: [u8; 64]) -> Self {
        U512(value)
    }
}

impl From<U512> for [u8; 64] {
    fn from(value: U512) -> Self {
        value.0
    }
}

impl Display for U512 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:02X}", byte)?;
        }

        Ok(())
    }
}
