//! 256-bit fixed-width big-endian integer.
//!
//! `U256` is the wire form of every 32-byte quantity in the crate: field
//! elements, encoded points, and signature scalars. It is a value type, not
//! an arithmetic type; arithmetic happens on `BigUint` and crosses into this
//! type only at the byte boundary.

use num_bigint::BigUint;
use std::fmt::{Display, Formatter, Result};

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as 32 bytes in **big-endian** order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256(pub(crate) [u8; 32]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Encodes `value mod 2²⁵⁶` as exactly 32 big-endian bytes, left-padded
    /// with zeros.
    ///
    /// Callers pass values already reduced below a modulus smaller than
    /// 2²⁵⁶, for which no bits are lost.
    pub fn from_biguint_wrapping(value: &BigUint) -> Self {
        let mut out = [0u8; 32];

        for (slot, byte) in out.iter_mut().rev().zip(value.to_bytes_le()) {
            *slot = byte;
        }

        U256(out)
    }

    /// Interprets the 32 bytes as an unsigned big-endian integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }

    /// Returns bit 255, the most significant bit.
    #[inline]
    pub fn top_bit(&self) -> bool {
        self.0[0] & 0x80 != 0
    }

    /// Returns a copy with bit 255 cleared.
    #[inline]
    pub fn without_top_bit(mut self) -> Self {
        self.0[0] &= 0x7f;
        self
    }

    /// Returns a copy with bit 255 set.
    #[inline]
    pub fn with_top_bit(mut self) -> Self {
        self.0[0] |= 0x80;
        self
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256(value)
    }
}

impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for U256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for U256 {
    /// Formats the value as a colon-separated hexadecimal string.
    ///
    /// Example:
    /// `00:1F:A4:...`
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
