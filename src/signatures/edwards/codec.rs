//! Canonical 32-byte point encoding.
//!
//! A point is encoded as the big-endian bytes of `y`, with bit 255 set when
//! `x` lies in the upper half of the residues (`x > q − x`). Since
//! `q < 2²⁵⁵`, the top bit of `y` is always free to carry that sign.

use num_bigint::BigUint;
use num_traits::Zero;

use super::modular::{inverse, modular_sqrt};
use super::params::curve;
use super::point::AffinePoint;
use crate::error::EccError;
use crate::primitives::U256;

/// Encodes a point with reduced coordinates.
pub fn encode_point(p: &AffinePoint) -> [u8; 32] {
    let q = &curve().q;
    let encoded = U256::from_biguint_wrapping(&p.y);

    if p.x > q - &p.x {
        encoded.with_top_bit().to_bytes()
    } else {
        encoded.to_bytes()
    }
}

/// Recovers one `x` for the given `y`, from
/// `x² = (y² − 1) / (d·y² + 1) mod q`.
///
/// Returns `None` when the right-hand side is not a square, i.e. no point
/// with this `y` exists. The other solution is `q − x`.
pub fn x_from_y(y: &BigUint) -> Option<BigUint> {
    let c = curve();
    let q = &c.q;

    let yy = (y * y) % q;
    let num = (&yy + q - 1u32) % q;
    let den = (&c.d * &yy + 1u32) % q;

    modular_sqrt(&((num * inverse(&den, q)) % q), q)
}

/// Decodes a 32-byte point encoding.
///
/// # Errors
///
/// [`EccError::InvalidPointEncoding`] when `y` is not below `q`, when no
/// `x` exists for `y`, or when the sign bit is set but `x = 0`.
pub fn decode_point(bytes: &[u8; 32]) -> Result<AffinePoint, EccError> {
    let q = &curve().q;

    let encoded = U256::from(*bytes);
    let sign = encoded.top_bit();
    let y = encoded.without_top_bit().to_biguint();

    if &y >= q {
        return Err(EccError::InvalidPointEncoding);
    }

    let mut x = x_from_y(&y).ok_or(EccError::InvalidPointEncoding)?;

    if x.is_zero() && sign {
        return Err(EccError::InvalidPointEncoding);
    }
    if (x > q - &x) != sign {
        x = q - &x;
    }

    Ok(AffinePoint::new(x, y))
}
