//! Fixed curve parameters.
//!
//! The curve is the twisted Edwards curve
//!
//! ```text
//! −x² + y² = 1 + d·x²·y²   over 𝔽_q,  q = 2²⁵⁵ − 19
//! ```
//!
//! with `d = −121665 / 121666`, base point `B = (Bx, 4/5)` of prime order
//! `ℓ = 2²⁵² + 27742317777372353535851937790883648493`, and cofactor 8.
//!
//! The values are built once into an immutable [`CurveParams`] and shared
//! read-only for the lifetime of the process.

use std::sync::LazyLock;

use num_bigint::BigUint;

use super::point::AffinePoint;

/// Bit width of field elements and encoded scalars.
pub const BITS: u32 = 256;

/// Curve cofactor, cleared on both sides of the verification equation.
pub const COFACTOR: u32 = 8;

const Q_BYTES: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xed,
];

const D_BYTES: [u8; 32] = [
    0x52, 0x03, 0x6c, 0xee, 0x2b, 0x6f, 0xfe, 0x73, 0x8c, 0xc7, 0x40, 0x79, 0x77, 0x79, 0xe8, 0x98,
    0x00, 0x70, 0x0a, 0x4d, 0x41, 0x41, 0xd8, 0xab, 0x75, 0xeb, 0x4d, 0xca, 0x13, 0x59, 0x78, 0xa3,
];

const L_BYTES: [u8; 32] = [
    0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x14, 0xde, 0xf9, 0xde, 0xa2, 0xf7, 0x9c, 0xd6, 0x58, 0x12, 0x63, 0x1a, 0x5c, 0xf5, 0xd3, 0xed,
];

const BX_BYTES: [u8; 32] = [
    0x21, 0x69, 0x36, 0xd3, 0xcd, 0x6e, 0x53, 0xfe, 0xc0, 0xa4, 0xe2, 0x31, 0xfd, 0xd6, 0xdc, 0x5c,
    0x69, 0x2c, 0xc7, 0x60, 0x95, 0x25, 0xa7, 0xb2, 0xc9, 0x56, 0x2d, 0x60, 0x8f, 0x25, 0xd5, 0x1a,
];

const BY_BYTES: [u8; 32] = [
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x58,
];

/// Immutable description of the curve.
#[derive(Clone, Debug)]
pub struct CurveParams {
    /// Field prime `q`.
    pub q: BigUint,
    /// Curve coefficient `d`, a non-square modulo `q`.
    pub d: BigUint,
    /// Prime order `ℓ` of the base point.
    pub l: BigUint,
    /// Base point `B`.
    pub base: AffinePoint,
}

impl CurveParams {
    fn build() -> Self {
        Self {
            q: BigUint::from_bytes_be(&Q_BYTES),
            d: BigUint::from_bytes_be(&D_BYTES),
            l: BigUint::from_bytes_be(&L_BYTES),
            base: AffinePoint::new(
                BigUint::from_bytes_be(&BX_BYTES),
                BigUint::from_bytes_be(&BY_BYTES),
            ),
        }
    }
}

static CURVE: LazyLock<CurveParams> = LazyLock::new(CurveParams::build);

/// Returns the process-wide curve parameters.
#[inline]
pub fn curve() -> &'static CurveParams {
    &CURVE
}
