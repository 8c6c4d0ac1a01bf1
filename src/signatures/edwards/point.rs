//! Point arithmetic on the twisted Edwards curve.
//!
//! Two representations are provided:
//!
//! - [`AffinePoint`] `(x, y)`: the canonical form, used for encoding,
//!   comparison, and the curve-membership check. Each addition costs two
//!   modular inversions.
//! - [`ExtendedPoint`] `(X : Y : T : Z)` with `x = X/Z`, `y = Y/Z` and
//!   `x·y = T/Z`: addition needs no inversion, so a whole scalar
//!   multiplication is carried out in this form and converted back with a
//!   single inversion of `Z` at the end.
//!
//! Both implement [`PointAdder`], which lets [`multiply`] run the same
//! double-and-add loop over either representation.
//!
//! The addition law is the unified one for `a = −1`. Because `d` is not a
//! square modulo `q` it is complete: no input pair needs special handling,
//! including doubling and the identity.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::modular::inverse;
use super::params::curve;

/// A point in affine coordinates.
///
/// Coordinates are kept reduced modulo `q`, which makes derived equality
/// exact.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AffinePoint {
    pub x: BigUint,
    pub y: BigUint,
}

impl AffinePoint {
    /// Builds a point from already-reduced coordinates. No curve check is
    /// performed.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /// The neutral element `(0, 1)`.
    pub fn identity() -> Self {
        Self::new(BigUint::zero(), BigUint::one())
    }

    pub fn is_on_curve(&self) -> bool {
        is_on_curve(self)
    }

    pub fn to_extended(&self) -> ExtendedPoint {
        to_extended(self)
    }
}

/// A point in extended twisted Edwards coordinates.
///
/// Any non-zero multiple of `(X, Y, T, Z)` denotes the same point, so
/// equality is projective rather than structural.
#[derive(Clone, Debug)]
pub struct ExtendedPoint {
    pub x: BigUint,
    pub y: BigUint,
    pub t: BigUint,
    pub z: BigUint,
}

impl ExtendedPoint {
    pub fn to_affine(&self) -> AffinePoint {
        from_extended(self)
    }
}

impl PartialEq for ExtendedPoint {
    fn eq(&self, other: &Self) -> bool {
        let q = &curve().q;

        (&self.x * &other.z) % q == (&other.x * &self.z) % q
            && (&self.y * &other.z) % q == (&other.y * &self.z) % q
    }
}

impl Eq for ExtendedPoint {}

/// Group law used by [`multiply`].
pub trait PointAdder: Clone {
    /// The neutral element in this representation.
    fn identity() -> Self;

    fn add_point(&self, other: &Self) -> Self;
}

impl PointAdder for AffinePoint {
    fn identity() -> Self {
        AffinePoint::identity()
    }

    fn add_point(&self, other: &Self) -> Self {
        add(self, other)
    }
}

impl PointAdder for ExtendedPoint {
    fn identity() -> Self {
        to_extended(&AffinePoint::identity())
    }

    fn add_point(&self, other: &Self) -> Self {
        add_extended(self, other)
    }
}

#[inline]
fn sub_mod(a: &BigUint, b: &BigUint, q: &BigUint) -> BigUint {
    // Operands are reduced, so `a + q − b` never underflows.
    (a + q - b) % q
}

/// Checks `−x² + y² ≡ 1 + d·x²·y² (mod q)`.
pub fn is_on_curve(p: &AffinePoint) -> bool {
    let c = curve();
    let q = &c.q;

    let xx = (&p.x * &p.x) % q;
    let yy = (&p.y * &p.y) % q;

    let lhs = sub_mod(&yy, &xx, q);
    let rhs = (BigUint::one() + &c.d * &xx * &yy) % q;

    lhs == rhs
}

/// Adds two affine points with the unified Edwards addition law.
///
/// ```text
/// x₃ = (x₁y₂ + y₁x₂) / (1 + d·x₁x₂y₁y₂)
/// y₃ = (y₁y₂ + x₁x₂) / (1 − d·x₁x₂y₁y₂)
/// ```
pub fn add(p: &AffinePoint, q: &AffinePoint) -> AffinePoint {
    let c = curve();
    let m = &c.q;

    let den_factor = (&c.d * &p.x * &p.y * &q.x * &q.y) % m;
    let x_num = (&p.x * &q.y + &p.y * &q.x) % m;
    let y_num = (&p.x * &q.x + &p.y * &q.y) % m;

    let x_den = (BigUint::one() + &den_factor) % m;
    let y_den = sub_mod(&BigUint::one(), &den_factor, m);

    AffinePoint::new(
        (x_num * inverse(&x_den, m)) % m,
        (y_num * inverse(&y_den, m)) % m,
    )
}

/// Lifts an affine point into extended coordinates with `Z = 1`.
pub fn to_extended(p: &AffinePoint) -> ExtendedPoint {
    let q = &curve().q;

    ExtendedPoint {
        x: p.x.clone(),
        y: p.y.clone(),
        t: (&p.x * &p.y) % q,
        z: BigUint::one(),
    }
}

/// Projects back to affine coordinates with one inversion of `Z`.
pub fn from_extended(p: &ExtendedPoint) -> AffinePoint {
    let q = &curve().q;
    let z_inv = inverse(&p.z, q);

    AffinePoint::new((&p.x * &z_inv) % q, (&p.y * &z_inv) % q)
}

/// Adds two points in extended coordinates without any inversion
/// (Hisil–Wong–Carter–Dawson, unified formula for `a = −1`).
pub fn add_extended(p: &ExtendedPoint, q: &ExtendedPoint) -> ExtendedPoint {
    let c = curve();
    let m = &c.q;

    let a = (&p.x * &q.x) % m;
    let b = (&p.y * &q.y) % m;
    let cc = (&c.d * &p.t * &q.t) % m;
    let dd = (&p.z * &q.z) % m;

    let sum = ((&p.x + &p.y) * (&q.x + &q.y)) % m;
    let e = (sum + m + m - &a - &b) % m;
    let f = sub_mod(&dd, &cc, m);
    let g = (&dd + &cc) % m;
    // b − a·A with a = −1.
    let h = (&b + &a) % m;

    ExtendedPoint {
        x: (&e * &f) % m,
        y: (&g * &h) % m,
        t: (&e * &h) % m,
        z: (&f * &g) % m,
    }
}

/// Scalar multiplication by double-and-add, most significant bit first.
///
/// `n = 0` yields the identity and `n = 1` returns `p` unchanged. The loop
/// is iterative, so stack usage does not grow with the bit length of `n`.
pub fn multiply<P: PointAdder>(p: &P, n: &BigUint) -> P {
    if n.is_zero() {
        return P::identity();
    }
    if n.is_one() {
        return p.clone();
    }

    let mut acc = p.clone();
    for i in (0..n.bits() - 1).rev() {
        acc = acc.add_point(&acc);
        if n.bit(i) {
            acc = acc.add_point(p);
        }
    }

    acc
}

/// Multiplies an affine point through extended coordinates, paying a single
/// inversion for the whole chain.
pub fn fast_multiply(p: &AffinePoint, n: &BigUint) -> AffinePoint {
    from_extended(&multiply(&to_extended(p), n))
}
