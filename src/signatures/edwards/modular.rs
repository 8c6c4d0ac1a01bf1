//! Modular arithmetic over prime moduli.
//!
//! These helpers are generic in the modulus so they can be exercised on
//! small primes as well as on the curve field. All exponent arithmetic is
//! integer arithmetic on `BigUint`; there is no floating-point path.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Multiplicative inverse of `a` modulo `n` by the extended Euclidean
/// algorithm.
///
/// By convention `inverse(0, n) == 0`. Callers that can reach a zero
/// denominator check for it themselves; the result is only meaningful when
/// `gcd(a, n) == 1`.
pub fn inverse(a: &BigUint, n: &BigUint) -> BigUint {
    let a = a % n;
    if a.is_zero() {
        return BigUint::zero();
    }

    let modulus = BigInt::from(n.clone());

    let (mut lm, mut hm) = (BigInt::one(), BigInt::zero());
    let (mut low, mut high) = (BigInt::from(a), modulus.clone());

    while low > BigInt::one() {
        let r = &high / &low;
        let nm = &hm - &lm * &r;
        let new = &high - &low * &r;

        hm = lm;
        lm = nm;
        high = low;
        low = new;
    }

    // `mod_floor` is non-negative for a positive modulus.
    lm.mod_floor(&modulus).into_parts().1
}

/// Legendre symbol `(a | p)` by Euler's criterion.
///
/// Returns `1` if `a` is a non-zero quadratic residue, `-1` if it is a
/// non-residue and `0` if `p` divides `a`. `p` must be an odd prime.
pub fn legendre_symbol(a: &BigUint, p: &BigUint) -> i8 {
    let exponent = (p - 1u32) >> 1u32;
    let ls = a.modpow(&exponent, p);

    if ls.is_zero() {
        0
    } else if ls == p - 1u32 {
        -1
    } else {
        1
    }
}

/// Square root of `a` modulo the prime `p` (Tonelli–Shanks).
///
/// Returns `Some(x)` with `x² ≡ a (mod p)`; `p − x` is the other root.
/// Returns `None` when `a` is a quadratic non-residue. A zero input yields
/// `Some(0)`, which is distinct from the no-root case.
pub fn modular_sqrt(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let a = a % p;

    if a.is_zero() {
        return Some(a);
    }
    if *p == BigUint::from(2u32) {
        return Some(a);
    }
    if legendre_symbol(&a, p) != 1 {
        return None;
    }
    // p ≡ 3 (mod 4)
    if p.bit(0) && p.bit(1) {
        return Some(a.modpow(&((p + 1u32) >> 2u32), p));
    }

    // p − 1 = s·2^e with s odd.
    let mut s = p - 1u32;
    let mut e = 0u64;
    while s.is_even() {
        s >>= 1u32;
        e += 1;
    }

    let mut n = BigUint::from(2u32);
    while legendre_symbol(&n, p) != -1 {
        n += 1u32;
    }

    // Invariant: x² ≡ a·b (mod p). `g` holds successive powers of `n` and
    // `r` the exponent bound, which strictly decreases each round.
    let mut x = a.modpow(&((&s + 1u32) >> 1u32), p);
    let mut b = a.modpow(&s, p);
    let mut g = n.modpow(&s, p);
    let mut r = e;

    loop {
        let mut t = b.clone();
        let mut m = 0u64;
        while m < r && !t.is_one() {
            t = (&t * &t) % p;
            m += 1;
        }

        if m == 0 {
            return Some(x);
        }
        if m == r {
            // Only reachable when `p` is not prime.
            return None;
        }

        let gs = g.modpow(&(BigUint::one() << (r - m - 1)), p);
        g = (&gs * &gs) % p;
        x = (x * &gs) % p;
        b = (b * &g) % p;
        r = m;
    }
}
