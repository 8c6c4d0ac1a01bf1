//! Key derivation, signing, and verification.
//!
//! Every entry point is a pure function of its arguments: the secret scalar
//! and public point are recomputed from the 32-byte seed on each call, and
//! nothing is cached between calls.
//!
//! With `H` = BLAKE2b-512 and all byte strings read as big-endian integers:
//!
//! ```text
//! h  = H(seed)
//! a  = 2²⁵⁴ + (h[0..32] mod 2²⁵⁴), low three bits cleared
//! A  = a·B
//! r  = h[32..64]
//! R  = r·B
//! k  = H(enc(R) || enc(A) || M)
//! s  = (r + k·a) mod ℓ
//! σ  = enc(R) || s            (s left-padded to 32 bytes)
//! ```
//!
//! Verification accepts iff `8s·B == 8·R + 8k·A`, which clears any
//! small-subgroup component on either side.

use log::trace;
use num_bigint::BigUint;
use num_traits::One;

use super::codec::{decode_point, encode_point};
use super::params::{BITS, COFACTOR, curve};
use super::point::{AffinePoint, add, fast_multiply};
use crate::error::EccError;
use crate::hash::blake2b;
use crate::primitives::{U256, U512};

/// Name reported by operations this scheme does not provide.
pub const SCHEME_NAME: &str = "twisted-edwards";

/// A 32-byte canonical point encoding of a public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    #[inline]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    pub fn from_point(point: &AffinePoint) -> Self {
        Self(encode_point(point))
    }

    /// Decodes the key into a curve point.
    pub fn to_point(&self) -> Result<AffinePoint, EccError> {
        decode_point(&self.0)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = EccError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| EccError::InvalidKeyLength(bytes.len()))?;

        Ok(Self(bytes))
    }
}

/// A 64-byte signature `enc(R) || s`.
///
/// No validation happens at construction; it is all deferred to
/// verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Signature([u8; 64]);

impl Signature {
    #[inline]
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; 64] {
        self.0
    }

    /// The encoded commitment point `R`.
    pub fn r_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.0[..32]);
        out
    }

    /// The big-endian scalar `s`.
    pub fn s_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.0[32..]);
        out
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = EccError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 64] = bytes
            .try_into()
            .map_err(|_| EccError::InvalidSignatureLength(bytes.len()))?;

        Ok(Self(bytes))
    }
}

/// Recoverable ECDSA signature `(v, r, s)` as produced by secp256k1-style
/// backends. This scheme can neither create nor recover one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawSignature {
    pub v: u8,
    pub r: U256,
    pub s: U256,
}

/// Applies the fixed bit pattern to the first half of the seed digest:
/// bit 254 set, bits 255 and 0..3 cleared.
fn clamp(bytes: [u8; 32]) -> BigUint {
    let high_bit = BigUint::one() << (BITS - 2);

    let a = &high_bit + U256::from(bytes).to_biguint() % &high_bit;

    (a >> 3u32) << 3u32
}

/// Expands a seed into its digest, secret scalar and public point.
fn expand(seed: &[u8; 32]) -> (U512, BigUint, AffinePoint) {
    let h = U512::from(blake2b(seed));
    let a = clamp(h.high());
    let public = fast_multiply(&curve().base, &a);

    (h, a, public)
}

/// Derives the secret scalar `a` and public point `A = a·B` from a seed.
pub fn derive(seed: &[u8; 32]) -> (BigUint, AffinePoint) {
    let (_, a, public) = expand(seed);

    (a, public)
}

/// Derives the encoded public key for a seed.
pub fn private_key_to_public_key(seed: &[u8; 32]) -> PublicKey {
    let (_, public) = derive(seed);

    PublicKey::from_point(&public)
}

/// Signs `message` deterministically.
///
/// Identical inputs always produce byte-identical signatures. Signing
/// cannot fail for any seed or message.
pub fn sign(seed: &[u8; 32], message: &[u8]) -> Signature {
    let c = curve();
    let (h, a, public) = expand(seed);

    let r = U256::from(h.low()).to_biguint();
    let r_bytes = encode_point(&fast_multiply(&c.base, &r));

    let mut k_input = Vec::with_capacity(64 + message.len());
    k_input.extend_from_slice(&r_bytes);
    k_input.extend_from_slice(&encode_point(&public));
    k_input.extend_from_slice(message);

    let k = U512::from(blake2b(&k_input)).to_biguint();
    let s = (r + k * a) % &c.l;

    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(&r_bytes);
    signature[32..].copy_from_slice(&U256::from_biguint_wrapping(&s).to_bytes());

    Signature(signature)
}

/// Checks a signature and reports why it was rejected.
///
/// # Errors
///
/// - [`EccError::InvalidSignatureLength`] if `signature` is not 64 bytes
/// - [`EccError::InvalidPointEncoding`] if `R` does not decode
/// - [`EccError::SignatureScalarOutOfRange`] if `s ≥ ℓ`
/// - [`EccError::CurveMembershipFailure`] if `R` is not on the curve
/// - [`EccError::SignatureMismatch`] if the verification equation fails
pub fn check_signature(
    public: &AffinePoint,
    signature: &[u8],
    message: &[u8],
) -> Result<(), EccError> {
    let c = curve();
    let signature = Signature::try_from(signature)?;

    let r_bytes = signature.r_bytes();
    let r_point = decode_point(&r_bytes)?;

    let s = U256::from(signature.s_bytes()).to_biguint();
    if s >= c.l {
        return Err(EccError::SignatureScalarOutOfRange);
    }

    let mut k_input = Vec::with_capacity(64 + message.len());
    k_input.extend_from_slice(&r_bytes);
    k_input.extend_from_slice(&encode_point(public));
    k_input.extend_from_slice(message);

    let k = U512::from(blake2b(&k_input)).to_biguint();

    if !r_point.is_on_curve() {
        return Err(EccError::CurveMembershipFailure);
    }

    let cofactor = BigUint::from(COFACTOR);

    let lhs = fast_multiply(&c.base, &(&cofactor * s));
    let rhs = add(
        &fast_multiply(&r_point, &cofactor),
        &fast_multiply(public, &(&cofactor * k)),
    );

    if lhs == rhs {
        Ok(())
    } else {
        Err(EccError::SignatureMismatch)
    }
}

/// Verifies `signature` over `message` for the public point `public`.
///
/// Never panics: any malformed or invalid input yields `false`.
pub fn verify(public: &AffinePoint, signature: &[u8], message: &[u8]) -> bool {
    match check_signature(public, signature, message) {
        Ok(()) => true,
        Err(err) => {
            trace!("signature rejected: {err}");
            false
        }
    }
}

/// Recoverable ECDSA signing is not provided by this scheme.
pub fn raw_sign(_msg_hash: &[u8; 32], _seed: &[u8; 32]) -> Result<RawSignature, EccError> {
    Err(EccError::OperationNotSupported(SCHEME_NAME))
}

/// Public key recovery is not provided by this scheme.
pub fn raw_recover(_msg_hash: &[u8; 32], _signature: &RawSignature) -> Result<[u8; 64], EccError> {
    Err(EccError::OperationNotSupported(SCHEME_NAME))
}
