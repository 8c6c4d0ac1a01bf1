//! Signatures over the twisted Edwards curve `−x² + y² = 1 + d·x²·y²`,
//! `q = 2²⁵⁵ − 19`.
//!
//! The arithmetic is written from scratch on arbitrary-precision integers
//! and is organised bottom-up:
//!
//! - [`modular`]: modular inverse, Legendre symbol, Tonelli–Shanks square
//!   root
//! - [`params`]: the fixed curve constants
//! - [`point`]: curve membership, affine and extended-coordinate addition,
//!   double-and-add scalar multiplication
//! - [`codec`]: 32-byte point encoding with a packed sign bit
//! - [`core`](self::core): key derivation, signing and verification
//!
//! The scheme hashes with BLAKE2b-512 and reads every byte string as a
//! big-endian integer, so its keys and signatures are not interchangeable
//! with RFC 8032 Ed25519 even though the curve is the same.
//!
//! Nothing here is constant-time. Do not use it where timing of secret
//! dependent operations can be observed.

pub mod codec;
pub mod core;
pub mod modular;
pub mod params;
pub mod point;

pub use codec::{decode_point, encode_point};
pub use self::core::{PublicKey, RawSignature, Signature};
pub use point::{AffinePoint, ExtendedPoint};
