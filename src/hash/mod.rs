//! Hash functions used by the signature scheme.
//!
//! Every hash in the twisted Edwards backend is unkeyed BLAKE2b with a
//! 64-byte output.

use blake2::{Blake2b512, Digest};

/// Computes the 64-byte BLAKE2b digest of `input`.
pub fn blake2b(input: &[u8]) -> [u8; 64] {
    let mut hasher = Blake2b512::new();
    hasher.update(input);

    let digest = hasher.finalize();

    let mut out = [0u8; 64];
    out.copy_from_slice(&digest);

    out
}
