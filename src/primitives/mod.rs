//! Primitive types
//!
//! Fixed-width big-endian integer containers used at the byte boundary of
//! the crate:
//! - `U256`: 32-byte values (field elements, encoded points, scalars)
//! - `U512`: 64-byte values (BLAKE2b digests)
//!
//! They carry no arithmetic of their own. Conversions to and from
//! `BigUint` are explicit and never truncate silently.

mod u256;
mod u512;

pub use u256::U256;
pub use u512::U512;
