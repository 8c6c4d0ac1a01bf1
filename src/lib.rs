//! Elliptic-curve key handling for Cryptal
//!
//! This crate derives keys, signs, and verifies over a twisted Edwards
//! curve, and exposes that scheme as one interchangeable backend behind a
//! uniform capability contract.
//!
//! The focus is on **clarity and auditability** of the arithmetic rather
//! than on speed: field inversion, Tonelli–Shanks square roots, extended
//! coordinates and double-and-add are all written out explicitly on
//! arbitrary-precision integers.
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-width big-endian containers (`U256`, `U512`) used wherever a
//!   byte string is read as, or written from, an integer.
//!
//! - `hash`
//!   BLAKE2b-512, the only hash the signature scheme uses.
//!
//! - `signatures`
//!   The twisted Edwards scheme itself: modular arithmetic, point
//!   arithmetic, point encoding, and the signing pipeline.
//!
//! - `backends`
//!   The [`backends::EccBackend`] contract, the registry of compiled-in
//!   backends, and configuration-driven selection.
//!
//! - `keys`
//!   [`keys::KeyApi`], the caller-facing entry point bound to one backend,
//!   and address derivation.
//!
//! # Concurrency
//!
//! Every operation is a pure function of its inputs over immutable curve
//! constants. There is no shared mutable state, so all of them may be
//! called concurrently without coordination.
//!
//! # Non-goals
//!
//! Arithmetic is **not** constant-time and makes no attempt to resist side
//! channels. Only a single, fixed curve is supported.

pub mod backends;
pub mod error;
pub mod hash;
pub mod keys;
pub mod primitives;
pub mod signatures;

pub use backends::{BackendConfig, BackendKind, EccBackend};
pub use error::EccError;
pub use keys::KeyApi;
