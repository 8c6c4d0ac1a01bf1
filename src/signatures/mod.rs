//! Digital signature schemes.
//!
//! Each submodule implements one scheme end to end: its field and group
//! arithmetic, its encodings, and its signing and verification rules.
//! Callers that want to swap schemes without code changes go through
//! [`crate::backends`] instead.

pub mod edwards;
