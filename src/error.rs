//! Error type shared by every layer of the crate.
//!
//! Arithmetic never aborts: faults such as a missing square root surface
//! here as typed values and are folded into a boolean by the verification
//! entry points.

/// Errors produced by key handling, point decoding, and signature checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EccError {
    #[error("invalid signature length: expected 64 bytes, got {0}")]
    InvalidSignatureLength(usize),

    #[error("invalid key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// No square root exists for the encoded `y`, or the sign bit cannot be
    /// honoured.
    #[error("invalid point encoding")]
    InvalidPointEncoding,

    #[error("signature scalar is not below the group order")]
    SignatureScalarOutOfRange,

    #[error("point is not on the curve")]
    CurveMembershipFailure,

    /// The verification equation does not hold.
    #[error("signature does not match message and public key")]
    SignatureMismatch,

    #[error("operation not supported by the {0} backend")]
    OperationNotSupported(&'static str),

    #[error("unknown backend: {0}")]
    UnknownBackend(String),
}
