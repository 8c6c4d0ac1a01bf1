//! Interchangeable elliptic-curve backends.
//!
//! Every backend implements the same [`EccBackend`] contract, so callers can
//! swap the curve implementation without touching their code. Backends are
//! chosen from a closed registry ([`BackendKind`]) by an explicit
//! configuration value ([`BackendConfig`]); there is no lookup by import
//! path at runtime.
//!
//! The process-wide default is resolved once, from the `ECC_BACKEND`
//! environment variable if it is set, and never re-evaluated afterwards.

mod twisted_edwards;

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

use log::debug;

use crate::error::EccError;
pub use crate::signatures::edwards::RawSignature;
pub use twisted_edwards::TwistedEdwardsBackend;

/// Environment variable consulted by [`BackendConfig::from_env`].
pub const BACKEND_ENV_VAR: &str = "ECC_BACKEND";

/// Capability contract shared by all curve backends.
pub trait EccBackend: Send + Sync {
    /// Stable, human-readable backend name.
    fn name(&self) -> &'static str;

    /// Derives the 32-byte public key for a 32-byte private seed.
    fn derive_public_key(&self, seed: &[u8; 32]) -> [u8; 32];

    /// Signs `message` with the key derived from `seed`.
    fn sign(&self, seed: &[u8; 32], message: &[u8]) -> [u8; 64];

    /// Verifies `signature` over `message`.
    ///
    /// Returns `Err` only for structurally malformed input (a signature
    /// that is not 64 bytes). Well-formed but invalid signatures, including
    /// undecodable public keys, yield `Ok(false)`.
    fn verify(
        &self,
        public_key: &[u8; 32],
        signature: &[u8],
        message: &[u8],
    ) -> Result<bool, EccError>;

    /// Recoverable ECDSA signing over a 32-byte message hash.
    fn raw_sign(&self, msg_hash: &[u8; 32], seed: &[u8; 32]) -> Result<RawSignature, EccError>;

    /// Recovers the 64-byte uncompressed public key behind a recoverable
    /// ECDSA signature.
    fn raw_recover(
        &self,
        msg_hash: &[u8; 32],
        signature: &RawSignature,
    ) -> Result<[u8; 64], EccError>;
}

static TWISTED_EDWARDS: TwistedEdwardsBackend = TwistedEdwardsBackend;

/// Registry of the backends compiled into this crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackendKind {
    #[default]
    TwistedEdwards,
}

impl BackendKind {
    /// Returns the backend instance for this kind.
    pub fn backend(self) -> &'static dyn EccBackend {
        match self {
            BackendKind::TwistedEdwards => &TWISTED_EDWARDS,
        }
    }
}

impl FromStr for BackendKind {
    type Err = EccError;

    /// Parses a backend name, ignoring ASCII case.
    ///
    /// Accepted for the twisted Edwards backend: `twisted-edwards`,
    /// `twisted_edwards`, `ed25519`, `TwistedEdwardsECCBackend`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twisted-edwards" | "twisted_edwards" | "ed25519" | "twistededwardseccbackend" => {
                Ok(BackendKind::TwistedEdwards)
            }
            _ => Err(EccError::UnknownBackend(s.to_owned())),
        }
    }
}

impl Display for BackendKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.backend().name())
    }
}

/// Backend selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackendConfig {
    pub kind: BackendKind,
}

impl BackendConfig {
    pub fn new(kind: BackendKind) -> Self {
        Self { kind }
    }

    /// Reads the backend name from [`BACKEND_ENV_VAR`], falling back to the
    /// default backend when the variable is unset or empty.
    ///
    /// # Errors
    ///
    /// [`EccError::UnknownBackend`] if the variable names no known backend.
    pub fn from_env() -> Result<Self, EccError> {
        match std::env::var(BACKEND_ENV_VAR) {
            Ok(name) if !name.trim().is_empty() => {
                let kind = name.parse()?;
                debug!("{BACKEND_ENV_VAR}={name} selects the {kind} backend");

                Ok(Self::new(kind))
            }
            _ => {
                debug!("{BACKEND_ENV_VAR} unset, using the default backend");

                Ok(Self::default())
            }
        }
    }

    pub fn backend(&self) -> &'static dyn EccBackend {
        self.kind.backend()
    }
}

static DEFAULT_KIND: OnceLock<Result<BackendKind, EccError>> = OnceLock::new();

/// Returns the process-wide backend.
///
/// The environment is read on the first call only; every later call,
/// from any thread, sees the same answer.
pub fn default_backend() -> Result<&'static dyn EccBackend, EccError> {
    DEFAULT_KIND
        .get_or_init(|| BackendConfig::from_env().map(|config| config.kind))
        .clone()
        .map(BackendKind::backend)
}
