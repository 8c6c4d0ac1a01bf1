//! Caller-facing key API.
//!
//! [`KeyApi`] binds one backend when it is constructed and dispatches every
//! call to it unchanged for its whole lifetime. Which backend is bound is
//! decided by configuration, not by this type.

use crate::backends::{self, BackendConfig, EccBackend, RawSignature};
use crate::error::EccError;
use crate::hash::blake2b;

/// Prefix byte of every account address.
pub const ADDRESS_PREFIX: u8 = 0xa0;

/// Derives a 32-byte address from a public key:
/// `0xa0 || blake2b(public_key)[0..31]`.
pub fn public_key_to_address(public_key: &[u8; 32]) -> [u8; 32] {
    let digest = blake2b(public_key);

    let mut address = [0u8; 32];
    address[0] = ADDRESS_PREFIX;
    address[1..].copy_from_slice(&digest[..31]);

    address
}

/// Key operations dispatched to a fixed backend.
#[derive(Clone, Copy)]
pub struct KeyApi {
    backend: &'static dyn EccBackend,
}

impl KeyApi {
    pub fn new(config: &BackendConfig) -> Self {
        Self::with_backend(config.backend())
    }

    pub fn with_backend(backend: &'static dyn EccBackend) -> Self {
        Self { backend }
    }

    /// Binds the process-wide default backend (see
    /// [`backends::default_backend`]).
    pub fn from_env() -> Result<Self, EccError> {
        backends::default_backend().map(Self::with_backend)
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn derive_public_key(&self, seed: &[u8; 32]) -> [u8; 32] {
        self.backend.derive_public_key(seed)
    }

    pub fn sign(&self, seed: &[u8; 32], message: &[u8]) -> [u8; 64] {
        self.backend.sign(seed, message)
    }

    pub fn verify(
        &self,
        public_key: &[u8; 32],
        signature: &[u8],
        message: &[u8],
    ) -> Result<bool, EccError> {
        self.backend.verify(public_key, signature, message)
    }

    pub fn raw_sign(&self, msg_hash: &[u8; 32], seed: &[u8; 32]) -> Result<RawSignature, EccError> {
        self.backend.raw_sign(msg_hash, seed)
    }

    pub fn raw_recover(
        &self,
        msg_hash: &[u8; 32],
        signature: &RawSignature,
    ) -> Result<[u8; 64], EccError> {
        self.backend.raw_recover(msg_hash, signature)
    }

    /// Derives the address of the key belonging to `seed`.
    pub fn address_of(&self, seed: &[u8; 32]) -> [u8; 32] {
        public_key_to_address(&self.derive_public_key(seed))
    }
}

impl Default for KeyApi {
    fn default() -> Self {
        Self::new(&BackendConfig::default())
    }
}

impl std::fmt::Debug for KeyApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyApi")
            .field("backend", &self.backend.name())
            .finish()
    }
}
