use log::trace;

use super::{EccBackend, RawSignature};
use crate::error::EccError;
use crate::signatures::edwards::core as scheme;
use crate::signatures::edwards::{PublicKey, Signature};

/// Backend built on the crate's own twisted Edwards arithmetic.
///
/// Stateless; a single shared instance serves every caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct TwistedEdwardsBackend;

impl EccBackend for TwistedEdwardsBackend {
    fn name(&self) -> &'static str {
        scheme::SCHEME_NAME
    }

    fn derive_public_key(&self, seed: &[u8; 32]) -> [u8; 32] {
        scheme::private_key_to_public_key(seed).to_bytes()
    }

    fn sign(&self, seed: &[u8; 32], message: &[u8]) -> [u8; 64] {
        scheme::sign(seed, message).to_bytes()
    }

    fn verify(
        &self,
        public_key: &[u8; 32],
        signature: &[u8],
        message: &[u8],
    ) -> Result<bool, EccError> {
        let signature = Signature::try_from(signature)?;

        let public = match PublicKey::from_bytes(*public_key).to_point() {
            Ok(point) => point,
            Err(err) => {
                trace!("public key rejected: {err}");
                return Ok(false);
            }
        };

        Ok(scheme::verify(&public, &signature.to_bytes(), message))
    }

    fn raw_sign(&self, msg_hash: &[u8; 32], seed: &[u8; 32]) -> Result<RawSignature, EccError> {
        scheme::raw_sign(msg_hash, seed)
    }

    fn raw_recover(
        &self,
        msg_hash: &[u8; 32],
        signature: &RawSignature,
    ) -> Result<[u8; 64], EccError> {
        scheme::raw_recover(msg_hash, signature)
    }
}
