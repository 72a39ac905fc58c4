//! Signing and verification entry points.
//!
//! Free functions over the key types, plus the wire-format variants that the
//! multi-signature validator runs on. The rule everywhere: verification
//! answers `bool` and never throws. A malformed key, a truncated signature,
//! garbage hex — all of it is just `false`. Giving callers (or attackers) a
//! taxonomy of *why* a signature failed is not this layer's job.

use ed25519_dalek::{Signature as DalekSignature, Verifier, VerifyingKey};

use super::keys::{KuraKeypair, KuraPublicKey, KuraSignature};

/// Sign a message with a keypair.
///
/// # Example
///
/// ```
/// use kura_ledger::crypto::{sign, verify, KuraKeypair};
///
/// let keypair = KuraKeypair::generate();
/// let signature = sign(&keypair, b"endorse");
/// assert!(verify(&keypair.public_key(), b"endorse", &signature));
/// ```
pub fn sign(keypair: &KuraKeypair, message: &[u8]) -> KuraSignature {
    keypair.sign(message)
}

/// Verify a signature against a public key and message.
pub fn verify(public_key: &KuraPublicKey, message: &[u8], signature: &KuraSignature) -> bool {
    public_key.verify(message, signature)
}

/// Verify from raw byte components.
///
/// The "these bytes came off the wire" variant: parses the public key,
/// rejects invalid curve points, and checks the signature. Any parse failure
/// is a verification failure.
pub fn verify_raw(public_key_bytes: &[u8; 32], message: &[u8], signature_bytes: &[u8; 64]) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(public_key_bytes) else {
        return false;
    };
    let signature = DalekSignature::from_bytes(signature_bytes);
    verifying_key.verify(message, &signature).is_ok()
}

/// Verify from hex-encoded key and signature strings.
///
/// This is the workhorse of transaction validation: signature entries carry
/// their claimed public key and signature as hex, and this function decodes
/// and checks them in one step. Undecodable or wrong-length input verifies
/// to `false` — an appended garbage entry lowers the valid count, it does
/// not abort validation.
pub fn verify_hex(public_key_hex: &str, message: &[u8], signature_hex: &str) -> bool {
    let Ok(pk_bytes) = hex::decode(public_key_hex) else {
        return false;
    };
    let Ok(pk_arr) = <[u8; 32]>::try_from(pk_bytes.as_slice()) else {
        return false;
    };
    let Ok(sig_bytes) = hex::decode(signature_hex) else {
        return false;
    };
    let Ok(sig_arr) = <[u8; 64]>::try_from(sig_bytes.as_slice()) else {
        return false;
    };
    verify_raw(&pk_arr, message, &sig_arr)
}
