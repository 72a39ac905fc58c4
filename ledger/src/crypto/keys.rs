//! Ed25519 key material.
//!
//! Every authorization signature on a Kura transaction traces back to one of
//! these keypairs. The types are thin wrappers over `ed25519-dalek` that add
//! hex codecs (the wire rendering used in signature entries), non-leaking
//! `Debug` output, and a verification API that answers with a plain `bool`.
//!
//! Secret key material is never logged and never serialized implicitly —
//! `KuraKeypair` deliberately does not implement `Serialize`. Exporting a
//! secret key is an explicit call to [`KuraKeypair::secret_key_bytes`], not
//! something that happens because a keypair ended up inside a JSON response.

use ed25519_dalek::{
    Signature as DalekSignature, Signer, SigningKey, Verifier, VerifyingKey, SECRET_KEY_LENGTH,
};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors during key construction.
///
/// Deliberately terse — error messages about key material should not double
/// as an oracle.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid secret key: wrong length or malformed encoding")]
    InvalidSecretKey,

    #[error("invalid public key: not a valid Ed25519 point")]
    InvalidPublicKey,
}

/// An Ed25519 signing identity.
///
/// Holds the secret key; the public half is derived on demand. Generate one
/// per signer, keep it out of logs, and hand only the public key to the rest
/// of the world.
///
/// # Example
///
/// ```
/// use kura_ledger::crypto::KuraKeypair;
///
/// let keypair = KuraKeypair::generate();
/// let signature = keypair.sign(b"endorse digest");
/// assert!(keypair.public_key().verify(b"endorse digest", &signature));
/// ```
pub struct KuraKeypair {
    signing_key: SigningKey,
}

/// The public half of a signing identity. Safe to share, compare, and embed
/// in transaction signature entries (as hex).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KuraPublicKey {
    bytes: [u8; 32],
}

/// An Ed25519 signature: 64 bytes, deterministic for a given (key, message)
/// pair. A signature of any other length simply fails verification — no
/// panics, no errors, just `false`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KuraSignature {
    bytes: Vec<u8>,
}

impl KuraKeypair {
    /// Generate a fresh keypair from the OS cryptographic RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Construct a keypair deterministically from a 32-byte seed.
    ///
    /// In Ed25519 the seed *is* the secret key. Feed this from a proper
    /// CSPRNG or KDF; a weak seed makes a weak key.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Reconstruct a keypair from a hex-encoded secret key.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str).map_err(|_| KeyError::InvalidSecretKey)?;
        let seed: [u8; SECRET_KEY_LENGTH] =
            bytes.try_into().map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self::from_seed(&seed))
    }

    /// The public key for this identity.
    pub fn public_key(&self) -> KuraPublicKey {
        KuraPublicKey {
            bytes: self.signing_key.verifying_key().to_bytes(),
        }
    }

    /// The public key as the hex string used in signature entries.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign a message. Deterministic: the same (key, message) pair always
    /// yields the same signature (RFC 8032).
    pub fn sign(&self, message: &[u8]) -> KuraSignature {
        KuraSignature {
            bytes: self.signing_key.sign(message).to_bytes().to_vec(),
        }
    }

    /// Verify a signature against this keypair's own public key.
    pub fn verify(&self, message: &[u8], signature: &KuraSignature) -> bool {
        self.public_key().verify(message, signature)
    }

    /// Export the raw 32-byte secret key. Handle accordingly.
    pub fn secret_key_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }
}

impl Clone for KuraKeypair {
    fn clone(&self) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&self.signing_key.to_bytes()),
        }
    }
}

impl PartialEq for KuraKeypair {
    /// Identity comparison goes through the public key; secret material is
    /// never compared directly.
    fn eq(&self, other: &Self) -> bool {
        self.public_key() == other.public_key()
    }
}

impl Eq for KuraKeypair {}

impl fmt::Debug for KuraKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Secret key material stays out of Debug output, entirely.
        write!(f, "KuraKeypair(pub={})", self.public_key_hex())
    }
}

// ---------------------------------------------------------------------------
// KuraPublicKey
// ---------------------------------------------------------------------------

impl KuraPublicKey {
    /// Wrap raw bytes without point validation. Use
    /// [`try_from_slice`](Self::try_from_slice) for untrusted input.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Construct from an untrusted byte slice, validating length and that
    /// the bytes decode to a valid Ed25519 point.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        let bytes: [u8; 32] = slice.try_into().map_err(|_| KeyError::InvalidPublicKey)?;
        VerifyingKey::from_bytes(&bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { bytes })
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Verify a signature. Malformed keys or signatures verify to `false`;
    /// this function has no failure channel.
    pub fn verify(&self, message: &[u8], signature: &KuraSignature) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.bytes) else {
            return false;
        };
        let Ok(sig_bytes) = <[u8; 64]>::try_from(signature.bytes.as_slice()) else {
            return false;
        };
        let sig = DalekSignature::from_bytes(&sig_bytes);
        verifying_key.verify(message, &sig).is_ok()
    }

    /// Hex rendering, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parse a hex-encoded public key.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s).map_err(|_| KeyError::InvalidPublicKey)?;
        let bytes: [u8; 32] = bytes.try_into().map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { bytes })
    }
}

impl fmt::Display for KuraPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for KuraPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KuraPublicKey({})", &self.to_hex()[..16])
    }
}

// ---------------------------------------------------------------------------
// KuraSignature
// ---------------------------------------------------------------------------

impl KuraSignature {
    /// Wrap a raw 64-byte signature.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// The raw signature bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Hex rendering, 128 characters for a well-formed signature.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Parse a hex-encoded signature. Length is validated here so that a
    /// `KuraSignature` constructed through this path is always 64 bytes.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 64 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        Ok(Self { bytes })
    }
}

impl fmt::Display for KuraSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for KuraSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex_str = self.to_hex();
        if hex_str.len() >= 16 {
            write!(f, "KuraSignature({}...)", &hex_str[..16])
        } else {
            write!(f, "KuraSignature({})", hex_str)
        }
    }
}
