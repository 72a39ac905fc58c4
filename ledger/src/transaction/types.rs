//! Signature entries and the authorization policy.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::DEFAULT_MIN_SIGNATURES;
use crate::crypto::signatures::verify_hex;

// ---------------------------------------------------------------------------
// TxSignature
// ---------------------------------------------------------------------------

/// One co-signer entry: a claimed public key and a signature over the
/// transaction's digest, both hex-encoded on the wire.
///
/// Entries are structural, not validated: appending a forged, malformed, or
/// duplicate entry always succeeds, and the entry simply fails to verify
/// later. Collection and validation are separate phases so that a
/// coordinator can assemble signatures from several parties over time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxSignature {
    /// Hex-encoded Ed25519 public key the signer claims to hold.
    pub public_key: String,
    /// Hex-encoded Ed25519 signature over the transaction digest.
    pub signature: String,
}

impl TxSignature {
    /// Build an entry from its wire components.
    pub fn new(public_key: &str, signature: &str) -> Self {
        Self {
            public_key: public_key.to_string(),
            signature: signature.to_string(),
        }
    }

    /// Check this entry against a message (the transaction digest string).
    ///
    /// Decodes the claimed key and signature from hex and runs Ed25519
    /// verification. Any malformed component verifies to `false`.
    pub fn verifies(&self, message: &str) -> bool {
        verify_hex(&self.public_key, message.as_bytes(), &self.signature)
    }
}

impl fmt::Display for TxSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.public_key, self.signature)
    }
}

// ---------------------------------------------------------------------------
// SignaturePolicy
// ---------------------------------------------------------------------------

/// Quorum configuration for authorization.
///
/// Authorization always demands that *every* attached signature verifies
/// (all-or-nothing); the policy adds the floor: how many entries must be
/// present and valid. The default floor is one, so an unsigned transaction
/// is never authorized by accident.
///
/// A floor of zero is the literal count-equality rule, under which an empty
/// signature set is vacuously authorized. That behavior exists only as this
/// explicit, visible opt-in — it is never a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignaturePolicy {
    /// Minimum number of valid signatures required for authorization.
    pub min_signatures: usize,
}

impl SignaturePolicy {
    /// Require at least `min_signatures` valid entries.
    pub fn at_least(min_signatures: usize) -> Self {
        Self { min_signatures }
    }
}

impl Default for SignaturePolicy {
    fn default() -> Self {
        Self {
            min_signatures: DEFAULT_MIN_SIGNATURES,
        }
    }
}
