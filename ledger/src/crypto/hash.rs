//! SHA3-256 digest helpers.
//!
//! One hash function, two renderings. The raw 32-byte digest is for callers
//! composing binary structures; the hex rendering is the transaction digest
//! format — every hash that gets signed, stored, or compared at the envelope
//! layer is the fixed-width lowercase hex string produced here.
//!
//! SHA3-256 (FIPS 202) is the Keccak sponge with 256-bit output. Unlike the
//! SHA-2 family it is structurally immune to length-extension, so no
//! double-hash construction is needed for identifier use.

use sha3::{Digest, Sha3_256};

/// Compute the SHA3-256 digest of the input, returned as a 32-byte array.
///
/// # Example
///
/// ```
/// use kura_ledger::crypto::hash::sha3_256;
///
/// let digest = sha3_256(b"kura");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the SHA3-256 digest and render it as a 64-character lowercase
/// hex string.
///
/// This is the transaction digest format. The width is fixed: every valid
/// digest is exactly 64 hex characters, which makes truncation and
/// concatenation bugs loud instead of silent.
///
/// # Example
///
/// ```
/// use kura_ledger::crypto::hash::sha3_256_hex;
///
/// let digest = sha3_256_hex(b"kura");
/// assert_eq!(digest.len(), 64);
/// assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn sha3_256_hex(data: &[u8]) -> String {
    hex::encode(sha3_256(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DIGEST_HEX_LENGTH, DIGEST_LENGTH};

    #[test]
    fn empty_input_known_vector() {
        // SHA3-256 of the empty string, straight from FIPS 202.
        assert_eq!(
            sha3_256_hex(b""),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn known_vector() {
        assert_eq!(
            sha3_256_hex(b"kura"),
            "ecb67515bd6a743ee76beb3d1085ed6f405326e83dbd25ae50c693195d537e29"
        );
    }

    #[test]
    fn deterministic() {
        assert_eq!(sha3_256(b"ledger"), sha3_256(b"ledger"));
    }

    #[test]
    fn different_inputs_differ() {
        assert_ne!(sha3_256(b"kura"), sha3_256(b"Kura"));
    }

    #[test]
    fn hex_rendering_matches_raw() {
        let raw = sha3_256(b"cross-check");
        assert_eq!(sha3_256_hex(b"cross-check"), hex::encode(raw));
    }

    #[test]
    fn output_widths() {
        assert_eq!(sha3_256(b"w").len(), DIGEST_LENGTH);
        assert_eq!(sha3_256_hex(b"w").len(), DIGEST_HEX_LENGTH);
    }

    #[test]
    fn hex_is_lowercase() {
        let digest = sha3_256_hex(b"case check");
        assert_eq!(digest, digest.to_lowercase());
    }
}
