//! # Protocol Constants
//!
//! Every fixed parameter of the integrity envelope lives here. These values
//! are part of the wire contract — changing one after transactions exist in
//! the wild invalidates every stored digest and signature, so treat edits as
//! format-breaking.

// ---------------------------------------------------------------------------
// Hashing
// ---------------------------------------------------------------------------

/// The digest function for transaction hashes. SHA3-256 (Keccak with the
/// FIPS 202 padding), rendered as lowercase hex on the wire.
pub const HASH_FUNCTION: &str = "SHA3-256";

/// Raw digest length in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// Hex-rendered digest length. A transaction hash is always exactly this
/// wide; anything else is corrupt.
pub const DIGEST_HEX_LENGTH: usize = 64;

// ---------------------------------------------------------------------------
// Signatures
// ---------------------------------------------------------------------------

/// Ed25519 — deterministic signatures, 128-bit security, no per-signature
/// nonce to mismanage.
pub const SIGNING_ALGORITHM: &str = "Ed25519";

/// Ed25519 secret key length in bytes.
pub const SIGNING_KEY_LENGTH: usize = 32;

/// Ed25519 public (verifying) key length in bytes.
pub const VERIFYING_KEY_LENGTH: usize = 32;

/// Ed25519 signature length in bytes. Always 64.
pub const SIGNATURE_LENGTH: usize = 64;

/// Hex-rendered public key width as it appears in a signature entry.
pub const PUBLIC_KEY_HEX_LENGTH: usize = 64;

/// Hex-rendered signature width as it appears in a signature entry.
pub const SIGNATURE_HEX_LENGTH: usize = 128;

// ---------------------------------------------------------------------------
// Authorization policy
// ---------------------------------------------------------------------------

/// Default signature quorum. A transaction with zero signatures is
/// well-formed but unauthorized; callers that genuinely want the
/// count-equality rule with no floor must opt in with an explicit policy.
pub const DEFAULT_MIN_SIGNATURES: usize = 1;
