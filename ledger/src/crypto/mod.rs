//! # Cryptographic Primitives
//!
//! The foundation of the integrity envelope. Two primitives, deliberately
//! boring and well-audited:
//!
//! - **SHA3-256** for transaction digests — the wire format renders each
//!   digest as a fixed-width lowercase hex string.
//! - **Ed25519** for authorization signatures — deterministic, compact, and
//!   fast to verify, which matters when a transaction carries many co-signer
//!   entries.
//!
//! Everything here is a thin, type-safe wrapper around audited crates. If
//! you feel the urge to optimize these functions, go read about timing
//! attacks first and come back when the urge has passed.

pub mod hash;
pub mod keys;
pub mod signatures;

// Re-export the working set so callers don't need the full module path.
pub use hash::{sha3_256, sha3_256_hex};
pub use keys::{KeyError, KuraKeypair, KuraPublicKey, KuraSignature};
pub use signatures::{sign, verify, verify_hex, verify_raw};
