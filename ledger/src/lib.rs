// Copyright (c) 2026 Kura Contributors. MIT License.
// See LICENSE for details.

//! # Kura Ledger — Transaction Integrity Core
//!
//! The integrity envelope for a ledger transaction: one domain command,
//! authored by a sender, timestamped at creation, identified by a canonical
//! content hash, and authorized by one or more Ed25519 signatures over that
//! hash. Everything that touches money goes through this envelope first.
//!
//! ## Architecture
//!
//! The crate mirrors the actual concerns of transaction integrity:
//!
//! - **command** — The [`Command`] seam. The envelope never interprets a
//!   command; it only asks for its content digest and delegates execution.
//! - **crypto** — SHA3-256 hashing and Ed25519 key material. Thin, type-safe
//!   wrappers over audited implementations. Don't roll your own.
//! - **transaction** — The [`Transaction`] envelope itself: construction,
//!   canonical hashing, multi-signature accumulation, authorization checks,
//!   and execution delegation.
//! - **config** — Protocol constants. Digest widths, key lengths, quorum
//!   defaults. If you're hardcoding one of these elsewhere, stop.
//!
//! ## The Contract, In One Paragraph
//!
//! A transaction's hash is a pure function of `(command content hash,
//! timestamp, sender public key)` — all fixed at construction, so the digest
//! is computed once and never changes. Co-signers each sign that digest.
//! Authorization demands that *every* attached signature verifies and that
//! the configured quorum is met; a single bad entry fails the whole set.
//! Execution is deliberately unguarded — the orchestrating pipeline MUST
//! validate before executing. The envelope is a data-integrity object, not a
//! policy enforcer.
//!
//! ## Design Decisions
//!
//! 1. The hash preimage is the unseparated concatenation of the three fields,
//!    byte-for-byte compatible with existing deployments. See
//!    [`Transaction::hash_preimage`] for the fine print on that choice.
//! 2. The empty-signature-set question is answered by an explicit
//!    [`SignaturePolicy`] value, never silently. Default quorum is one.
//! 3. Signature collection and validation are separate phases: append never
//!    validates, so partial multi-sig assembly over time just works.

pub mod command;
pub mod config;
pub mod crypto;
pub mod transaction;

// Re-export the working set so callers don't have to memorize the module
// hierarchy.
pub use command::Command;
pub use crypto::{KuraKeypair, KuraPublicKey, KuraSignature};
pub use transaction::{
    sign_transaction, verify_transaction, SignaturePolicy, Transaction, TransactionError,
    TxSignature,
};
