//! The transaction envelope.
//!
//! A [`Transaction`] binds one command to a sender identity and a creation
//! timestamp, derives a canonical digest over the three, and accumulates
//! co-signer endorsements of that digest. Fields are private: nothing that
//! feeds the hash can be mutated after construction, which is what makes
//! caching the digest sound.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::types::{SignaturePolicy, TxSignature};
use crate::command::Command;
use crate::crypto::hash::sha3_256_hex;

/// A ledger transaction: one command, one sender, one timestamp, a canonical
/// hash, and an append-only list of authorization signatures.
///
/// The `hash` is `sha3_256_hex(content_hash || timestamp || sender)` and is
/// computed at construction — every input is fixed by then, so the stored
/// value is definitionally up to date. [`compute_hash`](Self::compute_hash)
/// recomputes from the current fields; for a transaction that came through a
/// constructor the two always agree, and validation uses the recomputed
/// value so that a tampered deserialized envelope cannot smuggle in a stale
/// digest.
///
/// A transaction with zero signatures is well-formed but unauthorized under
/// the default policy. The envelope enforces no ordering between validation
/// and execution — that sequencing belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction<C: Command> {
    hash: String,
    sender_public_key: String,
    timestamp: i64,
    signatures: Vec<TxSignature>,
    command: C,
}

impl<C: Command> Transaction<C> {
    /// Build a transaction from a sender identity and a command, stamping
    /// the timestamp from the wall clock.
    ///
    /// The result carries no signatures and is ready for the signing phase.
    pub fn new(sender_public_key: &str, command: C) -> Self {
        Self::with_timestamp(sender_public_key, command, Utc::now().timestamp())
    }

    /// Build a transaction with an explicit creation timestamp (epoch
    /// seconds).
    ///
    /// This is the deterministic construction path: replaying a historical
    /// transaction, or any test that needs a reproducible digest, goes
    /// through here.
    pub fn with_timestamp(sender_public_key: &str, command: C, timestamp: i64) -> Self {
        let mut tx = Self {
            hash: String::new(),
            sender_public_key: sender_public_key.to_string(),
            timestamp,
            signatures: Vec::new(),
            command,
        };
        tx.hash = tx.compute_hash();
        tx
    }

    /// The canonical digest, fixed at construction. Stable and idempotent.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// The exact byte string that gets hashed: the command's content hash,
    /// the decimal timestamp, and the sender key, concatenated with **no
    /// separators**.
    ///
    /// The unseparated form is preserved byte-for-byte for compatibility
    /// with existing deployments. It admits field-boundary collisions in
    /// principle (a timestamp ending in `1` and a sender starting with `2`
    /// reads the same as the shifted split); a format revision would switch
    /// to length-prefixed fields and break every stored digest, so the
    /// trade-off stands until the wire format is versioned.
    pub fn hash_preimage(&self) -> String {
        format!(
            "{}{}{}",
            self.command.content_hash(),
            self.timestamp,
            self.sender_public_key
        )
    }

    /// Recompute the digest from the current field values.
    ///
    /// Deterministic: unchanged inputs always produce the same value.
    /// Validation compares this against the stored [`hash`](Self::hash) to
    /// catch tampering after deserialization.
    pub fn compute_hash(&self) -> String {
        sha3_256_hex(self.hash_preimage().as_bytes())
    }

    /// The sender-of-record identity.
    pub fn sender_public_key(&self) -> &str {
        &self.sender_public_key
    }

    /// Creation time, epoch seconds. Set exactly once, at construction.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// The owned command.
    pub fn command(&self) -> &C {
        &self.command
    }

    /// The accumulated signature entries, in append order.
    pub fn signatures(&self) -> &[TxSignature] {
        &self.signatures
    }

    /// Append a co-signer entry. Unconditional: no validation, no
    /// deduplication, no ordering significance. Invalid entries surface at
    /// validation time as non-verifying, nothing more.
    pub fn add_signature(&mut self, public_key: &str, signature: &str) {
        self.signatures.push(TxSignature::new(public_key, signature));
    }

    /// The boolean authorization gate under the default policy: every
    /// attached signature must verify against the digest and its claimed
    /// key, and at least one valid signature must be present.
    ///
    /// For diagnostics — *which* entry failed, and why — use
    /// [`verify_transaction`](super::verify_transaction) instead.
    pub fn is_valid_signatures(&self) -> bool {
        self.is_authorized(&SignaturePolicy::default())
    }

    /// The authorization gate under an explicit policy.
    ///
    /// All-or-nothing over the attached set: the count of verifying entries
    /// must equal the total count, and must meet the policy floor. With
    /// `min_signatures: 0` an empty set is vacuously authorized — the
    /// literal counting rule, available only by explicit opt-in.
    pub fn is_authorized(&self, policy: &SignaturePolicy) -> bool {
        let hash = self.compute_hash();
        let valid = self
            .signatures
            .iter()
            .filter(|entry| entry.verifies(&hash))
            .count();
        valid == self.signatures.len() && valid >= policy.min_signatures
    }

    /// Delegate execution to the command.
    ///
    /// **This method performs no validation.** The envelope is a
    /// data-integrity object, not a policy enforcer; a pipeline integrating
    /// it MUST check [`is_valid_signatures`](Self::is_valid_signatures) (or
    /// [`verify_transaction`](super::verify_transaction)) before calling
    /// this, or the authorization model is void. Command errors propagate
    /// unchanged.
    pub fn execute(&self, context: &mut C::Context) -> Result<(), C::Error> {
        self.command.execute(context)
    }
}

impl<C: Command + Default> Default for Transaction<C> {
    /// Deferred-population construction: default command, empty sender, and
    /// a timestamp stamped *now*. Callers that need a specific historical
    /// timestamp must use [`Transaction::with_timestamp`] instead.
    fn default() -> Self {
        Self::new("", C::default())
    }
}
