//! Diagnostic transaction validation.
//!
//! The envelope's boolean gate collapses every failure reason into `false`.
//! That is the right shape for an authorization check and the wrong shape
//! for an operator staring at a rejected transaction. [`verify_transaction`]
//! runs the same rules as the gate — plus an envelope-integrity check — and
//! reports the first failing one with context.
//!
//! Checks are ordered cheapest-first: one digest recomputation and two
//! length comparisons happen before any Ed25519 math.

use thiserror::Error;
use tracing::{debug, warn};

use super::envelope::Transaction;
use super::types::SignaturePolicy;
use crate::command::Command;

/// Validation failures, first one wins.
///
/// Each variant carries enough context to debug the rejection without
/// re-running validation by hand.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// The stored digest does not match a recomputation over the current
    /// field values — the envelope was tampered with after construction
    /// (typically between serialization and deserialization).
    #[error("transaction hash mismatch: expected {expected}, stored {stored}")]
    HashMismatch { expected: String, stored: String },

    /// Fewer signature entries are attached than the policy floor requires.
    /// With the default policy this is the unsigned-transaction case.
    #[error("quorum not met: {attached} signature(s) attached, policy requires {required}")]
    QuorumNotMet { required: usize, attached: usize },

    /// An attached entry does not verify against the digest and its claimed
    /// key. The index is the append position.
    #[error("signature {index} (claimed key {public_key}) does not verify against the digest")]
    InvalidSignature { index: usize, public_key: String },
}

/// Validate a transaction against a policy, reporting the first failure.
///
/// The checks, in order:
///
/// 1. **Envelope integrity** — the stored hash equals a fresh recomputation
///    over `(content hash, timestamp, sender)`.
/// 2. **Quorum satisfiability** — at least `policy.min_signatures` entries
///    are attached. (Checked before any cryptography: a set that cannot
///    possibly meet quorum is rejected for free.)
/// 3. **All-or-nothing verification** — every entry verifies against the
///    digest and its claimed public key.
///
/// `Ok(())` here implies `is_authorized` would return `true` for the same
/// policy; the two APIs differ only in what they tell you about failure.
pub fn verify_transaction<C: Command>(
    tx: &Transaction<C>,
    policy: &SignaturePolicy,
) -> Result<(), TransactionError> {
    // 1. Envelope integrity.
    let expected = tx.compute_hash();
    if tx.hash() != expected {
        warn!(
            stored = tx.hash(),
            expected = expected.as_str(),
            "transaction digest does not match its content"
        );
        return Err(TransactionError::HashMismatch {
            expected,
            stored: tx.hash().to_string(),
        });
    }

    // 2. Quorum satisfiability.
    let attached = tx.signatures().len();
    if attached < policy.min_signatures {
        return Err(TransactionError::QuorumNotMet {
            required: policy.min_signatures,
            attached,
        });
    }

    // 3. Every entry must verify.
    for (index, entry) in tx.signatures().iter().enumerate() {
        if !entry.verifies(&expected) {
            warn!(
                index,
                public_key = entry.public_key.as_str(),
                "signature entry failed verification"
            );
            return Err(TransactionError::InvalidSignature {
                index,
                public_key: entry.public_key.clone(),
            });
        }
    }

    debug!(
        hash = expected.as_str(),
        signatures = attached,
        "transaction signature set verified"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash::sha3_256_hex;
    use crate::crypto::KuraKeypair;
    use crate::transaction::sign_transaction;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    struct Stub(String);

    impl Command for Stub {
        type Context = ();
        type Error = std::convert::Infallible;

        fn content_hash(&self) -> String {
            sha3_256_hex(self.0.as_bytes())
        }

        fn execute(&self, _: &mut Self::Context) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn signed_tx(cosigners: usize) -> Transaction<Stub> {
        let mut tx = Transaction::with_timestamp("sender", Stub("cmd".into()), 1_700_000_000);
        for _ in 0..cosigners {
            sign_transaction(&mut tx, &KuraKeypair::generate());
        }
        tx
    }

    #[test]
    fn valid_transaction_passes() {
        let tx = signed_tx(1);
        assert!(verify_transaction(&tx, &SignaturePolicy::default()).is_ok());
    }

    #[test]
    fn multi_cosigner_quorum_passes() {
        let tx = signed_tx(3);
        assert!(verify_transaction(&tx, &SignaturePolicy::at_least(3)).is_ok());
    }

    #[test]
    fn unsigned_reports_quorum_not_met() {
        let tx = signed_tx(0);
        match verify_transaction(&tx, &SignaturePolicy::default()) {
            Err(TransactionError::QuorumNotMet {
                required: 1,
                attached: 0,
            }) => {}
            other => panic!("expected QuorumNotMet, got {:?}", other),
        }
    }

    #[test]
    fn insufficient_cosigners_reports_quorum_not_met() {
        let tx = signed_tx(2);
        match verify_transaction(&tx, &SignaturePolicy::at_least(3)) {
            Err(TransactionError::QuorumNotMet {
                required: 3,
                attached: 2,
            }) => {}
            other => panic!("expected QuorumNotMet, got {:?}", other),
        }
    }

    #[test]
    fn zero_floor_accepts_unsigned() {
        let tx = signed_tx(0);
        assert!(verify_transaction(&tx, &SignaturePolicy::at_least(0)).is_ok());
    }

    #[test]
    fn bad_entry_reports_index_and_claimed_key() {
        let mut tx = signed_tx(2);
        tx.add_signature("S2", "bad");
        match verify_transaction(&tx, &SignaturePolicy::default()) {
            Err(TransactionError::InvalidSignature { index: 2, public_key }) => {
                assert_eq!(public_key, "S2");
            }
            other => panic!("expected InvalidSignature, got {:?}", other),
        }
    }

    #[test]
    fn first_failing_entry_wins() {
        let mut tx = Transaction::with_timestamp("sender", Stub("cmd".into()), 1_700_000_000);
        tx.add_signature("garbage", "entry");
        sign_transaction(&mut tx, &KuraKeypair::generate());

        match verify_transaction(&tx, &SignaturePolicy::default()) {
            Err(TransactionError::InvalidSignature { index: 0, .. }) => {}
            other => panic!("expected InvalidSignature at 0, got {:?}", other),
        }
    }

    #[test]
    fn tampered_envelope_reports_hash_mismatch() {
        let tx = signed_tx(1);
        let mut json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&tx).unwrap())
            .unwrap();
        // Rewrite the command payload without refreshing the stored hash.
        json["command"] = serde_json::json!("tampered");
        let tampered: Transaction<Stub> = serde_json::from_value(json).unwrap();

        match verify_transaction(&tampered, &SignaturePolicy::default()) {
            Err(TransactionError::HashMismatch { .. }) => {}
            other => panic!("expected HashMismatch, got {:?}", other),
        }
    }

    #[test]
    fn ok_agrees_with_the_boolean_gate() {
        for cosigners in 0..4 {
            let tx = signed_tx(cosigners);
            let policy = SignaturePolicy::at_least(2);
            assert_eq!(
                verify_transaction(&tx, &policy).is_ok(),
                tx.is_authorized(&policy)
            );
        }
    }
}
