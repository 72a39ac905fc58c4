//! Endorsing a transaction with a local keypair.
//!
//! Signing is a separate phase from construction because the keypair may not
//! be local at build time: in a multi-signature flow, each co-signer
//! receives the digest, signs it wherever their key lives, and returns the
//! entry to the coordinator. This function is the local-keypair shorthand
//! for that round trip.

use super::envelope::Transaction;
use crate::command::Command;
use crate::crypto::keys::KuraKeypair;

/// Sign a transaction's digest and append the resulting entry.
///
/// The signed message is the digest string's bytes — co-signers endorse the
/// canonical hash, not the raw preimage, so every party signs exactly the
/// same 64 hex characters regardless of how they obtained the transaction.
///
/// The entry carries the keypair's hex public key as its claimed signer.
/// Appending never validates; a signature produced against a different
/// digest (stale copy, wrong transaction) simply fails verification later.
///
/// Returns the transaction reference for chaining.
///
/// # Example
///
/// ```
/// use kura_ledger::crypto::{hash::sha3_256_hex, KuraKeypair};
/// use kura_ledger::transaction::{sign_transaction, Transaction};
/// use kura_ledger::Command;
///
/// #[derive(Default)]
/// struct Noop;
///
/// impl Command for Noop {
///     type Context = ();
///     type Error = std::convert::Infallible;
///     fn content_hash(&self) -> String {
///         sha3_256_hex(b"noop")
///     }
///     fn execute(&self, _: &mut Self::Context) -> Result<(), Self::Error> {
///         Ok(())
///     }
/// }
///
/// let keypair = KuraKeypair::generate();
/// let mut tx = Transaction::new("sender", Noop);
/// sign_transaction(&mut tx, &keypair);
/// assert!(tx.is_valid_signatures());
/// ```
pub fn sign_transaction<'a, C: Command>(
    tx: &'a mut Transaction<C>,
    keypair: &KuraKeypair,
) -> &'a Transaction<C> {
    let digest = tx.hash().to_string();
    let signature = keypair.sign(digest.as_bytes());
    tx.add_signature(&keypair.public_key_hex(), &signature.to_hex());
    tx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash::sha3_256_hex;
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

    fn sample_tx() -> Transaction<Stub> {
        Transaction::with_timestamp("sender-key", Stub("payload".into()), 1_700_000_000)
    }

    #[test]
    fn signing_appends_one_verifying_entry() {
        let mut tx = sample_tx();
        let kp = KuraKeypair::generate();

        assert!(tx.signatures().is_empty());
        sign_transaction(&mut tx, &kp);

        assert_eq!(tx.signatures().len(), 1);
        assert_eq!(tx.signatures()[0].public_key, kp.public_key_hex());
        assert!(tx.is_valid_signatures());
    }

    #[test]
    fn signing_does_not_change_the_hash() {
        let mut tx = sample_tx();
        let before = tx.hash().to_string();
        sign_transaction(&mut tx, &KuraKeypair::generate());
        assert_eq!(tx.hash(), before);
    }

    #[test]
    fn each_cosigner_appends_in_order() {
        let mut tx = sample_tx();
        let kp1 = KuraKeypair::generate();
        let kp2 = KuraKeypair::generate();

        sign_transaction(&mut tx, &kp1);
        sign_transaction(&mut tx, &kp2);

        assert_eq!(tx.signatures().len(), 2);
        assert_eq!(tx.signatures()[0].public_key, kp1.public_key_hex());
        assert_eq!(tx.signatures()[1].public_key, kp2.public_key_hex());
        assert!(tx.is_valid_signatures());
    }

    #[test]
    fn signing_is_deterministic_for_fixed_inputs() {
        let kp = KuraKeypair::generate();

        let mut tx1 = sample_tx();
        let mut tx2 = sample_tx();
        sign_transaction(&mut tx1, &kp);
        sign_transaction(&mut tx2, &kp);

        assert_eq!(tx1.signatures()[0], tx2.signatures()[0]);
    }

    #[test]
    fn signature_from_a_stale_copy_fails_on_the_real_transaction() {
        // A co-signer who signed a different digest contributes a
        // non-verifying entry, which fails the all-or-nothing check.
        let kp = KuraKeypair::generate();
        let stale = Transaction::with_timestamp("sender-key", Stub("older".into()), 1_600_000_000);
        let stale_sig = kp.sign(stale.hash().as_bytes());

        let mut tx = sample_tx();
        tx.add_signature(&kp.public_key_hex(), &stale_sig.to_hex());
        assert!(!tx.is_valid_signatures());
    }
}
