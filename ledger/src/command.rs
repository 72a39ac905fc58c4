//! The command seam.
//!
//! A [`Transaction`](crate::Transaction) owns exactly one command but never
//! looks inside it. Two capabilities are all the envelope needs: a
//! deterministic content digest (which feeds the transaction hash) and an
//! execution entry point (which the envelope delegates to, unguarded).
//!
//! Command variants, their parameters, and what execution actually does to
//! the ledger are collaborator concerns. Keeping them behind this trait means
//! the integrity core compiles, tests, and audits without a single domain
//! type in sight.

/// A domain command carried by a transaction.
///
/// Implementations must keep [`content_hash`](Command::content_hash)
/// deterministic: the same command value must always produce the same digest
/// string, across calls and across processes. The transaction hash — and
/// therefore every signature — is only as stable as this function.
///
/// The associated types keep the execution side fully opaque:
///
/// - `Context` is the handle through which the command applies its effects
///   (account state, ledger storage, whatever the domain needs). The
///   envelope passes it through untouched.
/// - `Error` is the command's own failure type. The envelope propagates it
///   unchanged — no wrapping, no retries, no recovery.
///
/// # Example
///
/// ```
/// use kura_ledger::command::Command;
/// use kura_ledger::crypto::hash::sha3_256_hex;
///
/// struct Credit {
///     account: String,
///     amount: u64,
/// }
///
/// impl Command for Credit {
///     type Context = std::collections::HashMap<String, u64>;
///     type Error = std::convert::Infallible;
///
///     fn content_hash(&self) -> String {
///         sha3_256_hex(format!("credit:{}:{}", self.account, self.amount).as_bytes())
///     }
///
///     fn execute(&self, balances: &mut Self::Context) -> Result<(), Self::Error> {
///         *balances.entry(self.account.clone()).or_default() += self.amount;
///         Ok(())
///     }
/// }
/// ```
pub trait Command {
    /// Opaque execution handle. Owned and defined by the collaborator that
    /// applies command effects; the envelope never inspects it.
    type Context;

    /// The command's own execution failure type, propagated unchanged.
    type Error: std::error::Error;

    /// Deterministic digest of the command's semantic parameters.
    ///
    /// The returned string is embedded verbatim in the transaction hash
    /// preimage, so its rendering is part of the wire format.
    fn content_hash(&self) -> String;

    /// Apply the command's effects through the given context.
    fn execute(&self, context: &mut Self::Context) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash::sha3_256_hex;

    #[derive(Default)]
    struct Append {
        tag: String,
    }

    impl Command for Append {
        type Context = Vec<String>;
        type Error = std::convert::Infallible;

        fn content_hash(&self) -> String {
            sha3_256_hex(self.tag.as_bytes())
        }

        fn execute(&self, log: &mut Self::Context) -> Result<(), Self::Error> {
            log.push(self.tag.clone());
            Ok(())
        }
    }

    #[test]
    fn content_hash_is_deterministic() {
        let cmd = Append { tag: "alpha".into() };
        assert_eq!(cmd.content_hash(), cmd.content_hash());
    }

    #[test]
    fn execute_applies_effects_through_context() {
        let cmd = Append { tag: "beta".into() };
        let mut log = Vec::new();
        cmd.execute(&mut log).unwrap();
        cmd.execute(&mut log).unwrap();
        assert_eq!(log, vec!["beta".to_string(), "beta".to_string()]);
    }
}
