//! # Transaction Module
//!
//! The integrity envelope: construction, canonical hashing, multi-signature
//! accumulation, authorization checks, and execution delegation for a single
//! ledger transaction.
//!
//! ## Architecture
//!
//! ```text
//! types.rs      — TxSignature entries and the SignaturePolicy quorum config
//! envelope.rs   — The Transaction<C> envelope itself
//! signing.rs    — sign_transaction: endorse a transaction's digest with a keypair
//! validation.rs — verify_transaction: rich, diagnostic validation
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build** — [`Transaction::new`] binds a sender, a command, and a
//!    creation timestamp; the canonical hash is fixed at this point.
//! 2. **Sign** — co-signers endorse the digest, each appending an entry via
//!    [`Transaction::add_signature`] (or [`sign_transaction`] when the
//!    keypair is local). Collection happens over time; append never
//!    validates.
//! 3. **Validate** — [`Transaction::is_valid_signatures`] for the boolean
//!    gate, [`verify_transaction`] when you need to know *what* failed.
//! 4. **Execute** — [`Transaction::execute`] delegates to the command.
//!
//! Steps 3 and 4 are deliberately independent. The envelope does not enforce
//! validate-before-execute; the orchestrating pipeline MUST. Skipping the
//! check skips the security model.
//!
//! ## Design Decisions
//!
//! - The hash preimage is the unseparated concatenation
//!   `content_hash || timestamp || sender`, preserved byte-for-byte for
//!   compatibility with existing deployments (see
//!   [`Transaction::hash_preimage`]).
//! - Signature entries carry their claimed public key and signature as hex
//!   strings; decoding happens at verification time, and undecodable entries
//!   verify to `false` rather than aborting.
//! - Quorum is an explicit [`SignaturePolicy`] value. The default requires
//!   one valid signature; the literal no-floor rule is available only as a
//!   visible opt-in.

pub mod envelope;
pub mod signing;
pub mod types;
pub mod validation;

pub use envelope::Transaction;
pub use signing::sign_transaction;
pub use types::{SignaturePolicy, TxSignature};
pub use validation::{verify_transaction, TransactionError};
