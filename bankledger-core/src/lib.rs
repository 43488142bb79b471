//! BankLedger Core
//!
//! Immutable, balanced ledger entries derived from validated transaction
//! intents.
//!
//! # Architecture
//!
//! - **Validated construction**: a [`Transaction`] can only exist in a
//!   shape that is valid for its kind; there is no unvalidated path
//! - **Deterministic expansion**: one transaction expands into its signed
//!   [`LedgerEntry`] set, a transfer's two legs netting to exactly zero
//! - **Append-only storage**: entries are durable facts behind the
//!   [`LedgerStore`] port, appended one batch per transaction
//!
//! # Invariants
//!
//! - Money conservation: a transfer never creates or destroys value
//! - Positive magnitudes: direction lives in the entry sign, not the
//!   transaction amount
//! - Entries are produced only by expansion and never mutated
//! - Exact arithmetic: amounts are `Decimal`, never floating point

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod config;
pub mod entry;
pub mod error;
pub mod expand;
pub mod ledger;
pub mod store;
pub mod transaction;
pub mod types;

// Re-exports
pub use config::{Config, RocksDbConfig};
pub use entry::{EntryType, LedgerEntry};
pub use error::{AccountSide, Error, Result};
pub use expand::expand;
pub use ledger::Ledger;
pub use store::{LedgerStore, MemoryStore, RocksStore};
pub use transaction::{Transaction, TransactionKind};
pub use types::AccountId;
