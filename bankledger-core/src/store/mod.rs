//! Persistence port for ledger entries
//!
//! The pure core (construction, expansion) never calls the store; callers
//! hand one expansion's output to [`LedgerStore::append_entries`] as a
//! single batch, so any reader sees all of a transaction's entries or
//! none. The [`crate::Ledger`] facade encodes that calling convention.

use crate::entry::LedgerEntry;
use crate::error::Result;
use crate::types::AccountId;

mod memory;
mod rocks;

pub use memory::MemoryStore;
pub use rocks::RocksStore;

/// Storage port for ledger entries
pub trait LedgerStore: Send + Sync {
    /// All entries for one account, ascending by timestamp
    ///
    /// Fails with [`crate::Error::InvalidAccountId`] when the account id
    /// is blank.
    fn get_entries(&self, account: &AccountId) -> Result<Vec<LedgerEntry>>;

    /// Append a batch of entries, all-or-nothing
    ///
    /// An empty batch is accepted as a no-op. A batch originating from
    /// one transaction expansion must arrive through a single call.
    fn append_entries(&self, entries: &[LedgerEntry]) -> Result<()>;
}
