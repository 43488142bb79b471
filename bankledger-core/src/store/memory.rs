//! In-memory entry store
//!
//! Backs tests and ephemeral use; the durable implementation is
//! [`crate::store::RocksStore`].

use parking_lot::RwLock;

use crate::entry::LedgerEntry;
use crate::error::{Error, Result};
use crate::store::LedgerStore;
use crate::types::AccountId;

/// In-memory [`LedgerStore`] backed by a `Vec`
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<Vec<LedgerEntry>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored entries, across all accounts
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when no entries have been stored
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl LedgerStore for MemoryStore {
    fn get_entries(&self, account: &AccountId) -> Result<Vec<LedgerEntry>> {
        if account.is_blank() {
            return Err(Error::InvalidAccountId);
        }

        let entries = self.entries.read();
        let mut result: Vec<LedgerEntry> = entries
            .iter()
            .filter(|e| e.account() == account)
            .cloned()
            .collect();

        // Stable sort: equal timestamps keep append order
        result.sort_by_key(|e| e.timestamp());

        Ok(result)
    }

    fn append_entries(&self, entries: &[LedgerEntry]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        // One extend under the write lock keeps the batch contiguous
        self.entries.write().extend_from_slice(entries);

        tracing::debug!(count = entries.len(), "entry batch appended");

        Ok(())
    }
}
