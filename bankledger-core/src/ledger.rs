//! High-level ledger facade
//!
//! Ties the validated transaction path, expansion, and the entry store
//! together. Going through [`Ledger::record`] guarantees the calling
//! convention of the store port: one transaction's entries always land
//! as one batch, never split across calls.
//!
//! # Example
//!
//! ```
//! use bankledger_core::{Ledger, Transaction};
//! use rust_decimal::Decimal;
//!
//! # fn main() -> bankledger_core::Result<()> {
//! let ledger = Ledger::in_memory();
//!
//! let tx = Transaction::deposit("A1", Decimal::new(10000, 2))?;
//! let entries = ledger.record(&tx)?;
//! assert_eq!(entries.len(), 1);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::config::Config;
use crate::entry::LedgerEntry;
use crate::error::Result;
use crate::expand::expand;
use crate::store::{LedgerStore, MemoryStore, RocksStore};
use crate::transaction::Transaction;
use crate::types::AccountId;

/// Ledger facade over an entry store
pub struct Ledger {
    store: Arc<dyn LedgerStore>,
}

impl Ledger {
    /// Create a ledger over any entry store
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Ledger over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Ledger over a RocksDB store described by `config`
    pub fn open(config: &Config) -> Result<Self> {
        Ok(Self::new(Arc::new(RocksStore::open(config)?)))
    }

    /// Expand a transaction and append its entries as one batch
    ///
    /// Returns the entries that were appended. Either the full entry set
    /// lands or the store reports an error and nothing does.
    pub fn record(&self, transaction: &Transaction) -> Result<Vec<LedgerEntry>> {
        let entries = expand(transaction);
        self.store.append_entries(&entries)?;

        tracing::debug!(
            transaction_id = %transaction.id(),
            kind = %transaction.kind(),
            entries = entries.len(),
            "transaction recorded"
        );

        Ok(entries)
    }

    /// All entries for one account, ascending by timestamp
    pub fn entries(&self, account: &AccountId) -> Result<Vec<LedgerEntry>> {
        self.store.get_entries(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryType;
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_then_read() {
        let ledger = Ledger::in_memory();

        let tx = Transaction::deposit("A1", dec!(100)).unwrap();
        let recorded = ledger.record(&tx).unwrap();

        let read = ledger.entries(&AccountId::new("A1")).unwrap();
        assert_eq!(read, recorded);
        assert_eq!(read[0].entry_type(), EntryType::Deposit);
    }

    #[test]
    fn test_transfer_records_both_legs() {
        let ledger = Ledger::in_memory();

        let tx = Transaction::transfer("A1", "A2", dec!(25)).unwrap();
        let recorded = ledger.record(&tx).unwrap();
        assert_eq!(recorded.len(), 2);

        assert_eq!(ledger.entries(&AccountId::new("A1")).unwrap().len(), 1);
        assert_eq!(ledger.entries(&AccountId::new("A2")).unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_transaction_never_reaches_the_store() {
        let ledger = Ledger::in_memory();

        // Construction fails, so there is nothing to record
        assert!(Transaction::deposit("A1", dec!(0)).is_err());
        assert!(ledger.entries(&AccountId::new("A1")).unwrap().is_empty());
    }
}
