//! Ledger entries: the durable facts of the ledger
//!
//! A [`LedgerEntry`] is one signed movement against one account. Entries
//! are only ever produced by [`crate::expand`] and never mutated; account
//! balances are a fold over entries, not stored state.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::transaction::Transaction;
use crate::types::AccountId;

/// Entry type tag
///
/// Finer-grained than [`crate::TransactionKind`]: the two legs of a
/// transfer are distinguishable on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    /// Credit from outside the ledger
    Deposit,
    /// Debit to outside the ledger
    Withdrawal,
    /// Credit leg of a transfer
    TransferIn,
    /// Debit leg of a transfer
    TransferOut,
    /// Fee debit
    Fee,
    /// Reserved; no expansion rule produces this yet
    OverdraftFee,
}

/// A single signed movement against one account
///
/// `amount` is signed: positive credits the account, negative debits it.
/// Timestamp and description are inherited from the originating
/// transaction, and `transaction_id` links back to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    id: Uuid,
    timestamp: DateTime<Utc>,
    account: AccountId,
    amount: Decimal,
    entry_type: EntryType,
    transaction_id: Uuid,
    description: String,
}

impl LedgerEntry {
    // Entries only come out of transaction expansion.
    pub(crate) fn from_transaction(
        account: AccountId,
        amount: Decimal,
        entry_type: EntryType,
        transaction: &Transaction,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            timestamp: transaction.timestamp(),
            account,
            amount,
            entry_type,
            transaction_id: transaction.id(),
            description: transaction.description().to_string(),
        }
    }

    /// Unique entry id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Point in time of the originating transaction
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The single account this entry affects
    pub fn account(&self) -> &AccountId {
        &self.account
    }

    /// Signed amount; positive = credit, negative = debit
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Entry type tag
    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    /// Originating transaction id
    pub fn transaction_id(&self) -> Uuid {
        self.transaction_id
    }

    /// Description inherited from the originating transaction
    pub fn description(&self) -> &str {
        &self.description
    }
}
