//! Deterministic expansion of transactions into ledger entries
//!
//! This is the double-entry-preserving core: a transfer expands into a
//! debit leg and a credit leg that sum to exactly zero, so expansion can
//! never create or destroy value. Single-sided kinds expand into one
//! correctly-signed entry.
//!
//! | kind | entries (account, signed amount, type) |
//! |---|---|
//! | `Deposit` | (to, +amount, `Deposit`) |
//! | `Withdrawal` | (from, −amount, `Withdrawal`) |
//! | `Transfer` | (from, −amount, `TransferOut`), (to, +amount, `TransferIn`) |
//! | `Fee` | (from, −amount, `Fee`) |

use crate::entry::{EntryType, LedgerEntry};
use crate::transaction::{Transaction, TransactionKind};

/// Expand a validated transaction into its implied ledger entries
///
/// Pure and deterministic in everything but the fresh entry ids: equal
/// transactions yield entries with identical account, amount, type, and
/// transaction linkage. Every transaction yields one or two entries,
/// never zero.
///
/// Account sides were validated at construction for the transaction's
/// kind and are not re-checked here; the `expect`s below state that
/// invariant. This trust holds because [`Transaction`] is constructible
/// only through its validated path.
pub fn expand(transaction: &Transaction) -> Vec<LedgerEntry> {
    let amount = transaction.amount();

    match transaction.kind() {
        TransactionKind::Deposit => {
            let to = transaction
                .to_account()
                .expect("deposit carries a to account")
                .clone();
            vec![LedgerEntry::from_transaction(
                to,
                amount,
                EntryType::Deposit,
                transaction,
            )]
        }
        TransactionKind::Withdrawal => {
            let from = transaction
                .from_account()
                .expect("withdrawal carries a from account")
                .clone();
            vec![LedgerEntry::from_transaction(
                from,
                -amount,
                EntryType::Withdrawal,
                transaction,
            )]
        }
        TransactionKind::Transfer => {
            let from = transaction
                .from_account()
                .expect("transfer carries a from account")
                .clone();
            let to = transaction
                .to_account()
                .expect("transfer carries a to account")
                .clone();
            // Debit leg first, credit leg second
            vec![
                LedgerEntry::from_transaction(from, -amount, EntryType::TransferOut, transaction),
                LedgerEntry::from_transaction(to, amount, EntryType::TransferIn, transaction),
            ]
        }
        TransactionKind::Fee => {
            let from = transaction
                .from_account()
                .expect("fee carries a from account")
                .clone();
            vec![LedgerEntry::from_transaction(
                from,
                -amount,
                EntryType::Fee,
                transaction,
            )]
        }
    }
}
