//! Transaction intents and their validating constructor
//!
//! A [`Transaction`] records the intent to move money; it is not yet an
//! account-level movement. The only way to obtain one is through the
//! constructors in this module, all of which funnel through the same
//! validation rules, so every observable instance is valid for its kind.
//! Downstream code (expansion, storage) relies on this and does not
//! re-validate.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::error::{AccountSide, Error, Result};
use crate::types::AccountId;

/// Intent-level transaction kind
///
/// Closed set; there is no extension point. The per-kind account shape
/// is enforced at construction:
///
/// | kind | from account | to account |
/// |---|---|---|
/// | `Deposit` | forbidden | required |
/// | `Withdrawal` | required | forbidden |
/// | `Transfer` | required | required |
/// | `Fee` | required | forbidden |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransactionKind {
    /// Money entering an account from outside the ledger
    Deposit,
    /// Money leaving an account to outside the ledger
    Withdrawal,
    /// Money moving between two accounts
    Transfer,
    /// A charge raised against an account
    Fee,
}

impl TransactionKind {
    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::Transfer => "Transfer",
            TransactionKind::Fee => "Fee",
        }
    }

    /// Parse from the canonical name
    ///
    /// This is the only place an unsupported kind can surface; once a
    /// [`TransactionKind`] value exists, the set is closed.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "Deposit" => Ok(TransactionKind::Deposit),
            "Withdrawal" => Ok(TransactionKind::Withdrawal),
            "Transfer" => Ok(TransactionKind::Transfer),
            "Fee" => Ok(TransactionKind::Fee),
            other => Err(Error::UnsupportedKind(other.to_string())),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable, validated intent to move money
///
/// Fields are private: construction goes through [`Transaction::new`] or
/// the named per-kind constructors, and nothing is mutable afterwards.
/// `Deserialize` is intentionally not derived, as it would open an
/// unvalidated construction path.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    id: Uuid,
    timestamp: DateTime<Utc>,
    kind: TransactionKind,
    amount: Decimal,
    from_account: Option<AccountId>,
    to_account: Option<AccountId>,
    description: String,
}

impl Transaction {
    /// Validate and construct a transaction of the given kind
    ///
    /// Fails with [`Error::InvalidAmount`] when `amount <= 0`, with
    /// [`Error::MissingAccountId`] when a side the kind requires is
    /// absent or blank, and with [`Error::UnexpectedAccountId`] when a
    /// side the kind forbids is populated. A blank id on a forbidden
    /// side counts as absent.
    ///
    /// On success the transaction gets a fresh time-ordered id, the
    /// current timestamp, and an empty description; see
    /// [`Transaction::at`] and [`Transaction::with_description`].
    pub fn new(
        kind: TransactionKind,
        amount: Decimal,
        from_account: Option<AccountId>,
        to_account: Option<AccountId>,
    ) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(amount));
        }

        // Blank ids count as absent on both sides
        let from = from_account.filter(|id| !id.is_blank());
        let to = to_account.filter(|id| !id.is_blank());

        match kind {
            TransactionKind::Deposit => {
                require(to.as_ref(), kind, AccountSide::To)?;
                forbid(from.as_ref(), kind, AccountSide::From)?;
            }
            TransactionKind::Withdrawal => {
                require(from.as_ref(), kind, AccountSide::From)?;
                forbid(to.as_ref(), kind, AccountSide::To)?;
            }
            TransactionKind::Transfer => {
                require(from.as_ref(), kind, AccountSide::From)?;
                require(to.as_ref(), kind, AccountSide::To)?;
            }
            TransactionKind::Fee => {
                require(from.as_ref(), kind, AccountSide::From)?;
                forbid(to.as_ref(), kind, AccountSide::To)?;
            }
        }

        Ok(Self {
            id: Uuid::now_v7(),
            timestamp: Utc::now(),
            kind,
            amount,
            from_account: from,
            to_account: to,
            description: String::new(),
        })
    }

    /// Deposit into `to_account`
    pub fn deposit(to_account: impl Into<AccountId>, amount: Decimal) -> Result<Self> {
        Self::new(
            TransactionKind::Deposit,
            amount,
            None,
            Some(to_account.into()),
        )
    }

    /// Withdrawal from `from_account`
    pub fn withdrawal(from_account: impl Into<AccountId>, amount: Decimal) -> Result<Self> {
        Self::new(
            TransactionKind::Withdrawal,
            amount,
            Some(from_account.into()),
            None,
        )
    }

    /// Transfer from `from_account` to `to_account`
    pub fn transfer(
        from_account: impl Into<AccountId>,
        to_account: impl Into<AccountId>,
        amount: Decimal,
    ) -> Result<Self> {
        Self::new(
            TransactionKind::Transfer,
            amount,
            Some(from_account.into()),
            Some(to_account.into()),
        )
    }

    /// Fee charged against `from_account`
    pub fn fee(from_account: impl Into<AccountId>, amount: Decimal) -> Result<Self> {
        Self::new(
            TransactionKind::Fee,
            amount,
            Some(from_account.into()),
            None,
        )
    }

    /// Override the timestamp (backdating, imports)
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the free-form description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Unique transaction id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Point in time the transaction occurred
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Transaction kind
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Positive magnitude being moved
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Source account, when the kind carries one
    pub fn from_account(&self) -> Option<&AccountId> {
        self.from_account.as_ref()
    }

    /// Destination account, when the kind carries one
    pub fn to_account(&self) -> Option<&AccountId> {
        self.to_account.as_ref()
    }

    /// Free-form description (empty when not supplied)
    pub fn description(&self) -> &str {
        &self.description
    }
}

fn require(id: Option<&AccountId>, kind: TransactionKind, side: AccountSide) -> Result<()> {
    if id.is_none() {
        return Err(Error::MissingAccountId { kind, side });
    }
    Ok(())
}

fn forbid(id: Option<&AccountId>, kind: TransactionKind, side: AccountSide) -> Result<()> {
    if id.is_some() {
        return Err(Error::UnexpectedAccountId { kind, side });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccountId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deposit_valid() {
        let tx = Transaction::deposit("A1", dec!(100)).unwrap();
        assert_eq!(tx.kind(), TransactionKind::Deposit);
        assert_eq!(tx.amount(), dec!(100));
        assert_eq!(tx.to_account(), Some(&AccountId::new("A1")));
        assert_eq!(tx.from_account(), None);
        assert_eq!(tx.description(), "");
    }

    #[test]
    fn test_withdrawal_valid() {
        let tx = Transaction::withdrawal("A1", dec!(40)).unwrap();
        assert_eq!(tx.kind(), TransactionKind::Withdrawal);
        assert_eq!(tx.from_account(), Some(&AccountId::new("A1")));
        assert_eq!(tx.to_account(), None);
    }

    #[test]
    fn test_transfer_valid() {
        let tx = Transaction::transfer("A1", "A2", dec!(25)).unwrap();
        assert_eq!(tx.from_account(), Some(&AccountId::new("A1")));
        assert_eq!(tx.to_account(), Some(&AccountId::new("A2")));
    }

    #[test]
    fn test_fee_valid() {
        let tx = Transaction::fee("A1", dec!(5)).unwrap();
        assert_eq!(tx.kind(), TransactionKind::Fee);
        assert_eq!(tx.from_account(), Some(&AccountId::new("A1")));
        assert_eq!(tx.to_account(), None);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let result = Transaction::deposit("A1", Decimal::ZERO);
        assert!(matches!(result, Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn test_negative_amount_rejected_for_every_kind() {
        let amount = dec!(-10);
        assert!(matches!(
            Transaction::deposit("A1", amount),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            Transaction::withdrawal("A1", amount),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            Transaction::transfer("A1", "A2", amount),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            Transaction::fee("A1", amount),
            Err(Error::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_deposit_requires_to_account() {
        let result = Transaction::new(TransactionKind::Deposit, dec!(10), None, None);
        assert!(matches!(
            result,
            Err(Error::MissingAccountId {
                kind: TransactionKind::Deposit,
                side: AccountSide::To,
            })
        ));
    }

    #[test]
    fn test_deposit_forbids_from_account() {
        let result = Transaction::new(
            TransactionKind::Deposit,
            dec!(10),
            Some(AccountId::new("A1")),
            Some(AccountId::new("A2")),
        );
        assert!(matches!(
            result,
            Err(Error::UnexpectedAccountId {
                kind: TransactionKind::Deposit,
                side: AccountSide::From,
            })
        ));
    }

    #[test]
    fn test_withdrawal_forbids_to_account() {
        let result = Transaction::new(
            TransactionKind::Withdrawal,
            dec!(10),
            Some(AccountId::new("A1")),
            Some(AccountId::new("A2")),
        );
        assert!(matches!(
            result,
            Err(Error::UnexpectedAccountId {
                kind: TransactionKind::Withdrawal,
                side: AccountSide::To,
            })
        ));
    }

    #[test]
    fn test_fee_requires_from_account() {
        let result = Transaction::new(TransactionKind::Fee, dec!(10), None, None);
        assert!(matches!(
            result,
            Err(Error::MissingAccountId {
                kind: TransactionKind::Fee,
                side: AccountSide::From,
            })
        ));
    }

    #[test]
    fn test_blank_required_side_is_missing() {
        // The error names which side was blank
        let result = Transaction::transfer("", "A2", dec!(10));
        assert!(matches!(
            result,
            Err(Error::MissingAccountId {
                kind: TransactionKind::Transfer,
                side: AccountSide::From,
            })
        ));

        let result = Transaction::transfer("A1", "   ", dec!(10));
        assert!(matches!(
            result,
            Err(Error::MissingAccountId {
                kind: TransactionKind::Transfer,
                side: AccountSide::To,
            })
        ));
    }

    #[test]
    fn test_blank_forbidden_side_counts_as_absent() {
        let tx = Transaction::new(
            TransactionKind::Deposit,
            dec!(10),
            Some(AccountId::new("  ")),
            Some(AccountId::new("A1")),
        )
        .unwrap();
        assert_eq!(tx.from_account(), None);
    }

    #[test]
    fn test_amount_checked_before_account_shape() {
        // Both violations present: the amount rule wins
        let result = Transaction::new(TransactionKind::Transfer, dec!(0), None, None);
        assert!(matches!(result, Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn test_timestamp_defaults_to_now_and_can_be_overridden() {
        let before = Utc::now();
        let tx = Transaction::deposit("A1", dec!(1)).unwrap();
        let after = Utc::now();
        assert!(tx.timestamp() >= before && tx.timestamp() <= after);

        let backdated = Utc::now() - chrono::Duration::days(30);
        let tx = Transaction::deposit("A1", dec!(1)).unwrap().at(backdated);
        assert_eq!(tx.timestamp(), backdated);
    }

    #[test]
    fn test_description_override() {
        let tx = Transaction::fee("A1", dec!(2))
            .unwrap()
            .with_description("monthly account fee");
        assert_eq!(tx.description(), "monthly account fee");
    }

    #[test]
    fn test_fresh_ids() {
        let a = Transaction::deposit("A1", dec!(1)).unwrap();
        let b = Transaction::deposit("A1", dec!(1)).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(
            TransactionKind::parse("Deposit").unwrap(),
            TransactionKind::Deposit
        );
        assert_eq!(
            TransactionKind::parse("Transfer").unwrap(),
            TransactionKind::Transfer
        );
        assert!(matches!(
            TransactionKind::parse("Chargeback"),
            Err(Error::UnsupportedKind(_))
        ));
    }
}
