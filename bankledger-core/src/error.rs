//! Error types for the ledger

use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

use crate::transaction::TransactionKind;

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which account role a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountSide {
    /// The debited (source) side
    From,
    /// The credited (destination) side
    To,
}

impl fmt::Display for AccountSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountSide::From => write!(f, "from"),
            AccountSide::To => write!(f, "to"),
        }
    }
}

/// Ledger errors
#[derive(Error, Debug)]
pub enum Error {
    /// Transaction amount was zero or negative
    #[error("invalid amount {0}: a transaction always carries a positive magnitude")]
    InvalidAmount(Decimal),

    /// A kind-required account id was absent or blank
    #[error("{kind} requires a {side} account id")]
    MissingAccountId {
        /// Kind being constructed
        kind: TransactionKind,
        /// Side that was missing
        side: AccountSide,
    },

    /// A kind-forbidden account id was populated
    #[error("{kind} must not carry a {side} account id")]
    UnexpectedAccountId {
        /// Kind being constructed
        kind: TransactionKind,
        /// Side that was unexpectedly present
        side: AccountSide,
    },

    /// Transaction kind outside the supported set
    #[error("unsupported transaction kind: {0}")]
    UnsupportedKind(String),

    /// Blank account id at the store boundary
    #[error("account id must not be blank")]
    InvalidAccountId,

    /// Storage error (RocksDB)
    #[error("storage error: {0}")]
    Storage(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rocksdb::Error> for Error {
    fn from(err: rocksdb::Error) -> Self {
        Error::Storage(err.to_string())
    }
}
