//! Core identifier types for the ledger

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account identifier (account number, IBAN, etc.)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Create new account ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the id is empty or whitespace-only
    ///
    /// Blank ids are never valid at any boundary; the validation and
    /// store layers treat them as absent or reject them outright.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(AccountId::new("").is_blank());
        assert!(AccountId::new("   ").is_blank());
        assert!(AccountId::new("\t\n").is_blank());
        assert!(!AccountId::new("A1").is_blank());
        assert!(!AccountId::new(" A1 ").is_blank());
    }

    #[test]
    fn test_display_roundtrip() {
        let account = AccountId::new("US1234567890");
        assert_eq!(account.to_string(), "US1234567890");
        assert_eq!(account.as_str(), "US1234567890");
    }
}
