//! Account index
//!
//! Maps account ids to positions in the caller's account slice. The index
//! holds positions rather than references so the processor can keep mutable
//! access to the slice while looking accounts up.

use crate::types::Account;
use std::collections::HashMap;

/// Lookup from account id to slice position
#[derive(Debug, Clone, Default)]
pub struct AccountIndex {
    positions: HashMap<String, usize>,
}

impl AccountIndex {
    /// Build the index for an ordered account slice
    ///
    /// Duplicate ids are last-write-wins: only the later account is reachable
    /// through [`AccountIndex::get`]. Earlier duplicates still appear in the
    /// post-check sweep and both summaries.
    pub fn build(accounts: &[Account]) -> Self {
        let mut positions = HashMap::with_capacity(accounts.len());
        for (position, account) in accounts.iter().enumerate() {
            positions.insert(account.id.clone(), position);
        }
        AccountIndex { positions }
    }

    /// Position of the account with `id`, if any
    pub fn get(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Number of distinct ids
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the index holds no ids
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_build_indexes_every_account() {
        let accounts = vec![
            Account::checking("C-100", "A. Chen", Decimal::from(250), Decimal::from(100)),
            Account::savings("S-200", "B. Patel", Decimal::from(1200), Decimal::new(2, 2)),
        ];

        let index = AccountIndex::build(&accounts);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("C-100"), Some(0));
        assert_eq!(index.get("S-200"), Some(1));
        assert_eq!(index.get("X-999"), None);
    }

    #[test]
    fn test_duplicate_ids_last_write_wins() {
        let accounts = vec![
            Account::checking("DUP", "First", Decimal::ZERO, Decimal::ZERO),
            Account::savings("OTHER", "Other", Decimal::ZERO, Decimal::ZERO),
            Account::savings("DUP", "Second", Decimal::ZERO, Decimal::ZERO),
        ];

        let index = AccountIndex::build(&accounts);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("DUP"), Some(2));
    }

    #[test]
    fn test_empty_accounts() {
        let index = AccountIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.get("C-100"), None);
    }
}
