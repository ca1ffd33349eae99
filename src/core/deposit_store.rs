//! In-memory deposit storage
//!
//! This module provides the `DepositStore` struct, a `HashMap`-backed
//! implementation of [`DepositRepository`] used by the synchronous strategy
//! and by tests.

use crate::core::traits::DepositRepository;
use crate::types::{DepositError, DepositId, TimeDeposit};
use std::collections::HashMap;

/// Stores deposits keyed by id
#[derive(Debug, Default)]
pub struct DepositStore {
    deposits: HashMap<DepositId, TimeDeposit>,
}

impl DepositStore {
    pub fn new() -> Self {
        DepositStore {
            deposits: HashMap::new(),
        }
    }
}

impl DepositRepository for DepositStore {
    fn find_all(&self) -> Vec<TimeDeposit> {
        let mut deposits: Vec<TimeDeposit> = self.deposits.values().cloned().collect();
        deposits.sort_by_key(|deposit| deposit.id);
        deposits
    }

    fn find_by_id(&self, id: DepositId) -> Option<TimeDeposit> {
        self.deposits.get(&id).cloned()
    }

    fn insert(&mut self, deposit: TimeDeposit) -> Result<(), DepositError> {
        if self.deposits.contains_key(&deposit.id) {
            return Err(DepositError::duplicate_deposit(deposit.id));
        }
        self.deposits.insert(deposit.id, deposit);
        Ok(())
    }

    fn save(&mut self, deposit: TimeDeposit) -> TimeDeposit {
        self.deposits.insert(deposit.id, deposit.clone());
        deposit
    }

    fn save_many(&mut self, deposits: Vec<TimeDeposit>) -> Vec<TimeDeposit> {
        let mut saved: Vec<TimeDeposit> = deposits
            .into_iter()
            .map(|deposit| self.save(deposit))
            .collect();
        saved.sort_by_key(|deposit| deposit.id);
        saved
    }

    fn count(&self) -> usize {
        self.deposits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Money;

    fn deposit(id: DepositId, balance: &str) -> TimeDeposit {
        TimeDeposit::parse(id, "basic", balance, 31).unwrap()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = DepositStore::new();
        assert_eq!(store.count(), 0);
        assert!(store.find_all().is_empty());
    }

    #[test]
    fn test_insert_and_find_by_id() {
        let mut store = DepositStore::new();
        store.insert(deposit(1, "100")).unwrap();

        let found = store.find_by_id(1).unwrap();
        assert_eq!(found.balance, Money::from(100));
        assert!(store.find_by_id(2).is_none());
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut store = DepositStore::new();
        store.insert(deposit(1, "100")).unwrap();

        let result = store.insert(deposit(1, "999"));

        assert_eq!(result, Err(DepositError::duplicate_deposit(1)));
        assert_eq!(store.find_by_id(1).unwrap().balance, Money::from(100));
    }

    #[test]
    fn test_find_all_sorted_by_id() {
        let mut store = DepositStore::new();
        for id in [3, 1, 2] {
            store.insert(deposit(id, "10")).unwrap();
        }

        let ids: Vec<DepositId> = store.find_all().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_save_replaces_existing() {
        let mut store = DepositStore::new();
        store.insert(deposit(1, "100")).unwrap();

        store.save(deposit(1, "150.25"));

        assert_eq!(store.count(), 1);
        assert_eq!(store.find_by_id(1).unwrap().balance.to_string(), "150.25");
    }

    #[test]
    fn test_save_many_returns_sorted() {
        let mut store = DepositStore::new();
        let saved = store.save_many(vec![deposit(5, "1"), deposit(2, "2")]);

        assert_eq!(saved.iter().map(|d| d.id).collect::<Vec<_>>(), vec![2, 5]);
        assert_eq!(store.count(), 2);
    }
}
