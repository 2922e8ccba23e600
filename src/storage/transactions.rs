//! The transaction log, backed by transactions.json
//!
//! Canonical order is most-recent-first by insertion. A backdated entry
//! stays where it was inserted, it is not re-sorted.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::ZenithError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// On-disk shape of transactions.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for the ordered transaction log
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk, keeping file order
    pub fn load(&self) -> Result<(), ZenithError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.transactions;
        Ok(())
    }

    /// Save transactions to disk in their stored order
    pub fn save(&self) -> Result<(), ZenithError> {
        let data = self
            .data
            .read()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = TransactionData {
            transactions: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Prepend a transaction; the newest entry is always first
    pub fn insert_front(&self, txn: Transaction) -> Result<(), ZenithError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(0, txn);
        Ok(())
    }

    /// Delete a transaction; returns whether anything was removed.
    /// Deleting an absent id is a no-op, not an error.
    pub fn delete(&self, id: TransactionId) -> Result<bool, ZenithError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|t| t.id != id);
        Ok(data.len() < before)
    }

    /// Get all transactions, most-recent-first
    pub fn get_all(&self) -> Result<Vec<Transaction>, ZenithError> {
        let data = self
            .data
            .read()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Whether any transaction is dated exactly `date`
    pub fn any_on(&self, date: NaiveDate) -> Result<bool, ZenithError> {
        let data = self
            .data
            .read()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().any(|t| t.date == date))
    }

    /// Resolve a user-supplied id string (full UUID or short display form)
    pub fn find_id(&self, id_str: &str) -> Result<Option<TransactionId>, ZenithError> {
        let data = self
            .data
            .read()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|t| t.id.matches(id_str)).map(|t| t.id))
    }

    /// Number of transactions in the log
    pub fn count(&self) -> Result<usize, ZenithError> {
        let data = self
            .data
            .read()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, NewTransaction, TransactionKind};
    use tempfile::TempDir;

    fn repo_in_tmp() -> (TempDir, TransactionRepository) {
        let tmp = TempDir::new().unwrap();
        let repo = TransactionRepository::new(tmp.path().join("transactions.json"));
        (tmp, repo)
    }

    fn txn(description: &str, day: u32) -> Transaction {
        Transaction::from_input(NewTransaction {
            description: description.into(),
            amount: Money::from_cents(5000),
            category: Category::Food,
            date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            kind: TransactionKind::Expense,
        })
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_tmp, repo) = repo_in_tmp();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_front_keeps_newest_first() {
        let (_tmp, repo) = repo_in_tmp();
        repo.load().unwrap();

        repo.insert_front(txn("first", 10)).unwrap();
        repo.insert_front(txn("second", 5)).unwrap(); // backdated but newest insert
        repo.insert_front(txn("third", 20)).unwrap();

        let all = repo.get_all().unwrap();
        let descriptions: Vec<_> = all.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (tmp, repo) = repo_in_tmp();
        repo.load().unwrap();

        repo.insert_front(txn("first", 10)).unwrap();
        repo.insert_front(txn("second", 5)).unwrap();
        repo.save().unwrap();

        let path = tmp.path().join("transactions.json");
        let repo2 = TransactionRepository::new(path);
        repo2.load().unwrap();

        let original = repo.get_all().unwrap();
        let reloaded = repo2.get_all().unwrap();
        assert_eq!(original, reloaded);
        assert_eq!(reloaded[0].description, "second");
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (_tmp, repo) = repo_in_tmp();
        repo.load().unwrap();

        let t = txn("lunch", 15);
        let id = t.id;
        repo.insert_front(t).unwrap();

        assert!(repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);

        // Second delete of the same id removes nothing and does not error
        assert!(!repo.delete(id).unwrap());
    }

    #[test]
    fn test_any_on() {
        let (_tmp, repo) = repo_in_tmp();
        repo.load().unwrap();

        repo.insert_front(txn("lunch", 15)).unwrap();

        assert!(repo
            .any_on(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
            .unwrap());
        assert!(!repo
            .any_on(NaiveDate::from_ymd_opt(2025, 1, 16).unwrap())
            .unwrap());
    }

    #[test]
    fn test_find_id_by_short_form() {
        let (_tmp, repo) = repo_in_tmp();
        repo.load().unwrap();

        let t = txn("lunch", 15);
        let id = t.id;
        repo.insert_front(t).unwrap();

        let short = id.to_string();
        assert_eq!(repo.find_id(&short).unwrap(), Some(id));
        assert_eq!(repo.find_id("txn-ffffffff").unwrap(), None);
    }
}
