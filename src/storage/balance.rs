//! Initial-balance blob
//!
//! The user-set baseline the net of all transactions is added to. Stored
//! as a single number (cents) in balance.json.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ZenithError;
use crate::models::Money;

use super::file_io::{read_json, write_json_atomic};

/// Repository for the initial balance
pub struct BalanceRepository {
    path: PathBuf,
    data: RwLock<Money>,
}

impl BalanceRepository {
    /// Create a new balance repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Money::zero()),
        }
    }

    /// Load the initial balance from disk; a missing file means zero
    pub fn load(&self) -> Result<(), ZenithError> {
        let value: Money = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = value;
        Ok(())
    }

    /// Save the initial balance to disk
    pub fn save(&self) -> Result<(), ZenithError> {
        let data = self
            .data
            .read()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get the initial balance
    pub fn get(&self) -> Result<Money, ZenithError> {
        let data = self
            .data
            .read()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(*data)
    }

    /// Set the initial balance
    pub fn set(&self, value: Money) -> Result<(), ZenithError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = value;
        Ok(())
    }
}
