//! Daily-reminder sent flag
//!
//! Records the calendar day the daily reminder last fired so a second tick
//! in the same minute (or a restart) cannot re-fire it. The flag is keyed
//! by date: it only counts as "sent" while the stored date equals today,
//! so it resets naturally at midnight without any cleanup.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ZenithError;

use super::file_io::{read_json, write_json_atomic};

/// Serializable reminder state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct ReminderLog {
    /// The day the reminder last fired, if ever
    last_sent: Option<NaiveDate>,
}

/// Repository for the per-day reminder flag
pub struct ReminderRepository {
    path: PathBuf,
    data: RwLock<ReminderLog>,
}

impl ReminderRepository {
    /// Create a new reminder repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(ReminderLog::default()),
        }
    }

    /// Load the flag from disk; a missing file means never sent
    pub fn load(&self) -> Result<(), ZenithError> {
        let value: ReminderLog = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = value;
        Ok(())
    }

    /// Save the flag to disk
    pub fn save(&self) -> Result<(), ZenithError> {
        let data = self
            .data
            .read()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Whether the reminder already fired on `date`
    pub fn was_sent(&self, date: NaiveDate) -> Result<bool, ZenithError> {
        let data = self
            .data
            .read()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.last_sent == Some(date))
    }

    /// Mark the reminder as fired on `date`
    pub fn mark_sent(&self, date: NaiveDate) -> Result<(), ZenithError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.last_sent = Some(date);
        Ok(())
    }
}
