//! Data directory resolution
//!
//! All state lives in a handful of JSON blobs under one base directory.
//! `ZENITH_DATA_DIR` pins that directory explicitly; otherwise the platform
//! convention applies via `directories` (on Linux
//! `~/.local/share/zenith-fin`, on Windows `%APPDATA%\zenith-fin`).

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ZenithError;

/// Locates the base directory and the blob files inside it
#[derive(Debug, Clone)]
pub struct ZenithPaths {
    base_dir: PathBuf,
}

impl ZenithPaths {
    /// Resolve the data directory, honoring the `ZENITH_DATA_DIR` override
    ///
    /// # Errors
    ///
    /// Returns `Config` when the platform gives us no home directory to
    /// derive a location from.
    pub fn new() -> Result<Self, ZenithError> {
        match std::env::var("ZENITH_DATA_DIR") {
            Ok(custom) => Ok(Self::with_base_dir(custom)),
            Err(_) => {
                let dirs = ProjectDirs::from("", "", "zenith-fin").ok_or_else(|| {
                    ZenithError::Config(
                        "Could not determine a data directory for this user".into(),
                    )
                })?;
                Ok(Self::with_base_dir(dirs.data_dir()))
            }
        }
    }

    /// Pin the base directory, bypassing resolution (used by tests)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the JSON blobs
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    fn blob(&self, name: &str) -> PathBuf {
        self.data_dir().join(name)
    }

    /// Recorded transactions
    pub fn transactions_file(&self) -> PathBuf {
        self.blob("transactions.json")
    }

    /// Savings goals
    pub fn goals_file(&self) -> PathBuf {
        self.blob("goals.json")
    }

    /// The starting balance
    pub fn balance_file(&self) -> PathBuf {
        self.blob("balance.json")
    }

    /// Notification preferences
    pub fn settings_file(&self) -> PathBuf {
        self.blob("settings.json")
    }

    /// Daily-reminder bookkeeping
    pub fn reminders_file(&self) -> PathBuf {
        self.blob("reminders.json")
    }

    /// Every persisted blob, in a fixed order. Reset wipes exactly these.
    pub fn blob_files(&self) -> [PathBuf; 5] {
        [
            self.transactions_file(),
            self.goals_file(),
            self.balance_file(),
            self.settings_file(),
            self.reminders_file(),
        ]
    }

    /// Create the base and data directories if they are missing
    pub fn ensure_directories(&self) -> Result<(), ZenithError> {
        for dir in [self.base_dir.clone(), self.data_dir()] {
            fs::create_dir_all(&dir).map_err(|e| {
                ZenithError::Io(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }
}
