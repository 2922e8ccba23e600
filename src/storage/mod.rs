//! Storage layer for zenith-fin
//!
//! One JSON blob per persisted collection, written atomically on every
//! change. The in-memory state is authoritative for the session; disk is
//! a best-effort mirror that callers refresh with `save` after mutating.

pub mod balance;
pub mod file_io;
pub mod goals;
pub mod reminders;
pub mod settings;
pub mod transactions;

pub use balance::BalanceRepository;
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;
pub use reminders::ReminderRepository;
pub use settings::SettingsRepository;
pub use transactions::TransactionRepository;

use crate::config::paths::ZenithPaths;
use crate::error::ZenithError;

/// Facade over the five repositories
///
/// The blobs are independent: each loads and saves on its own, and
/// no blob holds references into another.
pub struct Store {
    paths: ZenithPaths,
    pub transactions: TransactionRepository,
    pub goals: GoalRepository,
    pub balance: BalanceRepository,
    pub settings: SettingsRepository,
    pub reminders: ReminderRepository,
}

impl Store {
    /// Wire up repositories without reading anything from disk
    pub fn new(paths: ZenithPaths) -> Result<Self, ZenithError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            goals: GoalRepository::new(paths.goals_file()),
            balance: BalanceRepository::new(paths.balance_file()),
            settings: SettingsRepository::new(paths.settings_file()),
            reminders: ReminderRepository::new(paths.reminders_file()),
            paths,
        })
    }

    /// Create a Store and load every blob, applying defaults where files
    /// are missing. This is the one initialization path the application
    /// uses.
    pub fn open(paths: ZenithPaths) -> Result<Self, ZenithError> {
        let store = Self::new(paths)?;
        store.load_all()?;
        Ok(store)
    }

    /// Where this store keeps its files
    pub fn paths(&self) -> &ZenithPaths {
        &self.paths
    }

    /// Load all blobs from disk
    pub fn load_all(&self) -> Result<(), ZenithError> {
        self.transactions.load()?;
        self.goals.load()?;
        self.balance.load()?;
        self.settings.load()?;
        self.reminders.load()?;
        Ok(())
    }

    /// Save all blobs to disk
    pub fn save_all(&self) -> Result<(), ZenithError> {
        self.transactions.save()?;
        self.goals.save()?;
        self.balance.save()?;
        self.settings.save()?;
        self.reminders.save()?;
        Ok(())
    }

    /// Wipe every persisted blob and reinitialize in-memory state to the
    /// defaults. The caller is responsible for having confirmed this.
    pub fn reset(&self) -> Result<(), ZenithError> {
        for file in self.paths.blob_files() {
            file_io::remove_file_if_exists(&file)?;
        }
        // Reload from the now-empty directory to re-apply defaults
        self.load_all()
    }
}
