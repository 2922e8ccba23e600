//! Notification-settings blob
//!
//! Persists the singleton [`NotificationSettings`] record in settings.json.
//! A missing file yields the documented defaults.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ZenithError;
use crate::models::NotificationSettings;

use super::file_io::{read_json, write_json_atomic};

/// Repository for notification preferences
pub struct SettingsRepository {
    path: PathBuf,
    data: RwLock<NotificationSettings>,
}

impl SettingsRepository {
    /// Create a new settings repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(NotificationSettings::default()),
        }
    }

    /// Load settings from disk, falling back to defaults when absent
    pub fn load(&self) -> Result<(), ZenithError> {
        let value: NotificationSettings = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = value;
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), ZenithError> {
        let data = self
            .data
            .read()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get a copy of the current settings
    pub fn get(&self) -> Result<NotificationSettings, ZenithError> {
        let data = self
            .data
            .read()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Replace the settings record
    pub fn set(&self, value: NotificationSettings) -> Result<(), ZenithError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ZenithError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SettingsRepository::new(temp_dir.path().join("settings.json"));
        repo.load().unwrap();
        assert_eq!(repo.get().unwrap(), NotificationSettings::default());
    }

    #[test]
    fn test_set_save_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        let repo = SettingsRepository::new(path.clone());
        repo.load().unwrap();

        let mut settings = NotificationSettings::default();
        settings.enabled = true;
        settings.reminder_time = "07:30".into();
        repo.set(settings.clone()).unwrap();
        repo.save().unwrap();

        let repo2 = SettingsRepository::new(path);
        repo2.load().unwrap();
        assert_eq!(repo2.get().unwrap(), settings);
    }
}
