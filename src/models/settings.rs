//! Notification preferences
//!
//! A single process-wide record controlling which notification rules may
//! fire. `enabled` is the master switch and starts off until the user
//! grants notification permission.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{ZenithError, ZenithResult};

/// Notification preferences, persisted as one settings blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Master switch; set true only after permission is granted
    #[serde(default)]
    pub enabled: bool,

    /// Daily "nothing recorded today" reminder
    #[serde(default = "default_true")]
    pub reminders: bool,

    /// Goal halfway / goal reached notifications
    #[serde(default = "default_true")]
    pub goal_milestones: bool,

    /// Monthly spending over the threshold
    #[serde(default = "default_true")]
    pub budget_alerts: bool,

    /// Local time of day the daily reminder fires, "HH:MM"
    #[serde(default = "default_reminder_time")]
    pub reminder_time: String,
}

fn default_true() -> bool {
    true
}

fn default_reminder_time() -> String {
    "20:00".to_string()
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            reminders: true,
            goal_milestones: true,
            budget_alerts: true,
            reminder_time: default_reminder_time(),
        }
    }
}

impl NotificationSettings {
    /// Validate an "HH:MM" reminder time string
    pub fn validate_time(time: &str) -> ZenithResult<()> {
        NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| {
            ZenithError::InvalidInput(format!(
                "'{}' is not a valid time; use 24-hour HH:MM, e.g. 20:00",
                time
            ))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = NotificationSettings::default();
        assert!(!settings.enabled);
        assert!(settings.reminders);
        assert!(settings.goal_milestones);
        assert!(settings.budget_alerts);
        assert_eq!(settings.reminder_time, "20:00");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        // An empty blob must deserialize to the documented defaults
        let settings: NotificationSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, NotificationSettings::default());

        // Partial blobs keep what they carry
        let settings: NotificationSettings =
            serde_json::from_str(r#"{"enabled": true, "reminder_time": "07:30"}"#).unwrap();
        assert!(settings.enabled);
        assert!(settings.reminders);
        assert_eq!(settings.reminder_time, "07:30");
    }

    #[test]
    fn test_validate_time() {
        assert!(NotificationSettings::validate_time("20:00").is_ok());
        assert!(NotificationSettings::validate_time("07:30").is_ok());
        assert!(NotificationSettings::validate_time("24:00").is_err());
        assert!(NotificationSettings::validate_time("8pm").is_err());
        assert!(NotificationSettings::validate_time("").is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut settings = NotificationSettings::default();
        settings.enabled = true;
        settings.budget_alerts = false;
        let json = serde_json::to_string(&settings).unwrap();
        let back: NotificationSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, back);
    }
}
