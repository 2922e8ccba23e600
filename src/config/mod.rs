//! Configuration module for zenith-fin
//!
//! This module provides:
//! - Platform path resolution with an env-var override
//! - Tunable defaults for the notification rules and the reminder loop

use std::time::Duration;

use crate::models::Money;

pub mod paths;

pub use paths::ZenithPaths;

/// Monthly spending above this amount triggers the budget alert.
/// A tunable default, not a contract.
pub const DEFAULT_BUDGET_ALERT_THRESHOLD: Money = Money::from_units(200_000);

/// How often the reminder loop re-evaluates the daily-reminder rule.
/// Must stay under one minute so the configured HH:MM is never skipped.
pub const DEFAULT_REMINDER_TICK: Duration = Duration::from_secs(45);

/// How many days the spending series in the summary covers, today included.
pub const DAILY_SERIES_DAYS: u32 = 7;
