//! Notification decision rules
//!
//! Stateless functions that look at a state transition plus the user's
//! preferences and decide whether a notification is due. They never deliver
//! anything themselves; the caller hands the returned [`Notification`] to a
//! delivery capability, and a delivery failure can never affect state.
//!
//! Three independent rules:
//! - daily reminder, driven by the clock;
//! - budget alert, driven by adding an expense;
//! - goal milestone, driven by a goal deposit.

use crate::models::{Money, NotificationSettings};

/// A notification the policy decided to emit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A goal-progress threshold crossed by a single deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    Halfway,
    Reached,
}

/// Daily "nothing recorded today" reminder.
///
/// Fires only when the wall clock matches the configured minute, no
/// transaction is dated today, and the per-day flag says it has not fired
/// yet. The flag keeps a second tick inside the same minute from firing
/// twice.
pub fn daily_reminder(
    settings: &NotificationSettings,
    now_hhmm: &str,
    has_transaction_today: bool,
    already_sent_today: bool,
) -> Option<Notification> {
    if !settings.enabled || !settings.reminders {
        return None;
    }
    if now_hhmm != settings.reminder_time {
        return None;
    }
    if has_transaction_today || already_sent_today {
        return None;
    }
    Some(Notification::new(
        "Daily reminder",
        "You haven't recorded any transactions today. Keep your tracker up to date!",
    ))
}

/// Budget alert after an expense is added.
///
/// Level-triggered: it fires on every expense added while the month's
/// spending stays over the threshold, not just on the first crossing.
pub fn budget_alert(
    settings: &NotificationSettings,
    monthly_expense: Money,
    threshold: Money,
) -> Option<Notification> {
    if !settings.enabled || !settings.budget_alerts {
        return None;
    }
    if monthly_expense <= threshold {
        return None;
    }
    Some(Notification::new(
        "Budget alert",
        format!(
            "Your spending this month reached {}. That's over your {} limit.",
            monthly_expense, threshold
        ),
    ))
}

/// Which milestone, if any, a deposit crossed.
///
/// Edge-triggered on the before/after percentages. The two checks are an
/// if / else if: when one deposit jumps from below 50% to 100% or more,
/// only the reached milestone reports.
pub fn milestone_crossed(old_percent: f64, new_percent: f64) -> Option<Milestone> {
    if new_percent >= 100.0 && old_percent < 100.0 {
        Some(Milestone::Reached)
    } else if new_percent >= 50.0 && old_percent < 50.0 {
        Some(Milestone::Halfway)
    } else {
        None
    }
}

/// Goal milestone notification after a deposit.
///
/// The caller captures `old_percent` from the goal as it was immediately
/// before the deposit; it is never stored anywhere.
pub fn goal_milestone(
    settings: &NotificationSettings,
    goal_title: &str,
    old_percent: f64,
    new_percent: f64,
) -> Option<Notification> {
    if !settings.enabled || !settings.goal_milestones {
        return None;
    }
    match milestone_crossed(old_percent, new_percent)? {
        Milestone::Reached => Some(Notification::new(
            "Goal reached!",
            format!("'{}' is fully funded. Congratulations!", goal_title),
        )),
        Milestone::Halfway => Some(Notification::new(
            "Halfway there!",
            format!("'{}' is 50% funded. Keep going!", goal_title),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled_settings() -> NotificationSettings {
        let mut settings = NotificationSettings::default();
        settings.enabled = true;
        settings
    }

    #[test]
    fn test_daily_reminder_fires_at_configured_minute() {
        let settings = enabled_settings();
        let n = daily_reminder(&settings, "20:00", false, false);
        assert!(n.is_some());
        assert_eq!(n.unwrap().title, "Daily reminder");
    }

    #[test]
    fn test_daily_reminder_respects_every_gate() {
        let settings = enabled_settings();

        // Wrong minute
        assert!(daily_reminder(&settings, "19:59", false, false).is_none());
        // A transaction already recorded today
        assert!(daily_reminder(&settings, "20:00", true, false).is_none());
        // Already sent today
        assert!(daily_reminder(&settings, "20:00", false, true).is_none());

        // Master switch off
        let mut off = enabled_settings();
        off.enabled = false;
        assert!(daily_reminder(&off, "20:00", false, false).is_none());

        // Reminder channel off
        let mut no_reminders = enabled_settings();
        no_reminders.reminders = false;
        assert!(daily_reminder(&no_reminders, "20:00", false, false).is_none());
    }

    #[test]
    fn test_budget_alert_is_level_triggered() {
        let settings = enabled_settings();
        let threshold = Money::from_units(200_000);

        // At the threshold: no alert (strictly greater)
        assert!(budget_alert(&settings, Money::from_units(200_000), threshold).is_none());

        // Over: fires, and fires again for a later expense in the same month
        assert!(budget_alert(&settings, Money::from_units(200_001), threshold).is_some());
        assert!(budget_alert(&settings, Money::from_units(250_000), threshold).is_some());
    }

    #[test]
    fn test_budget_alert_respects_settings() {
        let threshold = Money::from_units(200_000);
        let over = Money::from_units(300_000);

        let mut settings = enabled_settings();
        settings.budget_alerts = false;
        assert!(budget_alert(&settings, over, threshold).is_none());

        let mut settings = NotificationSettings::default();
        settings.budget_alerts = true; // enabled stays false
        assert!(budget_alert(&settings, over, threshold).is_none());
    }

    #[test]
    fn test_milestone_edge_trigger() {
        // 40% -> 55% crosses halfway
        assert_eq!(milestone_crossed(40.0, 55.0), Some(Milestone::Halfway));
        // 55% -> 70% crosses nothing
        assert_eq!(milestone_crossed(55.0, 70.0), None);
        // 90% -> 120% crosses reached
        assert_eq!(milestone_crossed(90.0, 120.0), Some(Milestone::Reached));
        // Already past: staying above fires nothing
        assert_eq!(milestone_crossed(100.0, 150.0), None);
    }

    #[test]
    fn test_milestone_double_cross_reports_only_reached() {
        // One deposit from 10% to 110% crosses both thresholds;
        // only the higher milestone reports
        assert_eq!(milestone_crossed(10.0, 110.0), Some(Milestone::Reached));
    }

    #[test]
    fn test_goal_milestone_messages() {
        let settings = enabled_settings();

        let halfway = goal_milestone(&settings, "Laptop", 40.0, 55.0).unwrap();
        assert_eq!(halfway.title, "Halfway there!");
        assert!(halfway.body.contains("Laptop"));

        let reached = goal_milestone(&settings, "Laptop", 90.0, 120.0).unwrap();
        assert_eq!(reached.title, "Goal reached!");
    }

    #[test]
    fn test_goal_milestone_respects_settings() {
        let mut settings = enabled_settings();
        settings.goal_milestones = false;
        assert!(goal_milestone(&settings, "Laptop", 40.0, 55.0).is_none());

        let disabled = NotificationSettings::default();
        assert!(goal_milestone(&disabled, "Laptop", 40.0, 55.0).is_none());
    }
}
