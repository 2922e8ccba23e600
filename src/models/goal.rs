//! Savings goal model and coverage math
//!
//! A goal accumulates deposits toward a target amount, independent of the
//! main balance ledger. Coverage answers "how much of the target could I
//! satisfy right now" by combining the saved amount with the current
//! balance.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

use crate::error::{ZenithError, ZenithResult};

/// A savings target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// What the user is saving for
    pub title: String,

    /// The amount to reach
    pub target_amount: Money,

    /// Amount deposited so far. Unclamped: deposits past the target are
    /// kept as-is and only clamped to 100% in coverage/display math.
    pub current_amount: Money,

    /// Optional target date; informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

/// How much of a goal's target is satisfiable right now
///
/// Percentages are unrounded f64; amounts are exact [`Money`]. Display code
/// rounds to whole percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    /// Percent of target already saved, clamped to 100
    pub saved_progress: f64,
    /// Percent of target the current balance could add on top of savings
    pub balance_contribution: f64,
    /// Percent of target covered by savings plus balance, clamped to 100
    pub total_coverage: f64,
    /// Amount still missing from the target (0 when saved >= target)
    pub missing_from_target: Money,
    /// Amount the balance falls short of the missing part (0 when coverable)
    pub deficit: Money,
    /// Whether the current balance alone covers the missing part
    pub can_cover_now: bool,
}

impl Goal {
    /// Create a goal with nothing saved yet and a fresh id
    pub fn new(title: impl Into<String>, target_amount: Money) -> Self {
        Self {
            id: GoalId::new(),
            title: title.into(),
            target_amount,
            current_amount: Money::zero(),
            deadline: None,
        }
    }

    /// Create a goal with a deadline
    pub fn with_deadline(
        title: impl Into<String>,
        target_amount: Money,
        deadline: NaiveDate,
    ) -> Self {
        let mut goal = Self::new(title, target_amount);
        goal.deadline = Some(deadline);
        goal
    }

    /// Validate a goal before it enters the list
    pub fn validate(&self) -> ZenithResult<()> {
        if self.title.trim().is_empty() {
            return Err(ZenithError::InvalidInput("title must not be empty".into()));
        }
        if !self.target_amount.is_positive() {
            return Err(ZenithError::InvalidInput(
                "target amount must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Add to the saved amount. The caller decides whether the deposit is
    /// allowed; this method applies it unconditionally.
    pub fn deposit(&mut self, amount: Money) {
        self.current_amount += amount;
    }

    /// Percent of target saved, unclamped (a goal at 120% reports 120)
    pub fn percent_complete(&self) -> f64 {
        self.current_amount.percent_of(self.target_amount)
    }

    /// Coverage of this goal given the current balance
    ///
    /// A non-positive target (possible only in hand-edited data files)
    /// degrades to fully-saved coverage instead of propagating NaN.
    pub fn coverage(&self, current_balance: Money) -> Coverage {
        if !self.target_amount.is_positive() {
            return Coverage {
                saved_progress: 100.0,
                balance_contribution: 0.0,
                total_coverage: 100.0,
                missing_from_target: Money::zero(),
                deficit: Money::zero(),
                can_cover_now: true,
            };
        }

        let saved_progress = self.percent_complete().min(100.0);
        let missing_from_target =
            (self.target_amount - self.current_amount).max(Money::zero());
        let balance_contribution = (current_balance.percent_of(self.target_amount))
            .min(100.0 - saved_progress);
        let total_coverage = ((self.current_amount + current_balance)
            .percent_of(self.target_amount))
        .min(100.0);
        let can_cover_now = current_balance >= missing_from_target;
        let deficit = if can_cover_now {
            Money::zero()
        } else {
            missing_from_target - current_balance
        };

        Coverage {
            saved_progress,
            balance_contribution,
            total_coverage,
            missing_from_target,
            deficit,
            can_cover_now,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {}",
            self.title, self.current_amount, self.target_amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_goal_starts_empty() {
        let goal = Goal::new("Emergency fund", Money::from_units(1000));
        assert_eq!(goal.current_amount, Money::zero());
        assert!(goal.deadline.is_none());
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let empty = Goal::new("  ", Money::from_units(100));
        assert!(empty.validate().unwrap_err().is_invalid_input());

        let zero_target = Goal::new("Trip", Money::zero());
        assert!(zero_target.validate().is_err());
    }

    #[test]
    fn test_coverage_worked_example() {
        // target 1000, saved 400, balance 700
        let mut goal = Goal::new("Laptop", Money::from_units(1000));
        goal.deposit(Money::from_units(400));

        let cov = goal.coverage(Money::from_units(700));
        assert_eq!(cov.saved_progress, 40.0);
        assert_eq!(cov.missing_from_target, Money::from_units(600));
        assert_eq!(cov.balance_contribution, 60.0); // min(100-40, 70)
        assert_eq!(cov.total_coverage, 100.0); // min(100, 110)
        assert!(cov.can_cover_now); // 700 >= 600
        assert_eq!(cov.deficit, Money::zero());
    }

    #[test]
    fn test_coverage_with_deficit() {
        let mut goal = Goal::new("Laptop", Money::from_units(1000));
        goal.deposit(Money::from_units(100));

        let cov = goal.coverage(Money::from_units(200));
        assert_eq!(cov.saved_progress, 10.0);
        assert_eq!(cov.missing_from_target, Money::from_units(900));
        assert_eq!(cov.balance_contribution, 20.0);
        assert_eq!(cov.total_coverage, 30.0);
        assert!(!cov.can_cover_now);
        assert_eq!(cov.deficit, Money::from_units(700));
    }

    #[test]
    fn test_coverage_overfunded_goal_clamps_at_display_math() {
        let mut goal = Goal::new("Phone", Money::from_units(500));
        goal.deposit(Money::from_units(600));

        assert_eq!(goal.percent_complete(), 120.0); // stored value unclamped
        let cov = goal.coverage(Money::zero());
        assert_eq!(cov.saved_progress, 100.0);
        assert_eq!(cov.missing_from_target, Money::zero());
        assert_eq!(cov.balance_contribution, 0.0);
        assert_eq!(cov.total_coverage, 100.0);
        assert!(cov.can_cover_now);

        // A negative balance counts against coverage even when fully saved
        let cov = goal.coverage(Money::from_units(-50));
        assert!(!cov.can_cover_now);
        assert_eq!(cov.deficit, Money::from_units(50));
    }

    #[test]
    fn test_coverage_zero_target_degrades_without_nan() {
        let goal = Goal {
            id: GoalId::new(),
            title: "Broken".into(),
            target_amount: Money::zero(),
            current_amount: Money::zero(),
            deadline: None,
        };
        let cov = goal.coverage(Money::from_units(50));
        assert_eq!(cov.saved_progress, 100.0);
        assert_eq!(cov.missing_from_target, Money::zero());
        assert_eq!(cov.deficit, Money::zero());
        assert!(cov.can_cover_now);
    }

    #[test]
    fn test_serialization_round_trip() {
        let goal = Goal::with_deadline(
            "Trip",
            Money::from_units(2500),
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
        );
        let json = serde_json::to_string(&goal).unwrap();
        let back: Goal = serde_json::from_str(&json).unwrap();
        assert_eq!(goal, back);
    }

    #[test]
    fn test_deadline_omitted_from_json_when_absent() {
        let goal = Goal::new("Trip", Money::from_units(100));
        let json = serde_json::to_string(&goal).unwrap();
        assert!(!json.contains("deadline"));
    }
}
