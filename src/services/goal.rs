//! Goal service
//!
//! Creates savings goals, applies deposits and answers coverage questions.
//! A deposit larger than the current balance is not an error; it comes back
//! as [`DepositOutcome::RequiresConfirmation`] and nothing changes until the
//! caller retries with `confirmed` set.

use log::{info, warn};

use crate::error::{ZenithError, ZenithResult};
use crate::models::{Coverage, Goal, Money};
use crate::services::balance::balance_of;
use crate::services::notification::{self, Notification};
use crate::storage::Store;
use chrono::NaiveDate;

/// Service for savings goals
pub struct GoalService<'a> {
    store: &'a Store,
}

/// Result of asking for a deposit
#[derive(Debug, Clone)]
pub enum DepositOutcome {
    /// The deposit went through
    Applied {
        goal: Goal,
        /// Milestone notification decided from the progress jump, if any
        milestone: Option<Notification>,
    },
    /// The deposit exceeds the current balance and was not applied.
    /// Retry with `confirmed` to apply it anyway.
    RequiresConfirmation {
        goal: Goal,
        balance: Money,
        /// How far the deposit exceeds the balance
        shortfall: Money,
    },
}

impl<'a> GoalService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn create(
        &self,
        title: impl Into<String>,
        target: Money,
        deadline: Option<NaiveDate>,
    ) -> ZenithResult<Goal> {
        let goal = match deadline {
            Some(date) => Goal::with_deadline(title, target, date),
            None => Goal::new(title, target),
        };
        goal.validate()?;

        self.store.goals.insert(goal.clone())?;
        if let Err(e) = self.store.goals.save() {
            warn!("could not persist goals, keeping in-memory state: {}", e);
        }
        info!("created goal '{}' targeting {}", goal.title, goal.target_amount);
        Ok(goal)
    }

    /// Deletes the goal matching `id`. Returns whether anything was
    /// removed; an unknown id is a no-op.
    pub fn delete(&self, id: &str) -> ZenithResult<bool> {
        let Some(target) = self.store.goals.find_id(id)? else {
            return Ok(false);
        };

        let removed = self.store.goals.delete(target)?;
        if removed {
            if let Err(e) = self.store.goals.save() {
                warn!("could not persist goals, keeping in-memory state: {}", e);
            }
            info!("deleted goal {}", target);
        }
        Ok(removed)
    }

    /// Applies `amount` to the goal's saved total.
    ///
    /// When the amount exceeds the current balance the deposit is held back
    /// and reported as [`DepositOutcome::RequiresConfirmation`] unless
    /// `confirmed` is set. The milestone notification is decided from the
    /// completion percentage captured just before the deposit.
    pub fn deposit(&self, id: &str, amount: Money, confirmed: bool) -> ZenithResult<DepositOutcome> {
        if !amount.is_positive() {
            return Err(ZenithError::InvalidInput(
                "Deposit amount must be positive".to_string(),
            ));
        }

        let mut goal = self.resolve(id)?;

        let balance = balance_of(
            self.store.balance.get()?,
            &self.store.transactions.get_all()?,
        );
        if amount > balance && !confirmed {
            return Ok(DepositOutcome::RequiresConfirmation {
                goal,
                balance,
                shortfall: amount - balance,
            });
        }

        let old_percent = goal.percent_complete();
        goal.deposit(amount);
        self.store.goals.update(goal.clone())?;
        if let Err(e) = self.store.goals.save() {
            warn!("could not persist goals, keeping in-memory state: {}", e);
        }
        info!(
            "deposited {} into goal '{}' ({:.0}% funded)",
            amount,
            goal.title,
            goal.percent_complete()
        );

        let settings = self.store.settings.get()?;
        let milestone = notification::goal_milestone(
            &settings,
            &goal.title,
            old_percent,
            goal.percent_complete(),
        );

        Ok(DepositOutcome::Applied { goal, milestone })
    }

    /// The goal plus its coverage against the current balance
    pub fn coverage(&self, id: &str) -> ZenithResult<(Goal, Coverage)> {
        let goal = self.resolve(id)?;
        let balance = balance_of(
            self.store.balance.get()?,
            &self.store.transactions.get_all()?,
        );
        let coverage = goal.coverage(balance);
        Ok((goal, coverage))
    }

    /// Every goal with its coverage, in creation order
    pub fn coverage_all(&self) -> ZenithResult<Vec<(Goal, Coverage)>> {
        let balance = balance_of(
            self.store.balance.get()?,
            &self.store.transactions.get_all()?,
        );
        Ok(self
            .store
            .goals
            .get_all()?
            .into_iter()
            .map(|goal| {
                let coverage = goal.coverage(balance);
                (goal, coverage)
            })
            .collect())
    }

    pub fn list(&self) -> ZenithResult<Vec<Goal>> {
        self.store.goals.get_all()
    }

    pub fn count(&self) -> ZenithResult<usize> {
        self.store.goals.count()
    }

    fn resolve(&self, id: &str) -> ZenithResult<Goal> {
        let goal_id = self
            .store
            .goals
            .find_id(id)?
            .ok_or_else(|| ZenithError::goal_not_found(id))?;
        self.store
            .goals
            .get(goal_id)?
            .ok_or_else(|| ZenithError::goal_not_found(id))
    }
}
