//! Service layer for ZenithFin
//!
//! Business logic on top of the storage layer: recording transactions,
//! derived balances, goal deposits with their confirmation step, and the
//! notification decisions that hang off those operations.

pub mod balance;
pub mod goal;
pub mod notification;
pub mod reminder;
pub mod transaction;

pub use balance::{BalanceService, Totals};
pub use goal::{DepositOutcome, GoalService};
pub use notification::Notification;
pub use reminder::{run_daily_reminder_check, ReminderScheduler};
pub use transaction::{AddedTransaction, TransactionFilter, TransactionService};
