//! Core data models for zenith-fin
//!
//! This module contains all the data structures that represent the tracker
//! domain: transactions, savings goals, notification settings, money.

pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod settings;
pub mod transaction;

pub use category::Category;
pub use goal::{Coverage, Goal};
pub use ids::{GoalId, TransactionId};
pub use money::Money;
pub use settings::NotificationSettings;
pub use transaction::{NewTransaction, Transaction, TransactionKind};
