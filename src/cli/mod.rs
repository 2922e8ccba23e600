//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod balance;
pub mod export;
pub mod goal;
pub mod notifications;
pub mod transaction;

pub use balance::{handle_balance_command, BalanceCommands};
pub use export::{handle_export_command, ExportCommands, ExportFormat};
pub use goal::{handle_goal_command, GoalCommands};
pub use notifications::{handle_notification_command, NotificationCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
