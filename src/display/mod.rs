//! Display formatting for terminal output
//!
//! Pure string builders for the CLI layer. Nothing in here touches the
//! store; handlers fetch the data and these functions lay it out.

pub mod goal;
pub mod report;
pub mod summary;
pub mod transaction;

pub use goal::{format_goal_details, format_goal_list};
pub use summary::{format_category_breakdown, format_daily_series, format_overview};
pub use transaction::format_transaction_register;
