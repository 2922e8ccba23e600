//! CSV export functionality
//!
//! Exports the transaction log and the goal list as flat CSV tables.
//! Amounts are written as plain decimals without the currency suffix so
//! spreadsheets treat them as numbers.

use std::io::Write;

use csv::Writer;

use crate::error::{ZenithError, ZenithResult};
use crate::storage::Store;

fn decimal(cents: i64) -> String {
    format!("{:.2}", cents as f64 / 100.0)
}

/// Export all transactions to CSV, in stored order
pub fn export_transactions_csv<W: Write>(store: &Store, writer: &mut W) -> ZenithResult<()> {
    let mut wtr = Writer::from_writer(writer);

    wtr.write_record(["Id", "Date", "Kind", "Category", "Description", "Amount"])?;

    for txn in store.transactions.get_all()? {
        wtr.write_record([
            txn.id.to_string(),
            txn.date.to_string(),
            txn.kind.to_string(),
            txn.category.to_string(),
            txn.description.clone(),
            decimal(txn.amount.cents()),
        ])?;
    }

    wtr.flush()
        .map_err(|e| ZenithError::Export(e.to_string()))?;
    Ok(())
}

/// Export all goals to CSV, in creation order
pub fn export_goals_csv<W: Write>(store: &Store, writer: &mut W) -> ZenithResult<()> {
    let mut wtr = Writer::from_writer(writer);

    wtr.write_record(["Id", "Title", "Target", "Saved", "Deadline"])?;

    for goal in store.goals.get_all()? {
        let deadline = goal
            .deadline
            .map(|d| d.to_string())
            .unwrap_or_default();
        wtr.write_record([
            goal.id.to_string(),
            goal.title.clone(),
            decimal(goal.target_amount.cents()),
            decimal(goal.current_amount.cents()),
            deadline,
        ])?;
    }

    wtr.flush()
        .map_err(|e| ZenithError::Export(e.to_string()))?;
    Ok(())
}
