//! Register rendering for the transaction log
//!
//! Amounts carry an explicit sign so income and expense read apart at a
//! glance.

use crate::models::Transaction;

use super::report::truncate;

/// Signed amount string: income gains a plus, expense a minus
pub fn format_signed_amount(txn: &Transaction) -> String {
    if txn.is_income() {
        format!("+{}", txn.amount)
    } else {
        format!("-{}", txn.amount)
    }
}

/// One register row: id, date, category, description, signed amount
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "{} {} {} {} {:>14}",
        txn.id,
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.category.to_string(), 9),
        truncate(&txn.description, 24),
        format_signed_amount(txn)
    )
}

/// The whole log as a register, most recent first
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let rule = "-".repeat(74);
    let mut lines = vec![
        format!(
            "{:12} {:10} {:9} {:24} {:>14}",
            "Id", "Date", "Category", "Description", "Amount"
        ),
        rule.clone(),
    ];
    lines.extend(transactions.iter().map(format_transaction_row));
    lines.push(rule);
    lines.push(format!("{} transaction(s)", transactions.len()));
    lines.push(String::new());

    lines.join("\n")
}
