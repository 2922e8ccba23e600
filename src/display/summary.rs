//! Summary display formatting
//!
//! The overview screen: current balance, totals, and small bar charts for
//! category spending and the recent daily series.

use chrono::NaiveDate;

use crate::models::{Category, Money};
use crate::services::balance::Totals;

use super::report::{bar, colored_amount, separator, truncate};

/// Format the headline balance block
pub fn format_overview(
    balance: Money,
    totals: &Totals,
    monthly_expense: Money,
    month_label: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Current balance:   {}\n", colored_amount(balance)));
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!("Total income:      {}\n", totals.income));
    output.push_str(&format!("Total expense:     {}\n", totals.expense));
    output.push_str(&format!(
        "Spent in {}:  {}\n",
        month_label, monthly_expense
    ));

    output
}

/// Format expense-by-category rows as a bar chart, largest first
pub fn format_category_breakdown(rows: &[(Category, Money)]) -> String {
    if rows.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let max = rows
        .iter()
        .map(|(_, amount)| *amount)
        .max()
        .unwrap_or_else(Money::zero);

    let mut output = String::new();
    output.push_str("Spending by category:\n");
    for (category, amount) in rows {
        let ratio = if max.is_zero() {
            0.0
        } else {
            amount.cents() as f64 / max.cents() as f64
        };
        output.push_str(&format!(
            "  {} {} {:>14}\n",
            truncate(&category.to_string(), 9),
            bar(ratio, 16),
            amount.to_string()
        ));
    }

    output
}

/// Format the per-day expense series, oldest first
pub fn format_daily_series(series: &[(NaiveDate, Money)]) -> String {
    if series.is_empty() {
        return String::new();
    }

    let max = series
        .iter()
        .map(|(_, amount)| *amount)
        .max()
        .unwrap_or_else(Money::zero);

    let mut output = String::new();
    output.push_str("Daily spending:\n");
    for (date, amount) in series {
        let ratio = if max.is_zero() {
            0.0
        } else {
            amount.cents() as f64 / max.cents() as f64
        };
        output.push_str(&format!(
            "  {} {} {:>14}\n",
            date.format("%a %Y-%m-%d"),
            bar(ratio, 16),
            amount.to_string()
        ));
    }

    output
}
