//! Balance and spending aggregates
//!
//! All figures are derived from the transaction log plus the stored initial
//! balance; nothing here is cached, so the balance can never drift out of
//! sync with the log. The aggregation itself lives in free functions over
//! transaction slices, which keeps them trivially testable, and
//! [`BalanceService`] wires them to a [`Store`].

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::ZenithResult;
use crate::models::{Category, Money, Transaction};
use crate::storage::Store;

/// Income and expense totals over the whole log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
}

impl Totals {
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Sums income and expense over a transaction slice
pub fn totals_of(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for txn in transactions {
        if txn.is_income() {
            totals.income += txn.amount;
        } else {
            totals.expense += txn.amount;
        }
    }
    totals
}

/// Current balance: initial balance plus income minus expense
pub fn balance_of(initial: Money, transactions: &[Transaction]) -> Money {
    let totals = totals_of(transactions);
    initial + totals.income - totals.expense
}

/// Total expense for one calendar month
pub fn monthly_expense_of(transactions: &[Transaction], year: i32, month: u32) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.date.year() == year && t.date.month() == month)
        .map(|t| t.amount)
        .sum()
}

/// Total expense for one day
pub fn daily_expense_of(transactions: &[Transaction], date: NaiveDate) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.date == date)
        .map(|t| t.amount)
        .sum()
}

/// Per-day expense totals for the `days` days ending at `today`,
/// oldest first. Days without expenses appear with a zero amount.
pub fn daily_series_of(
    transactions: &[Transaction],
    today: NaiveDate,
    days: u32,
) -> Vec<(NaiveDate, Money)> {
    (0..days)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back as i64);
            (date, daily_expense_of(transactions, date))
        })
        .collect()
}

/// Expense totals grouped by category, largest first.
/// Categories with no expenses are omitted.
pub fn expense_by_category_of(transactions: &[Transaction]) -> Vec<(Category, Money)> {
    let mut buckets: Vec<(Category, Money)> = Vec::new();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        match buckets.iter_mut().find(|(c, _)| *c == txn.category) {
            Some((_, total)) => *total += txn.amount,
            None => buckets.push((txn.category, txn.amount)),
        }
    }
    buckets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));
    buckets
}

/// Read-side service over the stored log and initial balance
pub struct BalanceService<'a> {
    store: &'a Store,
}

impl<'a> BalanceService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn initial_balance(&self) -> ZenithResult<Money> {
        self.store.balance.get()
    }

    /// Replaces the stored initial balance
    pub fn set_initial_balance(&self, amount: Money) -> ZenithResult<()> {
        self.store.balance.set(amount)?;
        if let Err(e) = self.store.balance.save() {
            log::warn!("could not persist balance, keeping in-memory value: {}", e);
        }
        Ok(())
    }

    pub fn totals(&self) -> ZenithResult<Totals> {
        Ok(totals_of(&self.store.transactions.get_all()?))
    }

    pub fn current_balance(&self) -> ZenithResult<Money> {
        let initial = self.store.balance.get()?;
        Ok(balance_of(initial, &self.store.transactions.get_all()?))
    }

    pub fn monthly_expense(&self, year: i32, month: u32) -> ZenithResult<Money> {
        Ok(monthly_expense_of(
            &self.store.transactions.get_all()?,
            year,
            month,
        ))
    }

    pub fn daily_series(&self, today: NaiveDate, days: u32) -> ZenithResult<Vec<(NaiveDate, Money)>> {
        Ok(daily_series_of(
            &self.store.transactions.get_all()?,
            today,
            days,
        ))
    }

    pub fn expense_by_category(&self) -> ZenithResult<Vec<(Category, Money)>> {
        Ok(expense_by_category_of(&self.store.transactions.get_all()?))
    }
}
