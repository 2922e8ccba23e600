//! Transaction service
//!
//! Records and removes transactions on the stored log and evaluates the
//! budget alert after each expense. The log keeps most recently recorded
//! first, so a backdated entry still shows up at the top until something
//! newer is added.

use log::{info, warn};

use crate::config::DEFAULT_BUDGET_ALERT_THRESHOLD;
use crate::error::ZenithResult;
use crate::models::{Category, NewTransaction, Transaction, TransactionKind};
use crate::services::balance::monthly_expense_of;
use crate::services::notification::{self, Notification};
use crate::storage::Store;
use chrono::Datelike;

/// Service for recording and browsing transactions
pub struct TransactionService<'a> {
    store: &'a Store,
}

/// Options for narrowing a transaction listing
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the description
    pub search: Option<String>,
    /// Only income or only expense
    pub kind: Option<TransactionKind>,
    /// Only one category
    pub category: Option<Category>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, needle: impl Into<String>) -> Self {
        self.search = Some(needle.into());
        self
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        if let Some(needle) = &self.search {
            if !txn
                .description
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }
        if let Some(category) = self.category {
            if txn.category != category {
                return false;
            }
        }
        true
    }
}

/// Result of recording a transaction
#[derive(Debug, Clone)]
pub struct AddedTransaction {
    pub transaction: Transaction,
    /// Budget alert decided from the expense's month, if one is due
    pub budget_alert: Option<Notification>,
}

impl<'a> TransactionService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Validates the input, records the transaction at the top of the log
    /// and evaluates the budget alert for the transaction's month.
    ///
    /// A failure to persist is logged and the in-memory log keeps the
    /// entry; it never rolls back.
    pub fn add(&self, input: NewTransaction) -> ZenithResult<AddedTransaction> {
        input.validate()?;

        let transaction = Transaction::from_input(input);
        self.store.transactions.insert_front(transaction.clone())?;
        if let Err(e) = self.store.transactions.save() {
            warn!("could not persist transactions, keeping in-memory log: {}", e);
        }
        info!(
            "recorded {} '{}' of {}",
            transaction.kind, transaction.description, transaction.amount
        );

        let budget_alert = if transaction.is_expense() {
            let settings = self.store.settings.get()?;
            let monthly = monthly_expense_of(
                &self.store.transactions.get_all()?,
                transaction.date.year(),
                transaction.date.month(),
            );
            notification::budget_alert(&settings, monthly, DEFAULT_BUDGET_ALERT_THRESHOLD)
        } else {
            None
        };

        Ok(AddedTransaction {
            transaction,
            budget_alert,
        })
    }

    /// Removes the transaction matching `id`, which may be the short
    /// display form. Returns whether anything was removed; an unknown id
    /// is a no-op.
    pub fn remove(&self, id: &str) -> ZenithResult<bool> {
        let Some(target) = self.store.transactions.find_id(id)? else {
            return Ok(false);
        };

        let removed = self.store.transactions.delete(target)?;
        if removed {
            if let Err(e) = self.store.transactions.save() {
                warn!("could not persist transactions, keeping in-memory log: {}", e);
            }
            info!("removed transaction {}", target);
        }
        Ok(removed)
    }

    /// All transactions, most recently recorded first
    pub fn list(&self) -> ZenithResult<Vec<Transaction>> {
        self.store.transactions.get_all()
    }

    /// Transactions matching the filter, in stored order
    pub fn filter(&self, filter: &TransactionFilter) -> ZenithResult<Vec<Transaction>> {
        let mut matched: Vec<Transaction> = self
            .store
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect();
        if let Some(limit) = filter.limit {
            matched.truncate(limit);
        }
        Ok(matched)
    }

    pub fn count(&self) -> ZenithResult<usize> {
        self.store.transactions.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZenithPaths;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ZenithPaths::with_base_dir(temp_dir.path());
        let store = Store::open(paths).unwrap();
        (temp_dir, store)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(desc: &str, units: i64, kind: TransactionKind, on: NaiveDate) -> NewTransaction {
        NewTransaction {
            description: desc.to_string(),
            amount: Money::from_units(units),
            category: Category::Others,
            date: on,
            kind,
        }
    }

    #[test]
    fn test_add_prepends_and_persists() {
        let (_temp, store) = create_test_store();
        let service = TransactionService::new(&store);

        service
            .add(input("first", 10, TransactionKind::Expense, date(2025, 1, 1)))
            .unwrap();
        service
            .add(input("second", 20, TransactionKind::Income, date(2025, 1, 2)))
            .unwrap();

        let listed = service.list().unwrap();
        assert_eq!(listed[0].description, "second");
        assert_eq!(listed[1].description, "first");

        // Survives a reload from disk
        let reloaded = Store::open(ZenithPaths::with_base_dir(store.paths().base_dir())).unwrap();
        assert_eq!(reloaded.transactions.count().unwrap(), 2);
        assert_eq!(
            reloaded.transactions.get_all().unwrap()[0].description,
            "second"
        );
    }

    #[test]
    fn test_backdated_add_still_lands_on_top() {
        let (_temp, store) = create_test_store();
        let service = TransactionService::new(&store);

        service
            .add(input("recent", 10, TransactionKind::Expense, date(2025, 5, 20)))
            .unwrap();
        service
            .add(input("backdated", 5, TransactionKind::Expense, date(2025, 1, 1)))
            .unwrap();

        assert_eq!(service.list().unwrap()[0].description, "backdated");
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let (_temp, store) = create_test_store();
        let service = TransactionService::new(&store);

        let result = service.add(input("  ", 10, TransactionKind::Expense, date(2025, 1, 1)));
        assert!(result.is_err());
        let result = service.add(input("ok", 0, TransactionKind::Expense, date(2025, 1, 1)));
        assert!(result.is_err());
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_temp, store) = create_test_store();
        let service = TransactionService::new(&store);

        let added = service
            .add(input("lunch", 15, TransactionKind::Expense, date(2025, 2, 2)))
            .unwrap();
        let id = added.transaction.id.to_string();

        assert!(service.remove(&id).unwrap());
        assert_eq!(service.count().unwrap(), 0);
        // Second removal of the same id is a quiet no-op
        assert!(!service.remove(&id).unwrap());
        assert!(!service.remove("txn-deadbeef").unwrap());
    }

    #[test]
    fn test_filter_combines_criteria() {
        let (_temp, store) = create_test_store();
        let service = TransactionService::new(&store);

        let mut groceries = input("Weekly Groceries", 80, TransactionKind::Expense, date(2025, 3, 1));
        groceries.category = Category::Food;
        service.add(groceries).unwrap();

        let mut bus = input("bus pass", 20, TransactionKind::Expense, date(2025, 3, 2));
        bus.category = Category::Transport;
        service.add(bus).unwrap();

        let mut salary = input("salary", 900, TransactionKind::Income, date(2025, 3, 3));
        salary.category = Category::Income;
        service.add(salary).unwrap();

        // Case-insensitive substring
        let found = service
            .filter(&TransactionFilter::new().search("GROCER"))
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].description, "Weekly Groceries");

        let expenses = service
            .filter(&TransactionFilter::new().kind(TransactionKind::Expense))
            .unwrap();
        assert_eq!(expenses.len(), 2);

        let food_expenses = service
            .filter(
                &TransactionFilter::new()
                    .kind(TransactionKind::Expense)
                    .category(Category::Food),
            )
            .unwrap();
        assert_eq!(food_expenses.len(), 1);

        let limited = service
            .filter(&TransactionFilter::new().limit(2))
            .unwrap();
        assert_eq!(limited.len(), 2);
    }

    #[test]
    fn test_budget_alert_fires_over_threshold() {
        let (_temp, store) = create_test_store();
        let mut settings = crate::models::NotificationSettings::default();
        settings.enabled = true;
        store.settings.set(settings).unwrap();

        let service = TransactionService::new(&store);

        // Under the limit: no alert
        let under = service
            .add(input("laptop", 150_000, TransactionKind::Expense, date(2025, 4, 5)))
            .unwrap();
        assert!(under.budget_alert.is_none());

        // Pushes the month over 200 000: alert
        let over = service
            .add(input("rent", 80_000, TransactionKind::Expense, date(2025, 4, 6)))
            .unwrap();
        assert!(over.budget_alert.is_some());

        // Stays over: alerts again on the next expense
        let again = service
            .add(input("snack", 1_000, TransactionKind::Expense, date(2025, 4, 7)))
            .unwrap();
        assert!(again.budget_alert.is_some());

        // Income never alerts, whatever the month looks like
        let income = service
            .add(input("bonus", 500_000, TransactionKind::Income, date(2025, 4, 8)))
            .unwrap();
        assert!(income.budget_alert.is_none());
    }

    #[test]
    fn test_budget_alert_scoped_to_transaction_month() {
        let (_temp, store) = create_test_store();
        let mut settings = crate::models::NotificationSettings::default();
        settings.enabled = true;
        store.settings.set(settings).unwrap();

        let service = TransactionService::new(&store);
        service
            .add(input("april rent", 250_000, TransactionKind::Expense, date(2025, 4, 1)))
            .unwrap();

        // May spending starts from zero, so a small expense stays quiet
        let may = service
            .add(input("may coffee", 500, TransactionKind::Expense, date(2025, 5, 1)))
            .unwrap();
        assert!(may.budget_alert.is_none());
    }

    #[test]
    fn test_budget_alert_silent_when_disabled() {
        let (_temp, store) = create_test_store();
        let service = TransactionService::new(&store);

        // Defaults leave the master switch off
        let added = service
            .add(input("rent", 300_000, TransactionKind::Expense, date(2025, 4, 5)))
            .unwrap();
        assert!(added.budget_alert.is_none());
    }
}
