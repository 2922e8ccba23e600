//! `zenith transaction` subcommands
//!
//! Recording, listing and removing entries in the transaction log.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::transaction::format_transaction_register;
use crate::error::{ZenithError, ZenithResult};
use crate::models::{Category, Money, NewTransaction, TransactionKind};
use crate::notify::{ConsoleNotifier, Notifier};
use crate::services::{TransactionFilter, TransactionService};
use crate::storage::Store;

#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// What the money was for
        description: String,
        /// Amount (e.g., "50" or "50.00")
        amount: String,
        /// Transaction kind: expense or income
        #[arg(short, long, default_value = "expense")]
        kind: String,
        /// Category name (food, transport, leisure, utilities, health,
        /// shopping, income, savings, others)
        #[arg(short, long, default_value = "others")]
        category: String,
        /// Date as YYYY-MM-DD; today when omitted
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, most recently recorded first
    List {
        /// Only descriptions containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Only one kind: expense or income
        #[arg(short, long)]
        kind: Option<String>,
        /// Only one category
        #[arg(short, long)]
        category: Option<String>,
        /// Cap on how many rows to print
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Remove a transaction
    Remove {
        /// Transaction ID (full or short form)
        id: String,
    },
}

/// Dispatch one transaction subcommand
pub fn handle_transaction_command(store: &Store, cmd: TransactionCommands) -> ZenithResult<()> {
    let service = TransactionService::new(store);

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            kind,
            category,
            date,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| ZenithError::InvalidInput(format!("Invalid amount: {}", e)))?;
            let kind: TransactionKind = kind.parse().map_err(ZenithError::InvalidInput)?;
            let category: Category = category.parse().map_err(ZenithError::InvalidInput)?;
            let date = parse_date_or_today(date.as_deref())?;

            let added = service.add(NewTransaction {
                description,
                amount,
                category,
                date,
                kind,
            })?;

            println!(
                "Recorded {} '{}' of {} on {}",
                added.transaction.kind.as_str(),
                added.transaction.description,
                added.transaction.amount,
                added.transaction.date
            );
            println!("  Id: {}", added.transaction.id);

            if let Some(alert) = added.budget_alert {
                ConsoleNotifier.notify(&alert);
            }
        }

        TransactionCommands::List {
            search,
            kind,
            category,
            limit,
        } => {
            let mut filter = TransactionFilter::new();
            if let Some(needle) = search {
                filter = filter.search(needle);
            }
            if let Some(kind) = kind {
                filter = filter.kind(kind.parse().map_err(ZenithError::InvalidInput)?);
            }
            if let Some(category) = category {
                filter = filter.category(category.parse().map_err(ZenithError::InvalidInput)?);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let transactions = service.filter(&filter)?;
            print!("{}", format_transaction_register(&transactions));
        }

        TransactionCommands::Remove { id } => {
            if service.remove(&id)? {
                println!("Removed transaction {}", id);
            } else {
                println!("No transaction matches '{}'; nothing removed.", id);
            }
        }
    }

    Ok(())
}

fn parse_date_or_today(date: Option<&str>) -> ZenithResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            ZenithError::InvalidInput(format!("Invalid date '{}', expected YYYY-MM-DD", s))
        }),
        None => Ok(Local::now().date_naive()),
    }
}
