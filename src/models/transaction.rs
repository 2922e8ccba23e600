//! Transaction model
//!
//! A single recorded income or expense event. Transactions are immutable
//! once created; corrections are made by deleting and re-adding.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

use crate::error::{ZenithError, ZenithResult};

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// The lowercase name used in serialized data and CLI input
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown transaction kind '{}'. Use 'income' or 'expense'",
                other
            )),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// What the money was for
    pub description: String,

    /// Amount, always positive; the sign comes from `kind`
    pub amount: Money,

    /// Spending/income category
    #[serde(default)]
    pub category: Category,

    /// Calendar day of the transaction (no time or timezone component)
    pub date: NaiveDate,

    /// Income or expense
    pub kind: TransactionKind,
}

/// Input for creating a transaction; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Money,
    pub category: Category,
    pub date: NaiveDate,
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a transaction from validated input with a fresh id
    pub fn from_input(input: NewTransaction) -> Self {
        Self {
            id: TransactionId::new(),
            description: input.description,
            amount: input.amount,
            category: input.category,
            date: input.date,
            kind: input.kind,
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The amount with its sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl NewTransaction {
    /// Validate the input before it enters the log
    ///
    /// Rejects empty descriptions and non-positive amounts; nothing is
    /// mutated on rejection.
    pub fn validate(&self) -> ZenithResult<()> {
        if self.description.trim().is_empty() {
            return Err(ZenithError::InvalidInput(
                "description must not be empty".into(),
            ));
        }
        if !self.amount.is_positive() {
            return Err(ZenithError::InvalidInput(
                "amount must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}
