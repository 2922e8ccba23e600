//! JSON export
//!
//! Serializes the tracker state into a versioned snapshot document, or just
//! the transaction log or goal list on their own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ZenithError, ZenithResult};
use crate::models::{Goal, Money, NotificationSettings, Transaction};
use crate::storage::Store;

/// Bumped whenever the snapshot layout changes shape
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// One self-contained snapshot of everything the tracker knows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Layout version, so older files stay readable
    pub schema_version: String,

    /// When the snapshot was taken (UTC)
    pub exported_at: DateTime<Utc>,

    /// zenith-fin version that wrote the file
    pub app_version: String,

    /// Stored initial balance
    pub initial_balance: Money,

    /// All transactions, most recently recorded first
    pub transactions: Vec<Transaction>,

    /// All savings goals
    pub goals: Vec<Goal>,

    /// Notification preferences
    pub settings: NotificationSettings,

    /// Counts and date span, for eyeballing a file without parsing it all
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub goal_count: usize,
    /// Date of the oldest transaction, if any exist
    pub earliest_transaction: Option<String>,
    /// Date of the newest transaction, if any exist
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Snapshot every blob in the store
    pub fn from_store(store: &Store) -> ZenithResult<Self> {
        let transactions = store.transactions.get_all()?;
        let goals = store.goals.get_all()?;

        let dates = transactions.iter().map(|t| t.date);
        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            goal_count: goals.len(),
            earliest_transaction: dates.clone().min().map(|d| d.to_string()),
            latest_transaction: dates.max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            initial_balance: store.balance.get()?,
            transactions,
            goals,
            settings: store.settings.get()?,
            metadata,
        })
    }
}

/// Write the full snapshot as JSON
pub fn export_full_json<W: Write>(store: &Store, writer: &mut W, pretty: bool) -> ZenithResult<()> {
    let export = FullExport::from_store(store)?;
    write_json(writer, &export, pretty)
}

/// Write only the transaction log as JSON
pub fn export_transactions_json<W: Write>(
    store: &Store,
    writer: &mut W,
    pretty: bool,
) -> ZenithResult<()> {
    let transactions = store.transactions.get_all()?;
    write_json(writer, &transactions, pretty)
}

/// Write only the goal list as JSON
pub fn export_goals_json<W: Write>(store: &Store, writer: &mut W, pretty: bool) -> ZenithResult<()> {
    let goals = store.goals.get_all()?;
    write_json(writer, &goals, pretty)
}

fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T, pretty: bool) -> ZenithResult<()> {
    let written = if pretty {
        serde_json::to_writer_pretty(writer, value)
    } else {
        serde_json::to_writer(writer, value)
    };
    written.map_err(|e| ZenithError::Export(e.to_string()))
}
