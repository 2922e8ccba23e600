//! YAML export functionality
//!
//! Exports the complete tracker state to YAML for a human-readable backup.

use std::io::Write;

use crate::error::{ZenithError, ZenithResult};
use crate::export::json::FullExport;
use crate::storage::Store;

/// Export the full tracker state to YAML
pub fn export_full_yaml<W: Write>(store: &Store, writer: &mut W) -> ZenithResult<()> {
    let export = FullExport::from_store(store)?;

    writeln!(writer, "# ZenithFin Full Export")
        .map_err(|e| ZenithError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| ZenithError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| ZenithError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ZenithError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ZenithError::Export(e.to_string()))?;

    Ok(())
}

/// Export just the transaction log to YAML
pub fn export_transactions_yaml<W: Write>(store: &Store, writer: &mut W) -> ZenithResult<()> {
    let transactions = store.transactions.get_all()?;
    serde_yaml::to_writer(writer, &transactions).map_err(|e| ZenithError::Export(e.to_string()))
}

/// Export just the goal list to YAML
pub fn export_goals_yaml<W: Write>(store: &Store, writer: &mut W) -> ZenithResult<()> {
    let goals = store.goals.get_all()?;
    serde_yaml::to_writer(writer, &goals).map_err(|e| ZenithError::Export(e.to_string()))
}
