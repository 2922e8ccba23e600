//! Export module for ZenithFin
//!
//! Data export in multiple formats:
//! - CSV: transaction and goal tables (spreadsheet-compatible)
//! - JSON: machine-readable full snapshot
//! - YAML: human-readable full snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_goals_csv, export_transactions_csv};
pub use self::json::{
    export_full_json, export_goals_json, export_transactions_json, FullExport,
    EXPORT_SCHEMA_VERSION,
};
pub use self::yaml::{export_full_yaml, export_goals_yaml, export_transactions_yaml};
