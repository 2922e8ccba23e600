//! `zenith export` subcommands
//!
//! Writes tracker data to a file or stdout in the chosen format.

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ZenithError, ZenithResult};
use crate::export::{csv, json, yaml};
use crate::storage::Store;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV table (spreadsheet-compatible)
    Csv,
    /// JSON
    Json,
    /// YAML (human-readable)
    Yaml,
}

#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export the transaction log
    Transactions {
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export the goal list
    Goals {
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export the full tracker snapshot
    All {
        /// Export format (CSV is not available for the full snapshot)
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Indent JSON for reading rather than piping
        #[arg(long)]
        pretty: bool,
    },
}

/// Handle an export command
pub fn handle_export_command(store: &Store, cmd: ExportCommands) -> ZenithResult<()> {
    match cmd {
        ExportCommands::Transactions { format, output } => {
            let mut writer = open_output(output.as_deref())?;
            match format {
                ExportFormat::Csv => csv::export_transactions_csv(store, &mut writer)?,
                ExportFormat::Json => json::export_transactions_json(store, &mut writer, true)?,
                ExportFormat::Yaml => yaml::export_transactions_yaml(store, &mut writer)?,
            }
            flush(&mut writer)?;
            finish(store.transactions.count()?, "transaction", output.as_deref());
        }

        ExportCommands::Goals { format, output } => {
            let mut writer = open_output(output.as_deref())?;
            match format {
                ExportFormat::Csv => csv::export_goals_csv(store, &mut writer)?,
                ExportFormat::Json => json::export_goals_json(store, &mut writer, true)?,
                ExportFormat::Yaml => yaml::export_goals_yaml(store, &mut writer)?,
            }
            flush(&mut writer)?;
            finish(store.goals.count()?, "goal", output.as_deref());
        }

        ExportCommands::All {
            format,
            output,
            pretty,
        } => {
            // open_output truncates an existing file; reject the format first
            if matches!(format, ExportFormat::Csv) {
                return Err(ZenithError::Export(
                    "The full snapshot supports json or yaml, not csv".to_string(),
                ));
            }
            let mut writer = open_output(output.as_deref())?;
            match format {
                ExportFormat::Json => json::export_full_json(store, &mut writer, pretty)?,
                ExportFormat::Yaml => yaml::export_full_yaml(store, &mut writer)?,
                ExportFormat::Csv => unreachable!(),
            }
            flush(&mut writer)?;
            if let Some(path) = output {
                eprintln!("Full snapshot exported to: {}", path.display());
            }
        }
    }

    Ok(())
}

fn flush(writer: &mut Box<dyn Write>) -> ZenithResult<()> {
    writer
        .flush()
        .map_err(|e| ZenithError::Export(e.to_string()))
}

fn open_output(output: Option<&Path>) -> ZenithResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ZenithError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout()))),
    }
}

fn finish(count: usize, noun: &str, output: Option<&Path>) {
    if let Some(path) = output {
        eprintln!("Exported {} {}(s) to: {}", count, noun, path.display());
    }
}
