//! ZenithFin - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the ZenithFin tracker:
//! an insertion-ordered transaction log, balances derived from that log,
//! savings goals with coverage analysis against the live balance, and
//! notification rules with a daily reminder scheduler.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management and tunable defaults
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, goals, settings)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `notify`: Notification delivery
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use zenith_fin::config::ZenithPaths;
//! use zenith_fin::storage::Store;
//!
//! let store = Store::open(ZenithPaths::new()?)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod notify;
pub mod services;
pub mod storage;

pub use error::{ZenithError, ZenithResult};
