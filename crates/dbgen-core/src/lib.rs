//! Core contracts and helpers for dbgen.
//!
//! This crate defines the record types, configuration value objects and the
//! error taxonomy shared by the generation engine and the CLI.

pub mod columns;
pub mod config;
pub mod error;
pub mod types;

pub use config::{ClientConfig, DbgenConfig, Limits, PurchaseConfig};
pub use error::{Error, Result};
pub use types::{Amount, BranchCode, ClientId, ClientRecord, PurchaseRecord};
