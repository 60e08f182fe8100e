//! CLI error handling

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use core_kernel::{CoreError, MoneyError, TemporalError};
use domain_bills::BillError;
use domain_rent::RentError;

use crate::parse::ResidencyParseError;

/// Errors raised while reading sheets, running calculations or writing
/// reports
#[derive(Debug, Error)]
pub enum CliError {
    /// A sheet failed validation, a sheet is missing, or the environment
    /// disagrees with a sheet
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Rent(#[from] RentError),

    #[error(transparent)]
    Bill(#[from] BillError),

    #[error(transparent)]
    Money(#[from] MoneyError),

    #[error(transparent)]
    Temporal(#[from] TemporalError),

    /// A residency cell could not be parsed
    #[error("Room '{room}', period starting {period_start}: {source}")]
    Residency {
        room: String,
        period_start: NaiveDate,
        #[source]
        source: ResidencyParseError,
    },

    /// A row of the bills document is invalid; rows count from 1
    #[error("Bill row {row}: {source}")]
    BillRow {
        row: usize,
        #[source]
        source: BillError,
    },

    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse {}: {source}", .path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not format report")]
    Format(#[from] std::fmt::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
