//! Rent domain errors

use chrono::NaiveDate;
use thiserror::Error;

use core_kernel::{MoneyError, RoomName, TemporalError};

/// Errors that can occur while calculating rent
///
/// Every variant is fatal for the calculation run; ratio-sum drift is a
/// warning and never appears here.
#[derive(Debug, Error)]
pub enum RentError {
    /// Calendar problem with a period
    #[error(transparent)]
    Temporal(#[from] TemporalError),

    /// Arithmetic problem
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Two rooms share a name
    #[error("Duplicate room name: {0}")]
    DuplicateRoom(RoomName),

    /// A residency references a room missing from the configuration
    #[error("Unknown room '{room}' in period starting {period_start}")]
    UnknownRoom {
        room: RoomName,
        period_start: NaiveDate,
    },

    /// A residency entry lists nobody
    #[error("Room '{room}' lists no residents in period starting {period_start}")]
    EmptyRoom {
        room: RoomName,
        period_start: NaiveDate,
    },

    /// Nobody lives anywhere during a period, so its cost cannot be shared
    #[error("No residents in period starting {period_start}; its cost cannot be divided")]
    EmptyPeriod {
        period_start: NaiveDate,
    },

    /// No periods were supplied for the month
    #[error("At least one period is required")]
    NoPeriods,

    /// Period start dates are unusable for month-aligned segmentation
    #[error("Invalid period start dates: {0}")]
    InvalidPeriodStarts(String),

    /// Periods leave a gap, overlap, or fail to cover the month
    #[error("Periods must cover the month without gaps or overlaps: {0}")]
    PeriodsNotContiguous(String),
}
