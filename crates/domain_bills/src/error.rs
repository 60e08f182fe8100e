//! Bill splitting errors

use chrono::NaiveDate;
use thiserror::Error;

use core_kernel::{BillName, MoneyError, TemporalError, YearMonth};
use domain_rent::RentError;

/// Errors that can occur while splitting bills
#[derive(Debug, Error)]
pub enum BillError {
    /// Problem in a month's rent residency
    #[error(transparent)]
    Rent(#[from] RentError),

    /// Calendar problem
    #[error(transparent)]
    Temporal(#[from] TemporalError),

    /// Arithmetic problem
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// A bill's fields are unusable
    #[error("Invalid bill: {0}")]
    InvalidBill(String),

    /// No bills to split
    #[error("No bills to split")]
    NoBills,

    /// The latest month of the bills is before the earliest
    #[error("Last month {last} is before first month {first}")]
    MonthsOutOfOrder {
        first: YearMonth,
        last: YearMonth,
    },

    /// A month touched by a bill has no residency configuration
    #[error("No rent input for month {0}")]
    MissingMonth(YearMonth),

    /// A month's residency describes a different month
    #[error("Rent input for month {requested} covers {found}")]
    MonthMismatch {
        requested: YearMonth,
        found: YearMonth,
    },

    /// Nobody lived in the house during part of a bill
    #[error("Bill '{bill}' has no residents to share the period starting {period_start}")]
    EmptyPeriod {
        bill: BillName,
        period_start: NaiveDate,
    },
}
