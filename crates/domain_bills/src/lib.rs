//! Bills Domain - Splitting shared bills over residency
//!
//! Utility bills rarely line up with rent months. A bill is charged at a flat
//! daily rate over its inclusive days, cut wherever it crosses the rent
//! periods of the months it touches, and each piece is divided evenly among
//! whoever lived in the house at the time. Rooms and cost ratios play no part.
//!
//! Residency comes from a [`MonthResidencySource`] supplied by the caller, so
//! the splitter never goes looking for rent sheets on its own.

pub mod bill;
pub mod ports;
pub mod splitter;
pub mod error;

pub use bill::{Bill, BillCalculation, BillsCalculations, PeriodCalculation, RoommateTotal};
pub use ports::{MonthResidencySource, MonthlyRentInputs};
pub use splitter::{required_months, BillSplitter};
pub use error::BillError;
