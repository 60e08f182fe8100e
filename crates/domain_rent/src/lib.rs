//! Rent Domain - Day-weighted rent apportionment
//!
//! This crate splits a month's rent among the people living in a shared
//! house, when people move in, move out, or change rooms mid-month.
//!
//! # Key Concepts
//!
//! - **Period**: days of the month during which nobody moves
//! - **Cost ratio**: a resident's share of their room, stated or defaulted
//! - **Surcharge**: extra monthly price per additional occupant of a room
//! - **Overage**: the gap between residents' subtotals and the period's share
//!   of rent, spread equally so the shares add up exactly
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use core_kernel::Money;
//! use domain_rent::{
//!     calculate_rent, PeriodInput, RentConfiguration, RentInput, Resident, RoomConfig,
//!     RoomResidency,
//! };
//! use rust_decimal::Decimal;
//!
//! let config = RentConfiguration::new(
//!     Money::new(Decimal::from(3000)),
//!     vec![
//!         RoomConfig::new("Big room", Money::new(Decimal::from(2000))),
//!         RoomConfig::new("Small room", Money::new(Decimal::from(1000))),
//!     ],
//!     Money::new(Decimal::from(250)),
//! )
//! .unwrap();
//!
//! let april = PeriodInput::new(
//!     NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
//!     vec![
//!         RoomResidency::new("Big room", vec![Resident::sharing("Dani")]),
//!         RoomResidency::new("Small room", vec![Resident::sharing("Jill")]),
//!     ],
//! )
//! .unwrap();
//!
//! let output = calculate_rent(&RentInput::new(vec![april], config)).unwrap();
//! assert_eq!(output.month_totals.sum(), Money::new(Decimal::from(3000)));
//! ```

pub mod residency;
pub mod configuration;
pub mod ratio;
pub mod segment;
pub mod allocation;
pub mod aggregate;
pub mod calculator;
pub mod error;

pub use residency::{CostRatio, PeriodInput, Resident, RoomResidency};
pub use configuration::{RentConfiguration, RentInput, RoomConfig};
pub use ratio::{RatioResolver, RatioSumWarning, ResolvedRatios, ResolvedResident};
pub use segment::{PeriodSegmenter, SubPeriod};
pub use allocation::{PeriodAllocator, PeriodOutput, ResidentCost, RoomCharge};
pub use aggregate::{Aggregator, MonthTotals, ResidentTotal};
pub use calculator::{calculate_rent, RentCalculator, RentOutput};
pub use error::RentError;

/// Tolerance for comparing amounts that should reconcile exactly
pub const RECONCILIATION_TOLERANCE: rust_decimal::Decimal =
    rust_decimal::Decimal::from_parts(1, 0, 0, false, 9);
