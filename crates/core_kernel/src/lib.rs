//! Core Kernel - Foundational types for rent and bill apportionment
//!
//! This crate provides the building blocks used across all domain modules:
//! - Money and ratio types with precise decimal arithmetic
//! - Calendar types for inclusive date ranges and months
//! - Names for rooms, residents and bills

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::{Money, MoneyError, Ratio};
pub use temporal::{days_in_month, days_inclusive, DateRange, TemporalError, Timezone, YearMonth};
pub use identifiers::{BillName, ResidentName, RoomName};
pub use error::CoreError;
