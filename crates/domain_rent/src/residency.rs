//! Residency records
//!
//! Who occupies which room during a period, and what share of the room each
//! occupant agreed to pay.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{DateRange, Ratio, ResidentName, RoomName};
use crate::error::RentError;

/// A resident's share of their room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostRatio {
    /// The resident agreed to this share
    Explicit(Ratio),
    /// The resident takes an even part of whatever the explicit shares leave
    Default,
}

impl CostRatio {
    /// Returns the explicit ratio, if any
    pub fn explicit(&self) -> Option<Ratio> {
        match self {
            CostRatio::Explicit(ratio) => Some(*ratio),
            CostRatio::Default => None,
        }
    }
}

/// One occupant of a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resident {
    pub name: ResidentName,
    pub cost_ratio: CostRatio,
}

impl Resident {
    pub fn new(name: impl Into<ResidentName>, cost_ratio: CostRatio) -> Self {
        Self {
            name: name.into(),
            cost_ratio,
        }
    }

    /// A resident taking the default share
    pub fn sharing(name: impl Into<ResidentName>) -> Self {
        Self::new(name, CostRatio::Default)
    }

    /// A resident with an explicit share
    pub fn with_ratio(name: impl Into<ResidentName>, ratio: Ratio) -> Self {
        Self::new(name, CostRatio::Explicit(ratio))
    }
}

/// The occupants of one room during one period, in the order listed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomResidency {
    pub room: RoomName,
    pub residents: Vec<Resident>,
}

impl RoomResidency {
    pub fn new(room: impl Into<RoomName>, residents: Vec<Resident>) -> Self {
        Self {
            room: room.into(),
            residents,
        }
    }
}

/// Residency during a stretch of days with no move-ins, move-outs or room
/// changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodInput {
    /// Inclusive days of the period
    pub range: DateRange,
    /// Occupied rooms; empty rooms have no entry
    pub residency: Vec<RoomResidency>,
}

impl PeriodInput {
    /// Creates a period, rejecting a last day before the first
    pub fn new(
        first_day: NaiveDate,
        last_day: NaiveDate,
        residency: Vec<RoomResidency>,
    ) -> Result<Self, RentError> {
        Ok(Self {
            range: DateRange::new(first_day, last_day)?,
            residency,
        })
    }

    pub fn first_day(&self) -> NaiveDate {
        self.range.start
    }

    pub fn last_day(&self) -> NaiveDate {
        self.range.end
    }

    /// Every resident of every room, in room order
    ///
    /// A person listed in two rooms appears twice.
    pub fn residents(&self) -> impl Iterator<Item = &ResidentName> {
        self.residency
            .iter()
            .flat_map(|room| room.residents.iter().map(|r| &r.name))
    }

    pub fn resident_count(&self) -> usize {
        self.residency.iter().map(|room| room.residents.len()).sum()
    }
}
