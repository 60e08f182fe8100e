//! Month-wide rent configuration

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, RoomName};
use crate::error::RentError;
use crate::residency::PeriodInput;

/// A room and its monthly base price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConfig {
    pub name: RoomName,
    /// Monthly price for a single occupant
    pub base_price: Money,
}

impl RoomConfig {
    pub fn new(name: impl Into<RoomName>, base_price: Money) -> Self {
        Self {
            name: name.into(),
            base_price,
        }
    }
}

/// Configuration of the rent calculation that applies for the whole month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentConfiguration {
    /// Total rent owed for the residence
    pub total_rent: Money,
    /// Rooms in sheet order
    rooms: Vec<RoomConfig>,
    /// Monthly surcharge for each occupant of a room beyond the first
    pub extra_person_surcharge: Money,
}

impl RentConfiguration {
    /// Creates a configuration
    ///
    /// # Errors
    ///
    /// Returns `RentError::DuplicateRoom` if two rooms share a name
    pub fn new(
        total_rent: Money,
        rooms: Vec<RoomConfig>,
        extra_person_surcharge: Money,
    ) -> Result<Self, RentError> {
        let mut seen = HashSet::new();
        for room in &rooms {
            if !seen.insert(room.name.as_str()) {
                return Err(RentError::DuplicateRoom(room.name.clone()));
            }
        }

        Ok(Self {
            total_rent,
            rooms,
            extra_person_surcharge,
        })
    }

    pub fn rooms(&self) -> &[RoomConfig] {
        &self.rooms
    }

    /// Looks up a room by exact name
    pub fn room(&self, name: &RoomName) -> Option<&RoomConfig> {
        self.rooms.iter().find(|r| &r.name == name)
    }

    /// Sum of all base prices
    pub fn base_price_sum(&self) -> Result<Money, RentError> {
        Ok(Money::checked_sum(self.rooms.iter().map(|r| &r.base_price))?)
    }

    /// Monthly price of a room with `occupants` residents
    ///
    /// # Errors
    ///
    /// Returns `RentError::Money` if the price overflows
    pub fn price_with_surcharge(
        &self,
        room: &RoomConfig,
        occupants: usize,
    ) -> Result<Money, RentError> {
        let extra = Decimal::from(occupants.saturating_sub(1));
        let surcharge = self.extra_person_surcharge.checked_mul(extra)?;
        Ok(room.base_price.checked_add(&surcharge)?)
    }
}

/// The entire input for a monthly rent calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentInput {
    /// Periods in chronological order
    pub periods: Vec<PeriodInput>,
    pub config: RentConfiguration,
}

impl RentInput {
    pub fn new(periods: Vec<PeriodInput>, config: RentConfiguration) -> Self {
        Self { periods, config }
    }
}
