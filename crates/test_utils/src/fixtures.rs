//! Pre-built Test Fixtures
//!
//! Ready-to-use houses, months and amounts. Values are fixed so expected
//! figures can be worked out by hand.

use chrono::NaiveDate;
use core_kernel::{Money, YearMonth};
use domain_rent::{RentConfiguration, Resident, RoomConfig, RoomResidency};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Whole dollars
    pub fn dollars(amount: i64) -> Money {
        Money::new(Decimal::from(amount))
    }

    /// Monthly rent of the three-room house
    pub fn house_rent() -> Money {
        Money::new(dec!(5095))
    }

    /// Surcharge for each extra person in a room
    pub fn extra_person_fee() -> Money {
        Money::new(dec!(250))
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// A calendar date; panics on an impossible date
    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// A 30-day month
    pub fn april_2024() -> YearMonth {
        YearMonth::new(2024, 4).unwrap()
    }

    /// A leap February
    pub fn february_2024() -> YearMonth {
        YearMonth::new(2024, 2).unwrap()
    }

    /// A 31-day month
    pub fn january_2024() -> YearMonth {
        YearMonth::new(2024, 1).unwrap()
    }
}

/// Fixture for house configurations
pub struct HouseFixtures;

impl HouseFixtures {
    /// Three rooms whose base prices sum to 4500 against 5095 rent
    pub fn three_room_house() -> RentConfiguration {
        RentConfiguration::new(
            MoneyFixtures::house_rent(),
            vec![
                RoomConfig::new("Big room", MoneyFixtures::dollars(2000)),
                RoomConfig::new("Upstairs room", MoneyFixtures::dollars(1500)),
                RoomConfig::new("Small room", MoneyFixtures::dollars(1000)),
            ],
            MoneyFixtures::extra_person_fee(),
        )
        .unwrap()
    }

    /// Two equal rooms, no surcharge, base prices summing to the rent
    pub fn two_room_house() -> RentConfiguration {
        RentConfiguration::new(
            MoneyFixtures::dollars(2000),
            vec![
                RoomConfig::new("Front", MoneyFixtures::dollars(1000)),
                RoomConfig::new("Back", MoneyFixtures::dollars(1000)),
            ],
            Money::ZERO,
        )
        .unwrap()
    }

    /// Dani, Jill and Beatrice each alone in a room of the three-room house
    pub fn usual_residency() -> Vec<RoomResidency> {
        vec![
            RoomResidency::new("Big room", vec![Resident::sharing("Dani")]),
            RoomResidency::new("Upstairs room", vec![Resident::sharing("Jill")]),
            RoomResidency::new("Small room", vec![Resident::sharing("Beatrice")]),
        ]
    }
}
