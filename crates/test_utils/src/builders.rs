//! Test Data Builders
//!
//! Builder patterns for rent inputs and bills. Tests specify only the
//! relevant fields and take defaults for everything else.

use chrono::NaiveDate;
use core_kernel::{Money, YearMonth};
use domain_bills::Bill;
use domain_rent::{PeriodInput, PeriodSegmenter, RentConfiguration, RentInput, RoomResidency};

use crate::fixtures::{HouseFixtures, MoneyFixtures, TemporalFixtures};

/// Builder for one month of rent input
///
/// Periods are given by their first day; each runs until the day before the
/// next one, the last until the end of the month.
pub struct RentInputBuilder {
    month: YearMonth,
    config: RentConfiguration,
    periods: Vec<(NaiveDate, Vec<RoomResidency>)>,
}

impl Default for RentInputBuilder {
    fn default() -> Self {
        Self::new(TemporalFixtures::april_2024())
    }
}

impl RentInputBuilder {
    /// Creates a builder for the three-room house in `month`
    pub fn new(month: YearMonth) -> Self {
        Self {
            month,
            config: HouseFixtures::three_room_house(),
            periods: Vec::new(),
        }
    }

    /// Sets the house configuration
    pub fn with_config(mut self, config: RentConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Adds a period starting on `day` of the month
    pub fn with_period(mut self, day: u32, residency: Vec<RoomResidency>) -> Self {
        let start = NaiveDate::from_ymd_opt(self.month.year(), self.month.month(), day).unwrap();
        self.periods.push((start, residency));
        self
    }

    /// Uses one residency for the whole month
    pub fn whole_month(self, residency: Vec<RoomResidency>) -> Self {
        self.with_period(1, residency)
    }

    /// Builds the rent input; panics if the period starts are invalid
    pub fn build(self) -> RentInput {
        let starts: Vec<NaiveDate> = self.periods.iter().map(|(start, _)| *start).collect();
        let ranges = PeriodSegmenter::month_aligned(&starts).unwrap();

        let periods = ranges
            .into_iter()
            .zip(self.periods)
            .map(|(range, (_, residency))| {
                PeriodInput::new(range.start, range.end, residency).unwrap()
            })
            .collect();

        RentInput::new(periods, self.config)
    }
}

/// Builder for a bill
pub struct BillBuilder {
    name: String,
    amount: Money,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl Default for BillBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BillBuilder {
    /// Creates a $100 "Electricity" bill for April 2024
    pub fn new() -> Self {
        let april = TemporalFixtures::april_2024();
        Self {
            name: "Electricity".to_string(),
            amount: MoneyFixtures::dollars(100),
            first_day: april.first_day(),
            last_day: april.last_day(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the inclusive days the bill covers
    pub fn covering(mut self, first_day: NaiveDate, last_day: NaiveDate) -> Self {
        self.first_day = first_day;
        self.last_day = last_day;
        self
    }

    /// Builds the bill; panics if it is invalid
    pub fn build(self) -> Bill {
        Bill::new(self.name, self.amount, self.first_day, self.last_day).unwrap()
    }
}
