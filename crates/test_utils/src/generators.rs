//! Property-Based Test Generators
//!
//! Proptest strategies producing rent inputs and bills that pass validation,
//! so properties can focus on the arithmetic.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use core_kernel::{Money, Ratio, YearMonth};
use domain_bills::{Bill, MonthlyRentInputs};
use domain_rent::{
    PeriodInput, PeriodSegmenter, RentConfiguration, RentInput, Resident, RoomConfig, RoomResidency,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

const NAMES: &[&str] = &["Alice", "Beatrice", "Carlos", "Dani", "Jill", "Sam"];

/// Strategy for generating positive Money values with cent precision
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (1i64..100_000_000i64).prop_map(Money::from_cents)
}

/// Strategy for generating ratios from 0% to 100% in whole percents
pub fn ratio_strategy() -> impl Strategy<Value = Ratio> {
    (0u32..=100u32).prop_map(|p| Ratio::from_percentage(Decimal::from(p)).unwrap())
}

/// Strategy for generating calendar months
pub fn year_month_strategy() -> impl Strategy<Value = YearMonth> {
    (2000i32..=2035i32, 1u32..=12u32).prop_map(|(y, m)| YearMonth::new(y, m).unwrap())
}

/// Strategy for generating a resident, sharing by default about two times in
/// three
pub fn resident_strategy() -> impl Strategy<Value = Resident> {
    (
        prop::sample::select(NAMES),
        prop::option::weighted(0.35, ratio_strategy()),
    )
        .prop_map(|(name, ratio)| match ratio {
            Some(ratio) => Resident::with_ratio(name, ratio),
            None => Resident::sharing(name),
        })
}

/// Strategy for a house of one to four rooms named "Room 1", "Room 2", ...
pub fn rent_configuration_strategy() -> impl Strategy<Value = RentConfiguration> {
    (
        prop::collection::vec(10_000i64..=300_000i64, 1..=4),
        0i64..=50_000i64,
        50_000i64..=1_000_000i64,
    )
        .prop_map(|(prices, surcharge, rent)| {
            let rooms = prices
                .into_iter()
                .enumerate()
                .map(|(i, cents)| {
                    RoomConfig::new(format!("Room {}", i + 1), Money::from_cents(cents))
                })
                .collect();
            RentConfiguration::new(Money::from_cents(rent), rooms, Money::from_cents(surcharge))
                .unwrap()
        })
}

/// Strategy for the residency of one period
///
/// Every room gets zero to three occupants, except the first room which is
/// never empty. Empty rooms are left out.
pub fn residency_strategy(room_count: usize) -> impl Strategy<Value = Vec<RoomResidency>> {
    (
        prop::collection::vec(resident_strategy(), 1..=3),
        prop::collection::vec(
            prop::collection::vec(resident_strategy(), 0..=3),
            room_count.saturating_sub(1),
        ),
    )
        .prop_map(|(first, rest)| {
            std::iter::once(first)
                .chain(rest)
                .enumerate()
                .filter(|(_, residents)| !residents.is_empty())
                .map(|(i, residents)| RoomResidency::new(format!("Room {}", i + 1), residents))
                .collect()
        })
}

/// Strategy for a valid month of rent input in `month`
pub fn rent_input_for_month_strategy(month: YearMonth) -> impl Strategy<Value = RentInput> {
    (
        rent_configuration_strategy(),
        prop::collection::btree_set(2u32..=28u32, 0..4),
    )
        .prop_flat_map(move |(config, later_starts)| {
            let room_count = config.rooms().len();
            let period_count = later_starts.len() + 1;
            (
                Just(config),
                Just(later_starts),
                prop::collection::vec(residency_strategy(room_count), period_count),
            )
        })
        .prop_map(move |(config, later_starts, residencies)| {
            build_rent_input(month, config, &later_starts, residencies)
        })
}

/// Strategy for a valid month of rent input in any month
pub fn rent_input_strategy() -> impl Strategy<Value = RentInput> {
    year_month_strategy().prop_flat_map(rent_input_for_month_strategy)
}

/// Strategy for a bill crossing from one month into the next, along with
/// rent inputs for both months
pub fn two_month_bill_strategy() -> impl Strategy<Value = (MonthlyRentInputs, Bill)> {
    year_month_strategy()
        .prop_flat_map(|month| {
            (
                Just(month),
                rent_input_for_month_strategy(month),
                rent_input_for_month_strategy(month.next()),
                1u32..=28u32,
                1u32..=28u32,
                positive_money_strategy(),
            )
        })
        .prop_map(|(month, first_input, second_input, first_day, last_day, amount)| {
            let next = month.next();
            let bill = Bill::new(
                "Utilities",
                amount,
                day_of(month, first_day),
                day_of(next, last_day),
            )
            .unwrap();
            let inputs = MonthlyRentInputs::new()
                .with_month(month, first_input)
                .with_month(next, second_input);
            (inputs, bill)
        })
}

fn build_rent_input(
    month: YearMonth,
    config: RentConfiguration,
    later_starts: &BTreeSet<u32>,
    residencies: Vec<Vec<RoomResidency>>,
) -> RentInput {
    let starts: Vec<NaiveDate> = std::iter::once(1)
        .chain(later_starts.iter().copied())
        .map(|day| day_of(month, day))
        .collect();
    let ranges = PeriodSegmenter::month_aligned(&starts).unwrap();

    let periods = ranges
        .into_iter()
        .zip(residencies)
        .map(|(range, residency)| PeriodInput::new(range.start, range.end, residency).unwrap())
        .collect();

    RentInput::new(periods, config)
}

fn day_of(month: YearMonth, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(month.year(), month.month(), day).unwrap()
}
