//! Per-month residency lookup
//!
//! The splitter never finds rent sheets itself. Whoever drives it passes a
//! source that answers "what did the house look like in this month?".

use std::collections::BTreeMap;

use core_kernel::YearMonth;
use domain_rent::RentInput;

/// Supplies the rent input (rooms and residency periods) of a month
pub trait MonthResidencySource {
    /// Returns the month's rent input, or `None` if there is none
    fn rent_input(&self, month: YearMonth) -> Option<&RentInput>;
}

/// Rent inputs held in memory, keyed by month
#[derive(Debug, Clone, Default)]
pub struct MonthlyRentInputs {
    months: BTreeMap<YearMonth, RentInput>,
}

impl MonthlyRentInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a month's input
    pub fn insert(&mut self, month: YearMonth, input: RentInput) -> Option<RentInput> {
        self.months.insert(month, input)
    }

    /// Adds a month's input, builder style
    pub fn with_month(mut self, month: YearMonth, input: RentInput) -> Self {
        self.insert(month, input);
        self
    }
}

impl MonthResidencySource for MonthlyRentInputs {
    fn rent_input(&self, month: YearMonth) -> Option<&RentInput> {
        self.months.get(&month)
    }
}
