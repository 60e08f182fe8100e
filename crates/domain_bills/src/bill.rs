//! Bills and their calculations

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{BillName, DateRange, Money, MoneyError, ResidentName};
use domain_rent::ResidentTotal;
use crate::error::BillError;

/// A bill covering an inclusive range of days, possibly across months
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bill {
    pub name: BillName,
    pub amount: Money,
    pub range: DateRange,
}

impl Bill {
    /// Creates a bill
    ///
    /// # Errors
    ///
    /// - `BillError::InvalidBill` for a blank name or a zero amount
    /// - Temporal error if the last day is before the first
    pub fn new(
        name: impl Into<BillName>,
        amount: Money,
        first_day: NaiveDate,
        last_day: NaiveDate,
    ) -> Result<Self, BillError> {
        let name = name.into();
        if name.as_str().trim().is_empty() {
            return Err(BillError::InvalidBill("bill name is blank".to_string()));
        }
        if amount.is_zero() {
            return Err(BillError::InvalidBill(format!("bill '{}' has a zero amount", name)));
        }

        Ok(Self {
            name,
            amount,
            range: DateRange::new(first_day, last_day)?,
        })
    }

    pub fn num_days(&self) -> u32 {
        self.range.days()
    }

    /// The bill's cost per day
    pub fn daily_amount(&self) -> Money {
        per_day(self.amount, self.num_days())
    }
}

/// The part of a bill falling in one rent period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodCalculation {
    pub range: DateRange,
    /// Total amount of the bill attributed to this period
    pub amount: Money,
    /// Roommates sharing the bill during this period
    pub roommates: Vec<ResidentName>,
    amount_per_person: Money,
}

impl PeriodCalculation {
    pub(crate) fn new(
        range: DateRange,
        amount: Money,
        roommates: Vec<ResidentName>,
    ) -> Result<Self, BillError> {
        let amount_per_person = amount.split_evenly(roommates.len())?;
        Ok(Self {
            range,
            amount,
            roommates,
            amount_per_person,
        })
    }

    pub fn num_days(&self) -> u32 {
        self.range.days()
    }

    /// Amount per day for this period
    pub fn daily_amount(&self) -> Money {
        per_day(self.amount, self.num_days())
    }

    /// Amount per day per person for this period
    pub fn daily_amount_per_person(&self) -> Money {
        per_day(self.amount_per_person, self.num_days())
    }

    /// Amount per person for this period
    pub fn amount_per_person(&self) -> Money {
        self.amount_per_person
    }
}

/// A roommate's share of a bill, with the share from each period
pub type RoommateTotal = ResidentTotal;

/// A bill split across every period it touches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillCalculation {
    pub bill: Bill,
    pub periods: Vec<PeriodCalculation>,
    pub roommate_totals: Vec<RoommateTotal>,
}

impl BillCalculation {
    pub fn num_days(&self) -> u32 {
        self.bill.num_days()
    }

    pub fn daily_amount(&self) -> Money {
        self.bill.daily_amount()
    }

    /// Sum of roommate totals; equals the bill amount
    pub fn total_assigned(&self) -> Result<Money, MoneyError> {
        Money::checked_sum(self.roommate_totals.iter().map(|r| &r.total))
    }

    /// Share of one roommate, by exact name
    pub fn roommate_total(&self, roommate: &str) -> Option<Money> {
        self.roommate_totals
            .iter()
            .find(|r| r.resident.as_str() == roommate)
            .map(|r| r.total)
    }
}

/// Calculations for a batch of bills, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillsCalculations {
    pub calculations: Vec<BillCalculation>,
}

// A DateRange always holds at least one day
fn per_day(amount: Money, days: u32) -> Money {
    Money::new(amount.amount() / Decimal::from(days.max(1)))
}
