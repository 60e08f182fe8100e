//! Per-resident totals across periods

use std::collections::HashMap;

use serde::Serialize;

use core_kernel::{Money, MoneyError, ResidentName};
use crate::allocation::{PeriodOutput, ResidentCost};

/// A resident's total across all periods of a month or bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResidentTotal {
    pub resident: ResidentName,
    pub total: Money,
    /// Cost from each contribution, in the order added; sums to `total`
    pub components: Vec<Money>,
}

/// Sums costs per resident name, keeping first-seen order
///
/// Names are matched exactly. Two spellings of the same person produce two
/// totals.
#[derive(Debug, Default)]
pub struct Aggregator {
    totals: Vec<ResidentTotal>,
    index: HashMap<ResidentName, usize>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one contribution to a resident's total
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the resident's total overflows
    pub fn add(&mut self, resident: &ResidentName, amount: Money) -> Result<(), MoneyError> {
        match self.index.get(resident) {
            Some(&i) => {
                let entry = &mut self.totals[i];
                entry.total = entry.total.checked_add(&amount)?;
                entry.components.push(amount);
            }
            None => {
                self.index.insert(resident.clone(), self.totals.len());
                self.totals.push(ResidentTotal {
                    resident: resident.clone(),
                    total: amount,
                    components: vec![amount],
                });
            }
        }
        Ok(())
    }

    /// Adds every cost in a list
    pub fn add_all<'c>(
        &mut self,
        costs: impl IntoIterator<Item = &'c ResidentCost>,
    ) -> Result<(), MoneyError> {
        for cost in costs {
            self.add(&cost.resident, cost.cost)?;
        }
        Ok(())
    }

    pub fn finish(self) -> Vec<ResidentTotal> {
        self.totals
    }
}

/// Month-end totals per resident
///
/// These are the figures typically shared with residents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthTotals {
    pub residents: Vec<ResidentTotal>,
    /// Sum over all residents; equals the month's rent
    pub total: Money,
}

impl MonthTotals {
    /// Totals the adjusted costs of every period
    pub fn from_periods(periods: &[PeriodOutput]) -> Result<Self, MoneyError> {
        let mut aggregator = Aggregator::new();
        for period in periods {
            aggregator.add_all(&period.resident_adjusted_totals)?;
        }
        let residents = aggregator.finish();
        let total = Money::checked_sum(residents.iter().map(|r| &r.total))?;
        Ok(Self { residents, total })
    }

    /// Total for one resident, by exact name
    pub fn get(&self, resident: &str) -> Option<Money> {
        self.residents
            .iter()
            .find(|r| r.resident.as_str() == resident)
            .map(|r| r.total)
    }

    /// Sum over all residents; equals the month's rent
    pub fn sum(&self) -> Money {
        self.total
    }
}
