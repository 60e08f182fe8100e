//! Day-weighted allocation and reconciliation of one rent period
//!
//! A period's target cost is its day-weighted share of the month's rent.
//! Each resident's subtotal comes from their room's price, their share of
//! the room, and the same day weighting. Subtotals rarely add up to the
//! target: base prices need not sum to the rent, surcharges add to it, and
//! shares may not sum to one. The difference is spread equally over every
//! resident of the period so the adjusted totals always add up to the target.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use core_kernel::{days_in_month, DateRange, Money, MoneyError, Ratio, ResidentName, RoomName};
use crate::configuration::RentConfiguration;
use crate::error::RentError;
use crate::ratio::{RatioResolver, RatioSumWarning};
use crate::residency::PeriodInput;

/// An amount owed by a resident
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResidentCost {
    pub resident: ResidentName,
    pub cost: Money,
}

impl ResidentCost {
    pub fn new(resident: ResidentName, cost: Money) -> Self {
        Self { resident, cost }
    }
}

/// How one occupied room was priced during a period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomCharge {
    pub room: RoomName,
    pub occupants: usize,
    /// Monthly base price plus surcharge for extra occupants
    pub price_with_surcharge: Money,
    /// Resolved share of each occupant, in listed order
    pub ratios: Vec<(ResidentName, Ratio)>,
}

/// The calculation of rent for one period of the month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodOutput {
    pub range: DateRange,
    pub days_in_period: u32,
    pub days_in_month: u32,
    /// `days_in_period / days_in_month`
    pub period_month_ratio: Decimal,
    /// This period's share of the monthly rent
    pub period_cost: Money,
    pub rooms: Vec<RoomCharge>,
    /// Sum of resident subtotals before reconciliation
    pub cost_subtotal: Money,
    /// `cost_subtotal - period_cost`
    pub total_overage: Money,
    /// Amount subtracted from every resident's subtotal
    pub overage_per_person: Money,
    pub resident_subtotals: Vec<ResidentCost>,
    pub resident_adjusted_totals: Vec<ResidentCost>,
    pub warnings: Vec<RatioSumWarning>,
}

impl PeriodOutput {
    /// Sum of adjusted totals; equals `period_cost`
    pub fn adjusted_sum(&self) -> Result<Money, MoneyError> {
        Money::checked_sum(self.resident_adjusted_totals.iter().map(|r| &r.cost))
    }
}

/// Allocates rent periods against one month's configuration
pub struct PeriodAllocator<'a> {
    config: &'a RentConfiguration,
}

impl<'a> PeriodAllocator<'a> {
    pub fn new(config: &'a RentConfiguration) -> Self {
        Self { config }
    }

    /// Computes subtotals and reconciled totals for one period
    ///
    /// # Errors
    ///
    /// - Temporal error if the period spans two calendar months
    /// - `RentError::UnknownRoom` if a residency names a room not configured
    /// - `RentError::EmptyRoom` if a residency lists no residents
    /// - `RentError::EmptyPeriod` if nobody lives anywhere during the period
    /// - `RentError::Money` if prices or shares are too large to compute with
    pub fn allocate(&self, period: &PeriodInput) -> Result<PeriodOutput, RentError> {
        let range = DateRange::within_month(period.first_day(), period.last_day())?;

        info!("Calculating period {}", range);

        let days_in_period = range.days();
        let days_in_month = days_in_month(range.start);
        let period_month_ratio = Decimal::from(days_in_period) / Decimal::from(days_in_month);
        let period_cost = self.config.total_rent.checked_mul(period_month_ratio)?;

        debug!("Days in period {} / {}", days_in_period, days_in_month);
        debug!("Cost of period {}", period_cost.amount());

        let mut rooms = Vec::with_capacity(period.residency.len());
        let mut resident_subtotals = Vec::new();
        let mut warnings = Vec::new();

        for residency in &period.residency {
            let room = self.config.room(&residency.room).ok_or_else(|| RentError::UnknownRoom {
                room: residency.room.clone(),
                period_start: range.start,
            })?;
            if residency.residents.is_empty() {
                return Err(RentError::EmptyRoom {
                    room: residency.room.clone(),
                    period_start: range.start,
                });
            }

            let resolved = RatioResolver::resolve(&room.name, &residency.residents)?;
            let price = self.config.price_with_surcharge(room, residency.residents.len())?;

            for resident in &resolved.residents {
                let subtotal = price
                    .checked_mul(resident.ratio.as_decimal())?
                    .checked_mul(period_month_ratio)?;
                debug!("{}'s subtotal {}", resident.name, subtotal.amount());
                resident_subtotals.push(ResidentCost::new(resident.name.clone(), subtotal));
            }

            rooms.push(RoomCharge {
                room: room.name.clone(),
                occupants: residency.residents.len(),
                price_with_surcharge: price,
                ratios: resolved
                    .residents
                    .iter()
                    .map(|r| (r.name.clone(), r.ratio))
                    .collect(),
            });
            warnings.extend(resolved.warning);
        }

        if resident_subtotals.is_empty() {
            return Err(RentError::EmptyPeriod {
                period_start: range.start,
            });
        }

        let cost_subtotal = Money::checked_sum(resident_subtotals.iter().map(|r| &r.cost))?;
        let total_overage = cost_subtotal.checked_sub(&period_cost)?;
        let overage_per_person = total_overage.split_evenly(resident_subtotals.len())?;

        debug!(
            "Overage: {} ({} per person)",
            total_overage.amount(),
            overage_per_person.amount()
        );

        let resident_adjusted_totals = resident_subtotals
            .iter()
            .map(|subtotal| -> Result<ResidentCost, RentError> {
                let adjusted = subtotal.cost.checked_sub(&overage_per_person)?;
                debug!("{}: {}", subtotal.resident, adjusted.amount());
                Ok(ResidentCost::new(subtotal.resident.clone(), adjusted))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PeriodOutput {
            range,
            days_in_period,
            days_in_month,
            period_month_ratio,
            period_cost,
            rooms,
            cost_subtotal,
            total_overage,
            overage_per_person,
            resident_subtotals,
            resident_adjusted_totals,
            warnings,
        })
    }
}
