//! Monthly rent calculation

use serde::Serialize;
use tracing::{info, instrument};

use core_kernel::{DateRange, Money, YearMonth};
use crate::aggregate::MonthTotals;
use crate::allocation::{PeriodAllocator, PeriodOutput};
use crate::configuration::RentInput;
use crate::error::RentError;
use crate::segment::PeriodSegmenter;

/// The entire output of a rent calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentOutput {
    pub month: YearMonth,
    pub total_rent: Money,
    /// Sum of room base prices; differs from the rent when rooms are under or over priced
    pub base_price_sum: Money,
    pub periods: Vec<PeriodOutput>,
    pub month_totals: MonthTotals,
}

/// Calculates one month of rent
///
/// Single use: `calculate` consumes the calculator. Build a new one for each
/// input; nothing carries over between runs.
pub struct RentCalculator<'a> {
    input: &'a RentInput,
}

impl<'a> RentCalculator<'a> {
    pub fn new(input: &'a RentInput) -> Self {
        Self { input }
    }

    /// Allocates every period and totals the month
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; no partial output is produced
    #[instrument(skip(self), fields(periods = self.input.periods.len()))]
    pub fn calculate(self) -> Result<RentOutput, RentError> {
        let ranges: Vec<DateRange> = self.input.periods.iter().map(|p| p.range).collect();
        let month = PeriodSegmenter::verify_month_coverage(&ranges)?;

        let config = &self.input.config;
        let base_price_sum = config.base_price_sum()?;
        let allocator = PeriodAllocator::new(config);
        let periods = self
            .input
            .periods
            .iter()
            .map(|period| allocator.allocate(period))
            .collect::<Result<Vec<_>, _>>()?;

        info!("Calculating monthly totals across {} periods", periods.len());
        let month_totals = MonthTotals::from_periods(&periods)?;
        for total in &month_totals.residents {
            info!("{}: {}", total.resident, total.total.amount());
        }

        Ok(RentOutput {
            month,
            total_rent: config.total_rent,
            base_price_sum,
            periods,
            month_totals,
        })
    }
}

/// Calculates rent for one month's input
pub fn calculate_rent(input: &RentInput) -> Result<RentOutput, RentError> {
    RentCalculator::new(input).calculate()
}
