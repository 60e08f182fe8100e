//! Bill splitting across rent periods
//!
//! A bill is charged at a flat daily rate. Its days are cut along the rent
//! periods of every month it touches, and each piece is divided evenly among
//! the residents of that period regardless of room or cost ratio.

use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use core_kernel::{DateRange, YearMonth};
use domain_rent::{Aggregator, PeriodSegmenter};
use crate::bill::{Bill, BillCalculation, BillsCalculations, PeriodCalculation};
use crate::error::BillError;
use crate::ports::MonthResidencySource;

/// Every month from the earliest first day to the latest last day of a set of
/// bills
///
/// # Errors
///
/// - `BillError::NoBills` if `bills` is empty
/// - `BillError::MonthsOutOfOrder` if the latest month precedes the earliest
pub fn required_months(bills: &[Bill]) -> Result<Vec<YearMonth>, BillError> {
    let first = bills
        .iter()
        .map(|b| b.range.start)
        .min()
        .ok_or(BillError::NoBills)?;
    let last = bills
        .iter()
        .map(|b| b.range.end)
        .max()
        .ok_or(BillError::NoBills)?;

    let first = YearMonth::from_date(first);
    let last = YearMonth::from_date(last);
    if last < first {
        return Err(BillError::MonthsOutOfOrder { first, last });
    }

    Ok(YearMonth::range_inclusive(first, last).collect())
}

/// Splits bills using an injected per-month residency source
///
/// Holds no state between calls; each split is independent.
pub struct BillSplitter<'s, S: MonthResidencySource + ?Sized> {
    source: &'s S,
}

impl<'s, S: MonthResidencySource + ?Sized> BillSplitter<'s, S> {
    pub fn new(source: &'s S) -> Self {
        Self { source }
    }

    /// Splits every bill, failing on the first error
    ///
    /// All required months are checked before any bill is split.
    #[instrument(skip_all, fields(bills = bills.len()))]
    pub fn split_all(&self, bills: &[Bill]) -> Result<BillsCalculations, BillError> {
        for month in required_months(bills)? {
            if self.source.rent_input(month).is_none() {
                return Err(BillError::MissingMonth(month));
            }
        }

        let calculations = bills
            .iter()
            .map(|bill| self.split(bill))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BillsCalculations { calculations })
    }

    /// Splits one bill across the periods it overlaps
    ///
    /// # Errors
    ///
    /// - `BillError::MissingMonth` if a touched month has no rent input
    /// - `BillError::MonthMismatch` or a rent error if a month's periods do
    ///   not tile that month
    /// - `BillError::EmptyPeriod` if part of the bill falls when nobody lived
    ///   in the house
    #[instrument(skip_all, fields(bill = %bill.name))]
    pub fn split(&self, bill: &Bill) -> Result<BillCalculation, BillError> {
        info!("Splitting bill {} over {}", bill.name, bill.range);

        debug!("Daily rate {} over {} days", bill.daily_amount().amount(), bill.num_days());

        let mut periods = Vec::new();
        for month in YearMonth::range_inclusive(bill.range.first_month(), bill.range.last_month()) {
            let input = self
                .source
                .rent_input(month)
                .ok_or(BillError::MissingMonth(month))?;

            let ranges: Vec<DateRange> = input.periods.iter().map(|p| p.range).collect();
            let covered = PeriodSegmenter::verify_month_coverage(&ranges)?;
            if covered != month {
                return Err(BillError::MonthMismatch {
                    requested: month,
                    found: covered,
                });
            }

            for piece in PeriodSegmenter::range_aligned(&bill.range, &input.periods) {
                let roommates: Vec<_> = piece.period.residents().cloned().collect();
                if roommates.is_empty() {
                    return Err(BillError::EmptyPeriod {
                        bill: bill.name.clone(),
                        period_start: piece.range.start,
                    });
                }

                let amount = bill.daily_amount().checked_mul(Decimal::from(piece.range.days()))?;
                debug!(
                    "Period {}: {} days, amount {}, {} roommates",
                    piece.range,
                    piece.range.days(),
                    amount.amount(),
                    roommates.len()
                );
                periods.push(PeriodCalculation::new(piece.range, amount, roommates)?);
            }
        }

        let mut aggregator = Aggregator::new();
        for period in &periods {
            let share = period.amount_per_person();
            for roommate in &period.roommates {
                aggregator.add(roommate, share)?;
            }
        }

        Ok(BillCalculation {
            bill: bill.clone(),
            periods,
            roommate_totals: aggregator.finish(),
        })
    }
}
