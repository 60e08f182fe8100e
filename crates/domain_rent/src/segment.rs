//! Period segmentation
//!
//! Two strategies produce contiguous, inclusive sub-periods:
//!
//! - **Month-aligned**: a month is cut at the days residency changes. Each
//!   period ends the day before the next one starts; the last one ends on the
//!   last day of the month.
//! - **Range-aligned**: an arbitrary billed range is cut wherever it crosses
//!   the rent periods of the months it touches.

use chrono::{Days, NaiveDate};

use core_kernel::{DateRange, YearMonth};
use crate::error::RentError;
use crate::residency::PeriodInput;

/// A piece of a billed range that falls inside one rent period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubPeriod<'a> {
    /// Days of the bill inside the rent period
    pub range: DateRange,
    /// The rent period supplying the residents
    pub period: &'a PeriodInput,
}

/// Splits date ranges into periods
pub struct PeriodSegmenter;

impl PeriodSegmenter {
    /// Builds the periods of one month from the days residency changes
    ///
    /// # Arguments
    ///
    /// * `starts` - First day of each period, chronological; the first must
    ///   be the 1st of the month and all must be in the same month
    ///
    /// # Errors
    ///
    /// Returns `RentError::InvalidPeriodStarts` if the starts are empty, out
    /// of order, not in one month, or do not begin on the 1st
    pub fn month_aligned(starts: &[NaiveDate]) -> Result<Vec<DateRange>, RentError> {
        let first = *starts
            .first()
            .ok_or_else(|| RentError::InvalidPeriodStarts("no period start dates".to_string()))?;
        let month = YearMonth::from_date(first);

        if first != month.first_day() {
            return Err(RentError::InvalidPeriodStarts(format!(
                "first period must start on {}, found {}",
                month.first_day(),
                first
            )));
        }

        for pair in starts.windows(2) {
            if pair[1] <= pair[0] {
                return Err(RentError::InvalidPeriodStarts(format!(
                    "{} does not come after {}",
                    pair[1], pair[0]
                )));
            }
        }

        if let Some(outside) = starts.iter().find(|d| YearMonth::from_date(**d) != month) {
            return Err(RentError::InvalidPeriodStarts(format!(
                "{} is not in {}",
                outside, month
            )));
        }

        let mut ranges = Vec::with_capacity(starts.len());
        for (i, start) in starts.iter().enumerate() {
            let end = match starts.get(i + 1) {
                Some(next) => day_before(*next)?,
                None => month.last_day(),
            };
            ranges.push(DateRange::new(*start, end)?);
        }

        Ok(ranges)
    }

    /// Checks that periods tile exactly one calendar month
    ///
    /// # Returns
    ///
    /// The month covered
    ///
    /// # Errors
    ///
    /// Returns `RentError::NoPeriods` for an empty list, a temporal error if a
    /// period spans months, or `RentError::PeriodsNotContiguous` on a gap,
    /// overlap, or partial coverage
    pub fn verify_month_coverage(ranges: &[DateRange]) -> Result<YearMonth, RentError> {
        let first = ranges.first().ok_or(RentError::NoPeriods)?;
        let month = first.first_month();
        let mut expected = month.first_day();

        for range in ranges {
            DateRange::within_month(range.start, range.end)?;

            if range.start != expected {
                return Err(RentError::PeriodsNotContiguous(format!(
                    "expected a period starting {}, found {}",
                    expected, range
                )));
            }
            if range.end == month.last_day() {
                expected = month.next().first_day();
            } else {
                expected = range
                    .end
                    .checked_add_days(Days::new(1))
                    .ok_or_else(|| RentError::PeriodsNotContiguous(range.to_string()))?;
            }
        }

        if expected != month.next().first_day() {
            return Err(RentError::PeriodsNotContiguous(format!(
                "periods end before {}",
                month.last_day()
            )));
        }

        Ok(month)
    }

    /// Cuts a billed range along the rent periods of one month
    ///
    /// Rent periods that do not overlap the bill produce nothing. Each overlap
    /// runs from the later of the two first days to the earlier of the two
    /// last days.
    pub fn range_aligned<'a>(bill: &DateRange, periods: &'a [PeriodInput]) -> Vec<SubPeriod<'a>> {
        periods
            .iter()
            .filter_map(|period| {
                bill.intersect(&period.range)
                    .map(|range| SubPeriod { range, period })
            })
            .collect()
    }
}

fn day_before(date: NaiveDate) -> Result<NaiveDate, RentError> {
    date.checked_sub_days(Days::new(1))
        .ok_or_else(|| RentError::InvalidPeriodStarts(format!("no day before {}", date)))
}
