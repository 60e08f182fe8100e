//! Turning sheet documents into validated engine input
//!
//! Every check here runs before any calculation starts. The first problem
//! found is returned; nothing is partially loaded.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use core_kernel::{CoreError, Timezone, YearMonth};
use domain_bills::{Bill, MonthlyRentInputs};
use domain_rent::{
    PeriodInput, PeriodSegmenter, RentConfiguration, RentInput, RoomConfig, RoomResidency,
};

use crate::dto::{BillsSheet, RentSheet};
use crate::error::CliError;
use crate::parse::{is_valid_room_name, parse_residency_cell};

/// Reads and deserializes a JSON document
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Document {
        path: path.to_path_buf(),
        source,
    })
}

/// Fails if a sheet names a timezone other than the configured one
pub fn check_timezone(sheet: Option<&Timezone>, configured: &Timezone) -> Result<(), CoreError> {
    match sheet {
        Some(tz) if tz != configured => Err(CoreError::configuration(format!(
            "sheet timezone {} does not match configured timezone {}",
            tz, configured
        ))),
        _ => Ok(()),
    }
}

/// Validates a rent sheet and builds the month's rent input
///
/// # Errors
///
/// - `CoreError::Configuration` on a timezone mismatch
/// - `CoreError::Validation` for a bad room name or a residents row with the
///   wrong number of cells
/// - `CliError::Residency` for an unparseable residency cell
/// - Rent errors for bad period starts or duplicate room names
pub fn rent_input_from_sheet(
    sheet: &RentSheet,
    timezone: &Timezone,
) -> Result<RentInput, CliError> {
    check_timezone(sheet.timezone.as_ref(), timezone)?;

    let ranges = PeriodSegmenter::month_aligned(&sheet.period_starts)?;

    let mut seen = HashSet::new();
    for row in &sheet.rooms {
        if !is_valid_room_name(&row.name) {
            return Err(CoreError::validation(format!(
                "room name '{}' may only contain letters, digits, spaces and hyphens",
                row.name
            ))
            .into());
        }
        if !seen.insert(row.name.as_str()) {
            let message = format!("room '{}' is listed twice", row.name);
            return Err(CoreError::validation(message).into());
        }
        if row.residents.len() != ranges.len() {
            return Err(CoreError::validation(format!(
                "room '{}' has {} residency cells for {} periods",
                row.name,
                row.residents.len(),
                ranges.len()
            ))
            .into());
        }
    }

    let mut periods = Vec::with_capacity(ranges.len());
    for (column, range) in ranges.iter().enumerate() {
        let mut residency = Vec::new();
        for row in &sheet.rooms {
            let residents =
                parse_residency_cell(&row.residents[column]).map_err(|source| {
                    CliError::Residency {
                        room: row.name.clone(),
                        period_start: range.start,
                        source,
                    }
                })?;
            if !residents.is_empty() {
                residency.push(RoomResidency::new(row.name.as_str(), residents));
            }
        }
        debug!("Read period {} with {} occupied rooms", range, residency.len());
        periods.push(PeriodInput::new(range.start, range.end, residency)?);
    }

    let rooms = sheet
        .rooms
        .iter()
        .map(|row| RoomConfig::new(row.name.as_str(), row.base_price))
        .collect();
    let config = RentConfiguration::new(sheet.rent_due, rooms, sheet.extra_person_fee)?;

    Ok(RentInput::new(periods, config))
}

/// Reads a rent sheet from disk and validates it
pub fn load_rent_sheet(path: &Path, timezone: &Timezone) -> Result<RentInput, CliError> {
    info!("Reading rent sheet {}", path.display());
    let sheet: RentSheet = read_document(path)?;
    rent_input_from_sheet(&sheet, timezone)
}

/// Validates a bills document
///
/// Errors name the bill's 1-based row.
pub fn bills_from_sheet(sheet: &BillsSheet, timezone: &Timezone) -> Result<Vec<Bill>, CliError> {
    check_timezone(sheet.timezone.as_ref(), timezone)?;

    sheet
        .bills
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Bill::new(row.name.as_str(), row.amount, row.first_day, row.last_day)
                .map_err(|source| CliError::BillRow { row: i + 1, source })
        })
        .collect()
}

/// Reads a bills document from disk and validates it
pub fn load_bills_sheet(path: &Path, timezone: &Timezone) -> Result<Vec<Bill>, CliError> {
    info!("Reading bills {}", path.display());
    let sheet: BillsSheet = read_document(path)?;
    bills_from_sheet(&sheet, timezone)
}

/// A directory of monthly rent sheets named `YYYY-MM-01.json`
#[derive(Debug, Clone)]
pub struct SheetDirectory {
    dir: PathBuf,
}

impl SheetDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File name of a month's sheet, without the directory
    pub fn sheet_name(month: YearMonth) -> String {
        month.first_day().format("%Y-%m-%d").to_string()
    }

    pub fn path_for(&self, month: YearMonth) -> PathBuf {
        self.dir.join(format!("{}.json", Self::sheet_name(month)))
    }

    /// Loads and validates one month's sheet
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` if the month has no sheet
    pub fn load_month(&self, month: YearMonth, timezone: &Timezone) -> Result<RentInput, CliError> {
        let path = self.path_for(month);
        if !path.is_file() {
            let message = format!("could not find rent sheet {}", Self::sheet_name(month));
            return Err(CoreError::not_found(message).into());
        }
        load_rent_sheet(&path, timezone)
    }

    /// Loads every listed month
    pub fn load_months(
        &self,
        months: &[YearMonth],
        timezone: &Timezone,
    ) -> Result<MonthlyRentInputs, CliError> {
        let mut inputs = MonthlyRentInputs::new();
        for &month in months {
            inputs.insert(month, self.load_month(month, timezone)?);
        }
        Ok(inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::Money;
    use domain_rent::{CostRatio, RentError};
    use rust_decimal_macros::dec;

    use crate::dto::{BillRow, RoomRow};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn room(name: &str, price: i64, cells: &[&str]) -> RoomRow {
        RoomRow {
            name: name.to_string(),
            base_price: Money::new(price.into()),
            residents: cells.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn sheet() -> RentSheet {
        RentSheet {
            timezone: None,
            period_starts: vec![date(2024, 3, 1), date(2024, 3, 15)],
            rooms: vec![
                room("Big room", 2000, &["Dani", "Dani (0.6); Sam"]),
                room("Small room", 1000, &["Beatrice", ""]),
            ],
            extra_person_fee: Money::new(dec!(250)),
            rent_due: Money::new(dec!(3000)),
        }
    }

    #[test]
    fn test_sheet_becomes_periods_and_config() {
        let input = rent_input_from_sheet(&sheet(), &Timezone::default()).unwrap();

        assert_eq!(input.periods.len(), 2);
        assert_eq!(input.periods[0].range.end, date(2024, 3, 14));
        assert_eq!(input.periods[1].range.end, date(2024, 3, 31));
        assert_eq!(input.periods[0].residency.len(), 2);
        // Empty cell leaves the small room out of the second period
        assert_eq!(input.periods[1].residency.len(), 1);
        assert_eq!(input.periods[1].residency[0].residents[1].cost_ratio, CostRatio::Default);
        assert_eq!(input.config.rooms().len(), 2);
    }

    #[test]
    fn test_timezone_mismatch_is_fatal() {
        let mut sheet = sheet();
        sheet.timezone = Some("America/New_York".parse().unwrap());

        let result = rent_input_from_sheet(&sheet, &Timezone::default());

        assert!(matches!(result, Err(CliError::Core(CoreError::Configuration(_)))));
    }

    #[test]
    fn test_cell_count_must_match_periods() {
        let mut sheet = sheet();
        sheet.rooms[1].residents.pop();

        let result = rent_input_from_sheet(&sheet, &Timezone::default());

        assert!(matches!(result, Err(CliError::Core(CoreError::Validation(_)))));
    }

    #[test]
    fn test_duplicate_room_is_rejected() {
        let mut sheet = sheet();
        sheet.rooms[1].name = "Big room".to_string();

        let result = rent_input_from_sheet(&sheet, &Timezone::default());

        assert!(matches!(result, Err(CliError::Core(CoreError::Validation(_)))));
    }

    #[test]
    fn test_bad_ratio_names_room_and_period() {
        let mut sheet = sheet();
        sheet.rooms[0].residents[1] = "Dani (lots)".to_string();

        let error = rent_input_from_sheet(&sheet, &Timezone::default()).unwrap_err();

        assert!(matches!(error, CliError::Residency { .. }));
        assert!(error.to_string().contains("Big room"));
        assert!(error.to_string().contains("2024-03-15"));
    }

    #[test]
    fn test_period_starts_must_begin_on_first() {
        let mut sheet = sheet();
        sheet.period_starts[0] = date(2024, 3, 2);

        let result = rent_input_from_sheet(&sheet, &Timezone::default());

        assert!(matches!(result, Err(CliError::Rent(RentError::InvalidPeriodStarts(_)))));
    }

    #[test]
    fn test_bill_errors_name_row() {
        let sheet = BillsSheet {
            timezone: None,
            bills: vec![
                BillRow {
                    name: "Electric".to_string(),
                    amount: Money::new(dec!(120)),
                    first_day: date(2024, 1, 1),
                    last_day: date(2024, 1, 31),
                },
                BillRow {
                    name: "Water".to_string(),
                    amount: Money::ZERO,
                    first_day: date(2024, 1, 1),
                    last_day: date(2024, 1, 31),
                },
            ],
        };

        let result = bills_from_sheet(&sheet, &Timezone::default());

        assert!(matches!(result, Err(CliError::BillRow { row: 2, .. })));
    }

    #[test]
    fn test_sheet_name_is_first_of_month() {
        let month = YearMonth::new(2024, 3).unwrap();
        assert_eq!(SheetDirectory::sheet_name(month), "2024-03-01");
        assert_eq!(
            SheetDirectory::new("sheets").path_for(month),
            PathBuf::from("sheets/2024-03-01.json")
        );
    }
}
