//! Command implementations
//!
//! Each command returns the text to print; the binary decides where it goes.

use std::path::Path;

use tracing::info;

use domain_bills::{required_months, BillSplitter};
use domain_rent::RentCalculator;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{load_bills_sheet, load_rent_sheet, SheetDirectory};
use crate::report::{render_bills, render_rent};
use crate::template::{new_bills_sheet, new_rent_sheet};

/// Calculates one month's rent from a rent sheet
pub fn rent(sheet: &Path, config: &CliConfig) -> Result<String, CliError> {
    let input = load_rent_sheet(sheet, &config.timezone)?;
    let output = RentCalculator::new(&input).calculate()?;
    render_rent(&output, config.format)
}

/// Splits every bill in a bills document over the monthly rent sheets
///
/// Every month the bills touch must have a sheet in the sheets directory;
/// all of them are loaded before any bill is split.
pub fn bills(document: &Path, config: &CliConfig) -> Result<String, CliError> {
    let bills = load_bills_sheet(document, &config.timezone)?;
    let months = required_months(&bills)?;
    info!(
        "Loading {} rent sheet(s) from {}",
        months.len(),
        config.sheets_dir.display()
    );

    let inputs = SheetDirectory::new(&config.sheets_dir).load_months(&months, &config.timezone)?;
    let calculations = BillSplitter::new(&inputs).split_all(&bills)?;
    render_bills(&calculations, config.format)
}

/// A starter rent sheet for next month, with its suggested file name
pub fn new_rent(config: &CliConfig) -> Result<(String, String), CliError> {
    let (name, sheet) = new_rent_sheet(config.timezone.today(), config.timezone);
    Ok((format!("{}.json", name), serde_json::to_string_pretty(&sheet)?))
}

/// An empty bills document
pub fn new_bills(config: &CliConfig) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(&new_bills_sheet(config.timezone))?)
}
