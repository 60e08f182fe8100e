//! Starter sheets

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::{Money, Timezone, YearMonth};

use crate::dto::{BillsSheet, RentSheet, RoomRow};
use crate::input::SheetDirectory;

/// A rent sheet for the month after `today`, with sample rooms and residents
///
/// Returns the sheet together with its conventional name, `YYYY-MM-01`.
pub fn new_rent_sheet(today: NaiveDate, timezone: Timezone) -> (String, RentSheet) {
    let month = YearMonth::from_date(today).next();

    let room = |name: &str, price: i64, resident: &str| RoomRow {
        name: name.to_string(),
        base_price: Money::new(Decimal::from(price)),
        residents: vec![resident.to_string()],
    };

    let sheet = RentSheet {
        timezone: Some(timezone),
        period_starts: vec![month.first_day()],
        rooms: vec![
            room("Big room", 2000, "Dani"),
            room("Upstairs room", 1500, "Jill"),
            room("Small room", 1000, "Beatrice"),
        ],
        extra_person_fee: Money::new(Decimal::from(250)),
        rent_due: Money::new(Decimal::from(5095)),
    };

    (SheetDirectory::sheet_name(month), sheet)
}

/// A bills document with no bills
pub fn new_bills_sheet(timezone: Timezone) -> BillsSheet {
    BillsSheet {
        timezone: Some(timezone),
        bills: Vec::new(),
    }
}
