//! Rent sheet document

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Timezone};

/// One month's rent sheet: rooms are rows, periods are columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentSheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<Timezone>,
    /// First day of each period
    pub period_starts: Vec<NaiveDate>,
    pub rooms: Vec<RoomRow>,
    pub extra_person_fee: Money,
    pub rent_due: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRow {
    pub name: String,
    pub base_price: Money,
    /// One residency cell per period
    #[serde(default)]
    pub residents: Vec<String>,
}
