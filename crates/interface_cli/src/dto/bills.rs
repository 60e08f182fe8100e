//! Bills document

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Timezone};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillsSheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<Timezone>,
    #[serde(default)]
    pub bills: Vec<BillRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillRow {
    pub name: String,
    pub amount: Money,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}
