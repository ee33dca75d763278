use serde::{Deserialize, Serialize};

use crate::models::date::Date;

/// One diary entry. Dates are stamped at day granularity; nothing stops
/// several entries from sharing the same date.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: i32,
    pub date: Date,
    pub name: String,
    pub body: String,
}
