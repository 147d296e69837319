use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::nutrition::Macros;

/// Summed intake of one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub intake: Macros,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyStats {
    /// One bucket per day of the requested range, zero-filled, future days
    /// excluded.
    pub items: Vec<DayBucket>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Average calories over days that have at least one record; 0 if none.
    pub avg_calories: f64,
}
