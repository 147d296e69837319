use chrono::NaiveDate;
use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    stats::value_objects::{DailyStats, DayBucket},
};

#[cfg_attr(test, mockall::automock)]
pub trait StatsRepository: Send + Sync {
    /// Per-day intake sums for days inside the range that have records.
    fn get_daily_totals(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Future<Output = Result<Vec<DayBucket>, CoreError>> + Send;
}

pub trait StatsService: Send + Sync {
    fn daily_stats(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Future<Output = Result<DailyStats, CoreError>> + Send;
}
