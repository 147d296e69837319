use chrono::NaiveDate;
use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diary::{
        entities::{DailyGoal, LogEntry},
        value_objects::{
            CreateLogInput, DaySummary, GoalTargets, RecentFoods, SetGoalInput, UpdateLogInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait DiaryLogRepository: Send + Sync {
    fn create(&self, entry: LogEntry) -> impl Future<Output = Result<LogEntry, CoreError>> + Send;

    fn get_by_id(
        &self,
        entry_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<LogEntry>, CoreError>> + Send;

    fn get_by_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<LogEntry>, CoreError>> + Send;

    fn update(&self, entry: LogEntry) -> impl Future<Output = Result<LogEntry, CoreError>> + Send;

    fn delete(
        &self,
        entry_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait GoalRepository: Send + Sync {
    /// Insert or update the goal row keyed by `(user_id, apply_date)`.
    fn upsert(&self, goal: DailyGoal)
    -> impl Future<Output = Result<DailyGoal, CoreError>> + Send;

    /// Latest goal whose `apply_date` is on or before `date`.
    fn get_effective(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Option<DailyGoal>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecentFoodsRepository: Send + Sync {
    fn get(&self, user_id: Uuid) -> impl Future<Output = Result<RecentFoods, CoreError>> + Send;

    fn save(
        &self,
        user_id: Uuid,
        recents: RecentFoods,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear(&self, user_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait DiaryService: Send + Sync {
    fn create_log(
        &self,
        user_id: Uuid,
        input: CreateLogInput,
    ) -> impl Future<Output = Result<LogEntry, CoreError>> + Send;

    fn get_logs(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<LogEntry>, CoreError>> + Send;

    fn day_summary(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> impl Future<Output = Result<DaySummary, CoreError>> + Send;

    fn update_log(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
        input: UpdateLogInput,
    ) -> impl Future<Output = Result<LogEntry, CoreError>> + Send;

    fn delete_log(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn set_goal(
        &self,
        user_id: Uuid,
        input: SetGoalInput,
    ) -> impl Future<Output = Result<DailyGoal, CoreError>> + Send;

    fn effective_goal(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> impl Future<Output = Result<GoalTargets, CoreError>> + Send;

    fn recent_foods(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<RecentFoods, CoreError>> + Send;

    fn remove_recent_food(
        &self,
        user_id: Uuid,
        name: String,
    ) -> impl Future<Output = Result<RecentFoods, CoreError>> + Send;

    fn clear_recent_foods(&self, user_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}
