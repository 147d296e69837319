use chrono::NaiveDate;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        diary::{entities::DailyGoal, ports::GoalRepository},
    },
    entity::daily_goals::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresGoalRepository {
    pub db: DatabaseConnection,
}

impl PostgresGoalRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl GoalRepository for PostgresGoalRepository {
    async fn upsert(&self, goal: DailyGoal) -> Result<DailyGoal, CoreError> {
        let active_model = ActiveModel {
            id: Set(goal.id),
            user_id: Set(goal.user_id),
            apply_date: Set(goal.apply_date),
            target_protein: Set(goal.target_protein),
            target_fat: Set(goal.target_fat),
            target_carbs: Set(goal.target_carbs),
            created_at: Set(goal.created_at.fixed_offset()),
            updated_at: Set(goal.updated_at.fixed_offset()),
        };

        let saved = Entity::insert(active_model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::ApplyDate])
                    .update_columns([
                        Column::TargetProtein,
                        Column::TargetFat,
                        Column::TargetCarbs,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert daily goal: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(DailyGoal::from(saved))
    }

    async fn get_effective(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<DailyGoal>, CoreError> {
        let goal = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ApplyDate.lte(date))
            .order_by_desc(Column::ApplyDate)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get effective goal: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(goal.map(DailyGoal::from))
    }
}
