use chrono::NaiveDate;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        diary::{entities::LogEntry, ports::DiaryLogRepository},
    },
    entity::daily_logs::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresDiaryLogRepository {
    pub db: DatabaseConnection,
}

impl PostgresDiaryLogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn active_model(entry: &LogEntry) -> ActiveModel {
        ActiveModel {
            id: Set(entry.id),
            user_id: Set(entry.user_id),
            log_date: Set(entry.log_date),
            meal_slot: Set(entry.meal_slot.as_str().to_string()),
            food_name: Set(entry.food_name.clone()),
            image_url: Set(entry.image_url.clone()),
            amount_g: Set(entry.amount_g),
            intake_calories: Set(entry.intake.calories),
            intake_protein: Set(entry.intake.protein),
            intake_fat: Set(entry.intake.fat),
            intake_carbs: Set(entry.intake.carbs),
            created_at: Set(entry.created_at.fixed_offset()),
            updated_at: Set(entry.updated_at.fixed_offset()),
        }
    }
}

impl DiaryLogRepository for PostgresDiaryLogRepository {
    async fn create(&self, entry: LogEntry) -> Result<LogEntry, CoreError> {
        let created = Entity::insert(Self::active_model(&entry))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create diary log: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(LogEntry::from(created))
    }

    async fn get_by_id(&self, entry_id: Uuid, user_id: Uuid) -> Result<Option<LogEntry>, CoreError> {
        let entry = Entity::find()
            .filter(Column::Id.eq(entry_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get diary log: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(entry.map(LogEntry::from))
    }

    async fn get_by_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<LogEntry>, CoreError> {
        let entries = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::LogDate.eq(date))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get diary logs: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(entries.iter().map(LogEntry::from).collect())
    }

    async fn update(&self, entry: LogEntry) -> Result<LogEntry, CoreError> {
        let updated = Entity::update(Self::active_model(&entry))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update diary log: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(LogEntry::from(updated))
    }

    async fn delete(&self, entry_id: Uuid, user_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(entry_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete diary log: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
