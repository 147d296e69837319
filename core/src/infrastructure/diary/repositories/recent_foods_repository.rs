use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_timestamp},
        diary::{ports::RecentFoodsRepository, value_objects::RecentFoods},
    },
    entity::recent_foods::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresRecentFoodsRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecentFoodsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecentFoodsRepository for PostgresRecentFoodsRepository {
    async fn get(&self, user_id: Uuid) -> Result<RecentFoods, CoreError> {
        let row = Entity::find_by_id(user_id).one(&self.db).await.map_err(|e| {
            error!("Failed to get recent foods: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(row
            .map(|r| serde_json::from_value(r.items).unwrap_or_default())
            .unwrap_or_default())
    }

    async fn save(&self, user_id: Uuid, recents: RecentFoods) -> Result<(), CoreError> {
        let (now, _) = generate_timestamp();
        let active_model = ActiveModel {
            user_id: Set(user_id),
            items: Set(serde_json::json!(recents)),
            updated_at: Set(now.fixed_offset()),
        };

        Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns([Column::Items, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to save recent foods: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn clear(&self, user_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to clear recent foods: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
