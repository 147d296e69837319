use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        profile::{entities::Profile, ports::ProfileRepository},
    },
    entity::profiles::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ProfileRepository for PostgresProfileRepository {
    async fn get_by_device_id(&self, device_id: String) -> Result<Option<Profile>, CoreError> {
        let profile = Entity::find()
            .filter(Column::DeviceId.eq(device_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get profile: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(profile.map(Profile::from))
    }

    async fn create(&self, profile: Profile) -> Result<Profile, CoreError> {
        let active_model = ActiveModel {
            id: Set(profile.id),
            device_id: Set(profile.device_id.clone()),
            created_at: Set(profile.created_at.fixed_offset()),
            updated_at: Set(profile.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create profile: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Profile::from(created))
    }
}
