use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::Expr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        tag::{entities::Tag, ports::TagRepository},
    },
    entity::tags::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresTagRepository {
    pub db: DatabaseConnection,
}

impl PostgresTagRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl TagRepository for PostgresTagRepository {
    async fn create(&self, tag: Tag) -> Result<Tag, CoreError> {
        let active_model = ActiveModel {
            id: Set(tag.id),
            user_id: Set(tag.user_id),
            category: Set(tag.category.clone()),
            name: Set(tag.name.clone()),
            category_rank: Set(tag.category_rank),
            tag_rank: Set(tag.tag_rank),
            created_at: Set(tag.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create tag: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Tag::from(created))
    }

    async fn get_by_id(&self, tag_id: Uuid, user_id: Uuid) -> Result<Option<Tag>, CoreError> {
        let tag = Entity::find()
            .filter(Column::Id.eq(tag_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get tag: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(tag.map(Tag::from))
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Tag>, CoreError> {
        let tags = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::CategoryRank)
            .order_by_asc(Column::TagRank)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get tags: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(tags.iter().map(Tag::from).collect())
    }

    async fn set_tag_ranks(&self, updates: Vec<(Uuid, i32)>) -> Result<(), CoreError> {
        for (tag_id, rank) in updates {
            Entity::update_many()
                .col_expr(Column::TagRank, Expr::value(rank))
                .filter(Column::Id.eq(tag_id))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to set tag rank: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        Ok(())
    }

    async fn set_category_rank(
        &self,
        user_id: Uuid,
        category: String,
        rank: i32,
    ) -> Result<(), CoreError> {
        Entity::update_many()
            .col_expr(Column::CategoryRank, Expr::value(rank))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Category.eq(category))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to set category rank: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn delete(&self, tag_id: Uuid, user_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(tag_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete tag: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
