use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect,
    sea_query::{Expr, extension::postgres::PgExpr},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        library::{
            entities::Ingredient, ports::IngredientRepository, value_objects::GetLibraryFilter,
        },
    },
    entity::ingredients::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pub db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn active_model(ingredient: &Ingredient) -> ActiveModel {
        ActiveModel {
            id: Set(ingredient.id),
            user_id: Set(ingredient.user_id),
            name: Set(ingredient.name.clone()),
            image_url: Set(ingredient.image_url.clone()),
            calories: Set(ingredient.per_100g.calories),
            protein: Set(ingredient.per_100g.protein),
            fat: Set(ingredient.per_100g.fat),
            carbs: Set(ingredient.per_100g.carbs),
            created_at: Set(ingredient.created_at.fixed_offset()),
            updated_at: Set(ingredient.updated_at.fixed_offset()),
        }
    }
}

impl IngredientRepository for PostgresIngredientRepository {
    async fn create(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let created = Entity::insert(Self::active_model(&ingredient))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Ingredient::from(created))
    }

    async fn get_by_id(
        &self,
        ingredient_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = Entity::find()
            .filter(Column::Id.eq(ingredient_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ingredient.map(Ingredient::from))
    }

    async fn get_by_name(
        &self,
        user_id: Uuid,
        name: String,
    ) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient by name: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ingredient.map(Ingredient::from))
    }

    async fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetLibraryFilter,
    ) -> Result<Vec<Ingredient>, CoreError> {
        let mut query = Entity::find().filter(Column::UserId.eq(user_id));

        let mut condition = Condition::all();
        if let Some(ref name) = filter.name {
            condition = condition.add(Expr::col(Column::Name).ilike(format!("%{name}%")));
        }
        query = query.filter(condition);

        if let Some(ref sort_str) = filter.sort {
            for sort_part in sort_str.split(',') {
                let sort_part = sort_part.trim();
                let (field, order) = match sort_part.strip_prefix('-') {
                    Some(field) => (field, Order::Desc),
                    None => (sort_part, Order::Asc),
                };
                match field {
                    "name" => query = query.order_by(Column::Name, order),
                    "created_at" => query = query.order_by(Column::CreatedAt, order),
                    _ => {}
                }
            }
        } else {
            query = query.order_by_asc(Column::Name);
        }

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }
        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let ingredients = query.all(&self.db).await.map_err(|e| {
            error!("Failed to get ingredients: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(ingredients.iter().map(Ingredient::from).collect())
    }

    async fn get_by_ids(&self, ingredient_ids: Vec<Uuid>) -> Result<Vec<Ingredient>, CoreError> {
        if ingredient_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ingredients = Entity::find()
            .filter(Column::Id.is_in(ingredient_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredients by ids: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ingredients.iter().map(Ingredient::from).collect())
    }

    async fn update(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let updated = Entity::update(Self::active_model(&ingredient))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Ingredient::from(updated))
    }

    async fn delete(&self, ingredient_id: Uuid, user_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(ingredient_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
