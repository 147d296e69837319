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
        recipe::{
            entities::{Recipe, RecipeItem},
            ports::RecipeRepository,
            value_objects::GetRecipesFilter,
        },
    },
    entity::{
        recipe_items::{
            ActiveModel as ItemActiveModel, Column as ItemColumn, Entity as ItemEntity,
        },
        recipes::{ActiveModel, Column, Entity},
    },
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn active_model(recipe: &Recipe) -> ActiveModel {
        ActiveModel {
            id: Set(recipe.id),
            user_id: Set(recipe.user_id),
            title: Set(recipe.title.clone()),
            description: Set(recipe.description.clone()),
            cover_image: Set(recipe.cover_image.clone()),
            tags: Set(serde_json::json!(recipe.tags)),
            steps: Set(recipe.steps.clone()),
            created_at: Set(recipe.created_at.fixed_offset()),
            updated_at: Set(recipe.updated_at.fixed_offset()),
        }
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn create(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let created = Entity::insert(Self::active_model(&recipe))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Recipe::from(created))
    }

    async fn get_by_id(&self, recipe_id: Uuid, user_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let recipe = Entity::find()
            .filter(Column::Id.eq(recipe_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(recipe.map(Recipe::from))
    }

    async fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetRecipesFilter,
    ) -> Result<Vec<Recipe>, CoreError> {
        let mut query = Entity::find().filter(Column::UserId.eq(user_id));

        let mut condition = Condition::all();
        if let Some(ref title) = filter.title {
            condition = condition.add(Expr::col(Column::Title).ilike(format!("%{title}%")));
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
                    "title" => query = query.order_by(Column::Title, order),
                    "created_at" => query = query.order_by(Column::CreatedAt, order),
                    _ => {}
                }
            }
        } else {
            query = query.order_by_desc(Column::CreatedAt);
        }

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }
        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let recipes = query.all(&self.db).await.map_err(|e| {
            error!("Failed to get recipes: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(recipes.iter().map(Recipe::from).collect())
    }

    async fn update(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let updated = Entity::update(Self::active_model(&recipe))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Recipe::from(updated))
    }

    async fn delete(&self, recipe_id: Uuid, user_id: Uuid) -> Result<(), CoreError> {
        // Items first; the recipe row owns them.
        ItemEntity::delete_many()
            .filter(ItemColumn::RecipeId.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe items: {}", e);
                CoreError::InternalServerError
            })?;

        Entity::delete_many()
            .filter(Column::Id.eq(recipe_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn get_items(&self, recipe_id: Uuid) -> Result<Vec<RecipeItem>, CoreError> {
        let items = ItemEntity::find()
            .filter(ItemColumn::RecipeId.eq(recipe_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe items: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(items.iter().map(RecipeItem::from).collect())
    }

    async fn replace_items(
        &self,
        recipe_id: Uuid,
        items: Vec<RecipeItem>,
    ) -> Result<Vec<RecipeItem>, CoreError> {
        ItemEntity::delete_many()
            .filter(ItemColumn::RecipeId.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe items: {}", e);
                CoreError::InternalServerError
            })?;

        if !items.is_empty() {
            let models: Vec<ItemActiveModel> = items
                .iter()
                .map(|item| ItemActiveModel {
                    id: Set(item.id),
                    recipe_id: Set(item.recipe_id),
                    ingredient_id: Set(item.ingredient_id),
                    amount_g: Set(item.amount_g),
                    is_main: Set(item.is_main),
                })
                .collect();

            ItemEntity::insert_many(models)
                .exec(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to create recipe items: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        Ok(items)
    }
}
