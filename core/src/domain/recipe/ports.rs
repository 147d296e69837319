use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Recipe, RecipeDetail, RecipeItem, RecipeNutrition},
        value_objects::{CreateRecipeInput, GetRecipesFilter, UpdateRecipeInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn create(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn update(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_items(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RecipeItem>, CoreError>> + Send;

    /// Deletes the current items of the recipe and inserts `items`.
    fn replace_items(
        &self,
        recipe_id: Uuid,
        items: Vec<RecipeItem>,
    ) -> impl Future<Output = Result<Vec<RecipeItem>, CoreError>> + Send;
}

pub trait RecipeService: Send + Sync {
    fn create_recipe(
        &self,
        user_id: Uuid,
        input: CreateRecipeInput,
    ) -> impl Future<Output = Result<RecipeDetail, CoreError>> + Send;

    fn get_recipes(
        &self,
        user_id: Uuid,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_recipe(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<RecipeDetail>, CoreError>> + Send;

    fn update_recipe(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
        input: UpdateRecipeInput,
    ) -> impl Future<Output = Result<RecipeDetail, CoreError>> + Send;

    fn delete_recipe(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn recipe_nutrition(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<RecipeNutrition, CoreError>> + Send;
}
