use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    library::{
        entities::{Ingredient, Product},
        value_objects::{
            CreateIngredientInput, CreateProductInput, GetLibraryFilter, UpdateIngredientInput,
            UpdateProductInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    fn create(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn get_by_id(
        &self,
        ingredient_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn get_by_name(
        &self,
        user_id: Uuid,
        name: String,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetLibraryFilter,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_by_ids(
        &self,
        ingredient_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn update(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn delete(
        &self,
        ingredient_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    fn create(&self, product: Product) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn get_by_id(
        &self,
        product_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetLibraryFilter,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn update(&self, product: Product) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn delete(
        &self,
        product_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait LibraryService: Send + Sync {
    fn create_ingredient(
        &self,
        user_id: Uuid,
        input: CreateIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn get_ingredients(
        &self,
        user_id: Uuid,
        filter: GetLibraryFilter,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_ingredient(
        &self,
        user_id: Uuid,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn update_ingredient(
        &self,
        user_id: Uuid,
        ingredient_id: Uuid,
        input: UpdateIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn delete_ingredient(
        &self,
        user_id: Uuid,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn create_product(
        &self,
        user_id: Uuid,
        input: CreateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn get_products(
        &self,
        user_id: Uuid,
        filter: GetLibraryFilter,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn get_product(
        &self,
        user_id: Uuid,
        product_id: Uuid,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn update_product(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        input: UpdateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn delete_product(
        &self,
        user_id: Uuid,
        product_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
