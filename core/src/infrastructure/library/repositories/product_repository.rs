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
        library::{entities::Product, ports::ProductRepository, value_objects::GetLibraryFilter},
    },
    entity::products::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pub db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn active_model(product: &Product) -> ActiveModel {
        ActiveModel {
            id: Set(product.id),
            user_id: Set(product.user_id),
            name: Set(product.name.clone()),
            image_url: Set(product.image_url.clone()),
            unit: Set(product.unit.as_str().to_string()),
            unit_weight_g: Set(product.unit_weight_g),
            calories: Set(product.per_unit.calories),
            protein: Set(product.per_unit.protein),
            fat: Set(product.per_unit.fat),
            carbs: Set(product.per_unit.carbs),
            created_at: Set(product.created_at.fixed_offset()),
            updated_at: Set(product.updated_at.fixed_offset()),
        }
    }
}

impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: Product) -> Result<Product, CoreError> {
        let created = Entity::insert(Self::active_model(&product))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Product::from(created))
    }

    async fn get_by_id(
        &self,
        product_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Product>, CoreError> {
        let product = Entity::find()
            .filter(Column::Id.eq(product_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(product.map(Product::from))
    }

    async fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetLibraryFilter,
    ) -> Result<Vec<Product>, CoreError> {
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

        let products = query.all(&self.db).await.map_err(|e| {
            error!("Failed to get products: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(products.iter().map(Product::from).collect())
    }

    async fn update(&self, product: Product) -> Result<Product, CoreError> {
        let updated = Entity::update(Self::active_model(&product))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Product::from(updated))
    }

    async fn delete(&self, product_id: Uuid, user_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(product_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
