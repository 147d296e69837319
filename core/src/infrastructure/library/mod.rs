pub mod mappers;
pub mod repositories;

pub use repositories::ingredient_repository::PostgresIngredientRepository;
pub use repositories::product_repository::PostgresProductRepository;
