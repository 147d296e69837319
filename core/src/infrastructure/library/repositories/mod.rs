pub mod ingredient_repository;
pub mod product_repository;
