pub mod create_ingredient;
pub mod create_product;
pub mod delete_ingredient;
pub mod delete_product;
pub mod get_ingredient;
pub mod get_ingredients;
pub mod get_product;
pub mod get_products;
pub mod update_ingredient;
pub mod update_product;
