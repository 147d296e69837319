pub mod create_recipe;
pub mod delete_recipe;
pub mod get_recipe;
pub mod get_recipe_nutrition;
pub mod get_recipes;
pub mod update_recipe;
