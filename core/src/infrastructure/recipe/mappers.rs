use crate::{
    domain::recipe::entities::{Recipe, RecipeItem},
    entity::{recipe_items, recipes},
};

impl From<&recipes::Model> for Recipe {
    fn from(model: &recipes::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title.clone(),
            description: model.description.clone(),
            cover_image: model.cover_image.clone(),
            tags: serde_json::from_value(model.tags.clone()).unwrap_or_default(),
            steps: model.steps.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&recipe_items::Model> for RecipeItem {
    fn from(model: &recipe_items::Model) -> Self {
        Self {
            id: model.id,
            recipe_id: model.recipe_id,
            ingredient_id: model.ingredient_id,
            amount_g: model.amount_g,
            is_main: model.is_main,
        }
    }
}

impl From<recipe_items::Model> for RecipeItem {
    fn from(model: recipe_items::Model) -> Self {
        Self::from(&model)
    }
}
