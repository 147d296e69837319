use crate::{
    domain::{
        library::entities::{Ingredient, Product},
        nutrition::{Macros, MeasureUnit},
    },
    entity::{ingredients, products},
};

impl From<&ingredients::Model> for Ingredient {
    fn from(model: &ingredients::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name.clone(),
            image_url: model.image_url.clone(),
            per_100g: Macros::new(model.calories, model.protein, model.fat, model.carbs),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<ingredients::Model> for Ingredient {
    fn from(model: ingredients::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&products::Model> for Product {
    fn from(model: &products::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name.clone(),
            image_url: model.image_url.clone(),
            unit: model.unit.parse().unwrap_or(MeasureUnit::G),
            unit_weight_g: model.unit_weight_g,
            per_unit: Macros::new(model.calories, model.protein, model.fat, model.carbs),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self::from(&model)
    }
}
