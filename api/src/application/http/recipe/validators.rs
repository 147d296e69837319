use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecipeItemPayload {
    #[serde(default)]
    pub ingredient_id: Option<Uuid>,

    pub name: String,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub amount_g: f64,

    pub is_main: bool,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecipeValidator {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub cover_image: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Rich-text step content as an HTML fragment.
    #[serde(default)]
    pub steps: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<RecipeItemPayload>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRecipeValidator {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub cover_image: Option<String>,

    #[serde(default)]
    pub tags: Option<Vec<String>>,

    #[serde(default)]
    pub steps: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub items: Option<Vec<RecipeItemPayload>>,
}

impl From<RecipeItemPayload> for larder_core::domain::recipe::value_objects::RecipeItemInput {
    fn from(payload: RecipeItemPayload) -> Self {
        Self {
            ingredient_id: payload.ingredient_id,
            name: payload.name,
            amount_g: payload.amount_g,
            is_main: payload.is_main,
        }
    }
}
