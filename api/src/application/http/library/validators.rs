use larder_core::domain::nutrition::MeasureUnit;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateIngredientValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub image_url: Option<String>,

    /// Grams per 100 g; calories are derived server-side.
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub protein: f64,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub fat: f64,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub carbs: f64,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateIngredientValidator {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub protein: Option<f64>,

    #[serde(default)]
    pub fat: Option<f64>,

    #[serde(default)]
    pub carbs: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub image_url: Option<String>,

    pub unit: MeasureUnit,

    /// Gram-equivalent of one unit; defaults per unit kind.
    #[serde(default)]
    pub unit_weight_g: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub protein: f64,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub fat: f64,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub carbs: f64,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductValidator {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub unit: Option<MeasureUnit>,

    #[serde(default)]
    pub unit_weight_g: Option<f64>,

    #[serde(default)]
    pub protein: Option<f64>,

    #[serde(default)]
    pub fat: Option<f64>,

    #[serde(default)]
    pub carbs: Option<f64>,
}
