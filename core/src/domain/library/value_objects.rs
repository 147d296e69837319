use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::nutrition::MeasureUnit;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateIngredientInput {
    pub name: String,
    pub image_url: Option<String>,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateIngredientInput {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
    pub carbs: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductInput {
    pub name: String,
    pub image_url: Option<String>,
    pub unit: MeasureUnit,
    pub unit_weight_g: Option<f64>,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub unit: Option<MeasureUnit>,
    pub unit_weight_g: Option<f64>,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
    pub carbs: Option<f64>,
}

/// Shared list filter for both library collections.
#[derive(Debug, Clone, Default)]
pub struct GetLibraryFilter {
    pub name: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>, // e.g. "name" or "-created_at"
}
