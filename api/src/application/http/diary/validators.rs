use chrono::NaiveDate;
use larder_core::domain::{
    diary::{entities::MealSlot, value_objects::LogSource},
    nutrition::{Macros, MeasureUnit},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateLogValidator {
    pub log_date: NaiveDate,

    pub meal_slot: MealSlot,

    #[validate(length(min = 1, message = "food_name is required"))]
    pub food_name: String,

    #[serde(default)]
    pub image_url: Option<String>,

    pub source: LogSource,

    /// Density per 100 g/ml for weight units, per single unit otherwise.
    pub density: Macros,

    #[validate(range(min = 0.0))]
    pub quantity: f64,

    pub unit: MeasureUnit,

    #[serde(default)]
    pub unit_weight_g: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateLogValidator {
    #[serde(default)]
    pub log_date: Option<NaiveDate>,

    #[serde(default)]
    pub meal_slot: Option<MealSlot>,

    #[serde(default)]
    pub food_name: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    pub density: Macros,

    #[validate(range(min = 0.0))]
    pub quantity: f64,

    pub unit: MeasureUnit,

    #[serde(default)]
    pub unit_weight_g: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetGoalValidator {
    pub apply_date: NaiveDate,

    #[validate(range(min = 0.0))]
    pub target_protein: f64,

    #[validate(range(min = 0.0))]
    pub target_fat: f64,

    #[validate(range(min = 0.0))]
    pub target_carbs: f64,
}
