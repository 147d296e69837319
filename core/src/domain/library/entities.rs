use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    nutrition::{Macros, MeasureUnit, derive_calories},
};

/// A basic ingredient from the user's library. Macros are per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    pub per_100g: Macros,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct IngredientConfig {
    pub user_id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl Ingredient {
    pub fn new(config: IngredientConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            name: config.name,
            image_url: config.image_url,
            per_100g: Macros::from_grams(config.protein, config.fat, config.carbs),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        name: Option<String>,
        image_url: Option<String>,
        protein: Option<f64>,
        fat: Option<f64>,
        carbs: Option<f64>,
    ) {
        let (now, _) = generate_timestamp();

        if let Some(n) = name {
            self.name = n;
        }
        if let Some(url) = image_url {
            self.image_url = Some(url);
        }
        if let Some(p) = protein {
            self.per_100g.protein = p;
        }
        if let Some(f) = fat {
            self.per_100g.fat = f;
        }
        if let Some(c) = carbs {
            self.per_100g.carbs = c;
        }
        self.per_100g.calories = derive_calories(
            self.per_100g.protein,
            self.per_100g.fat,
            self.per_100g.carbs,
        );
        self.updated_at = now;
    }
}

/// A packaged food. Macros are per 100 g/ml for weight units, per one unit
/// otherwise; `unit_weight_g` is the gram-equivalent of one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    pub unit: MeasureUnit,
    pub unit_weight_g: f64,
    pub per_unit: Macros,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProductConfig {
    pub user_id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    pub unit: MeasureUnit,
    pub unit_weight_g: Option<f64>,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl Product {
    pub fn new(config: ProductConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            name: config.name,
            image_url: config.image_url,
            unit: config.unit,
            unit_weight_g: config
                .unit_weight_g
                .unwrap_or_else(|| config.unit.default_unit_weight_g()),
            per_unit: Macros::from_grams(config.protein, config.fat, config.carbs),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        name: Option<String>,
        image_url: Option<String>,
        unit: Option<MeasureUnit>,
        unit_weight_g: Option<f64>,
        protein: Option<f64>,
        fat: Option<f64>,
        carbs: Option<f64>,
    ) {
        let (now, _) = generate_timestamp();

        if let Some(n) = name {
            self.name = n;
        }
        if let Some(url) = image_url {
            self.image_url = Some(url);
        }
        if let Some(u) = unit {
            self.unit = u;
        }
        if let Some(w) = unit_weight_g {
            self.unit_weight_g = w;
        }
        if let Some(p) = protein {
            self.per_unit.protein = p;
        }
        if let Some(f) = fat {
            self.per_unit.fat = f;
        }
        if let Some(c) = carbs {
            self.per_unit.carbs = c;
        }
        self.per_unit.calories =
            derive_calories(self.per_unit.protein, self.per_unit.fat, self.per_unit.carbs);
        self.updated_at = now;
    }
}
