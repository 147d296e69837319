use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, nutrition::Macros};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    /// Rich-text step content as an HTML fragment.
    pub steps: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RecipeConfig {
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub steps: Option<String>,
}

impl Recipe {
    pub fn new(config: RecipeConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            title: config.title,
            description: config.description,
            cover_image: config.cover_image,
            tags: config.tags,
            steps: config.steps,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        title: Option<String>,
        description: Option<String>,
        cover_image: Option<String>,
        tags: Option<Vec<String>>,
        steps: Option<String>,
    ) {
        let (now, _) = generate_timestamp();

        if let Some(t) = title {
            self.title = t;
        }
        if let Some(d) = description {
            self.description = Some(d);
        }
        if let Some(c) = cover_image {
            self.cover_image = Some(c);
        }
        if let Some(t) = tags {
            self.tags = t;
        }
        if let Some(s) = steps {
            self.steps = Some(s);
        }
        self.updated_at = now;
    }
}

/// One ingredient line of a recipe. Only `is_main` lines count toward the
/// aggregate nutrition; seasonings are kept for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeItem {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub ingredient_id: Uuid,
    pub amount_g: f64,
    pub is_main: bool,
}

impl RecipeItem {
    pub fn new(recipe_id: Uuid, ingredient_id: Uuid, amount_g: f64, is_main: bool) -> Self {
        let (_, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            recipe_id,
            ingredient_id,
            amount_g,
            is_main,
        }
    }
}

/// A recipe item joined with its library ingredient, as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeItemDetail {
    pub id: Uuid,
    pub ingredient_id: Uuid,
    pub name: String,
    pub amount_g: f64,
    pub is_main: bool,
    pub per_100g: Macros,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub items: Vec<RecipeItemDetail>,
}

/// Aggregate nutrition of a recipe: the absolute totals over its main
/// ingredients and the same totals normalized to a 100 g basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeNutrition {
    pub total: Macros,
    pub per_100g: Macros,
    pub total_weight_g: f64,
}
