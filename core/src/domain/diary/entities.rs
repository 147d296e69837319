use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, nutrition::Macros};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }
}

impl FromStr for MealSlot {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            "snack" => Ok(MealSlot::Snack),
            _ => Err(()),
        }
    }
}

/// One logged food. `intake` is a snapshot computed when the entry is saved;
/// later edits to the source library item never touch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LogEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub log_date: NaiveDate,
    pub meal_slot: MealSlot,
    pub food_name: String,
    pub image_url: Option<String>,
    /// Total weight in grams (quantity times the unit's gram-equivalent).
    pub amount_g: f64,
    pub intake: Macros,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct LogEntryConfig {
    pub user_id: Uuid,
    pub log_date: NaiveDate,
    pub meal_slot: MealSlot,
    pub food_name: String,
    pub image_url: Option<String>,
    pub amount_g: f64,
    pub intake: Macros,
}

impl LogEntry {
    pub fn new(config: LogEntryConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            log_date: config.log_date,
            meal_slot: config.meal_slot,
            food_name: config.food_name,
            image_url: config.image_url,
            amount_g: config.amount_g,
            intake: config.intake,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Macro targets in grams, effective from `apply_date` until superseded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyGoal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub apply_date: NaiveDate,
    pub target_protein: f64,
    pub target_fat: f64,
    pub target_carbs: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DailyGoal {
    pub fn new(
        user_id: Uuid,
        apply_date: NaiveDate,
        target_protein: f64,
        target_fat: f64,
        target_carbs: f64,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            apply_date,
            target_protein,
            target_fat,
            target_carbs,
            created_at: now,
            updated_at: now,
        }
    }
}
