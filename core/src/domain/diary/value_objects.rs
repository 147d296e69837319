use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    diary::entities::{LogEntry, MealSlot},
    nutrition::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN, Macros, MeasureUnit},
};

/// Where a logged food came from. Custom entries are additionally saved into
/// the product library; library and recipe picks feed the recent list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LogSource {
    Recipe,
    Ingredient,
    Product,
    Custom,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLogInput {
    pub log_date: NaiveDate,
    pub meal_slot: MealSlot,
    pub food_name: String,
    pub image_url: Option<String>,
    pub source: LogSource,
    /// Density per 100 g/ml for weight units, per single unit otherwise.
    /// For custom foods the calorie field is ignored and re-derived.
    pub density: Macros,
    pub quantity: f64,
    pub unit: MeasureUnit,
    /// Gram-equivalent of one unit; defaults per unit kind.
    pub unit_weight_g: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateLogInput {
    pub log_date: Option<NaiveDate>,
    pub meal_slot: Option<MealSlot>,
    pub food_name: Option<String>,
    pub image_url: Option<String>,
    /// Resubmitted density + quantity; the stored intake is recomputed from
    /// these, never from the library.
    pub density: Macros,
    pub quantity: f64,
    pub unit: MeasureUnit,
    pub unit_weight_g: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetGoalInput {
    pub apply_date: NaiveDate,
    pub target_protein: f64,
    pub target_fat: f64,
    pub target_carbs: f64,
}

/// The goal in force for a given date, with the derived calorie target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GoalTargets {
    pub target_protein: f64,
    pub target_fat: f64,
    pub target_carbs: f64,
    pub target_calories: f64,
}

impl GoalTargets {
    pub fn from_grams(protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            target_protein: protein,
            target_fat: fat,
            target_carbs: carbs,
            target_calories: protein * KCAL_PER_G_PROTEIN
                + carbs * KCAL_PER_G_CARBS
                + fat * KCAL_PER_G_FAT,
        }
    }

    /// Fallback shown before the user has ever set a goal.
    pub fn default_targets() -> Self {
        Self::from_grams(60.0, 60.0, 200.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MealSummary {
    pub slot: MealSlot,
    pub entries: Vec<LogEntry>,
    pub subtotal: Macros,
}

/// A diary day: entries grouped per meal slot plus the day totals.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub meals: Vec<MealSummary>,
    pub total: Macros,
}

impl DaySummary {
    pub fn build(date: NaiveDate, entries: Vec<LogEntry>) -> Self {
        let mut total = Macros::ZERO;
        let mut meals: Vec<MealSummary> = MealSlot::ALL
            .into_iter()
            .map(|slot| MealSummary {
                slot,
                entries: Vec::new(),
                subtotal: Macros::ZERO,
            })
            .collect();

        for entry in entries {
            total.add(&entry.intake);
            if let Some(meal) = meals.iter_mut().find(|m| m.slot == entry.meal_slot) {
                meal.subtotal.add(&entry.intake);
                meal.entries.push(entry);
            }
        }

        Self { date, meals, total }
    }
}

pub const RECENT_FOODS_CAP: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecentFood {
    pub name: String,
    pub image_url: Option<String>,
    pub calories: f64,
    pub source: LogSource,
}

/// The "recently logged" shortlist: newest first, unique by name, at most
/// [`RECENT_FOODS_CAP`] entries. Persisted verbatim as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct RecentFoods(pub Vec<RecentFood>);

impl RecentFoods {
    pub fn record(&mut self, item: RecentFood) {
        self.0.retain(|f| f.name != item.name);
        self.0.insert(0, item);
        self.0.truncate(RECENT_FOODS_CAP);
    }

    pub fn remove(&mut self, name: &str) {
        self.0.retain(|f| f.name != name);
    }

    pub fn into_inner(self) -> Vec<RecentFood> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(name: &str) -> RecentFood {
        RecentFood {
            name: name.to_string(),
            image_url: None,
            calories: 100.0,
            source: LogSource::Ingredient,
        }
    }

    #[test]
    fn test_recent_foods_dedup_by_name() {
        let mut recents = RecentFoods::default();
        recents.record(food("oats"));
        recents.record(food("rice"));
        recents.record(food("oats"));

        let names: Vec<_> = recents.0.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["oats", "rice"]);
    }

    #[test]
    fn test_recent_foods_capped_at_twenty() {
        let mut recents = RecentFoods::default();
        for i in 0..30 {
            recents.record(food(&format!("food-{i}")));
        }
        assert_eq!(recents.0.len(), RECENT_FOODS_CAP);
        assert_eq!(recents.0.first().map(|f| f.name.as_str()), Some("food-29"));
    }

    #[test]
    fn test_recent_foods_json_round_trip() {
        let mut recents = RecentFoods::default();
        recents.record(food("oats"));
        let json = serde_json::to_string(&recents).unwrap();
        // Transparent wrapper: the wire format is a bare array
        assert!(json.starts_with('['));
        let back: RecentFoods = serde_json::from_str(&json).unwrap();
        assert_eq!(back, recents);
    }

    #[test]
    fn test_day_summary_groups_and_sums() {
        use crate::domain::diary::entities::{LogEntryConfig, MealSlot};
        use uuid::Uuid;

        let user_id = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let entry = |slot: MealSlot, cal: f64| {
            LogEntry::new(LogEntryConfig {
                user_id,
                log_date: date,
                meal_slot: slot,
                food_name: "x".into(),
                image_url: None,
                amount_g: 100.0,
                intake: Macros::new(cal, 1.0, 2.0, 3.0),
            })
        };

        let summary = DaySummary::build(
            date,
            vec![
                entry(MealSlot::Breakfast, 300.0),
                entry(MealSlot::Breakfast, 200.0),
                entry(MealSlot::Dinner, 700.0),
            ],
        );

        assert_eq!(summary.total.calories, 1200.0);
        assert_eq!(summary.meals.len(), 4);
        let breakfast = &summary.meals[0];
        assert_eq!(breakfast.entries.len(), 2);
        assert_eq!(breakfast.subtotal.calories, 500.0);
        // Lunch stays present but empty
        assert_eq!(summary.meals[1].entries.len(), 0);
    }

    #[test]
    fn test_goal_targets_derive_calories() {
        let goal = GoalTargets::from_grams(60.0, 60.0, 200.0);
        assert_eq!(goal.target_calories, 60.0 * 4.0 + 200.0 * 4.0 + 60.0 * 9.0);
    }
}
