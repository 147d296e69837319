use crate::{
    domain::{
        diary::entities::{DailyGoal, LogEntry, MealSlot},
        nutrition::Macros,
    },
    entity::{daily_goals, daily_logs},
};

impl From<&daily_logs::Model> for LogEntry {
    fn from(model: &daily_logs::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            log_date: model.log_date,
            meal_slot: model.meal_slot.parse().unwrap_or(MealSlot::Snack),
            food_name: model.food_name.clone(),
            image_url: model.image_url.clone(),
            amount_g: model.amount_g,
            intake: Macros::new(
                model.intake_calories,
                model.intake_protein,
                model.intake_fat,
                model.intake_carbs,
            ),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<daily_logs::Model> for LogEntry {
    fn from(model: daily_logs::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&daily_goals::Model> for DailyGoal {
    fn from(model: &daily_goals::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            apply_date: model.apply_date,
            target_protein: model.target_protein,
            target_fat: model.target_fat,
            target_carbs: model.target_carbs,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<daily_goals::Model> for DailyGoal {
    fn from(model: daily_goals::Model) -> Self {
        Self::from(&model)
    }
}
