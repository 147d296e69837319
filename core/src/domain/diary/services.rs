use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diary::{
        entities::{DailyGoal, LogEntry, LogEntryConfig},
        ports::{DiaryLogRepository, DiaryService, GoalRepository, RecentFoodsRepository},
        value_objects::{
            CreateLogInput, DaySummary, GoalTargets, LogSource, RecentFood, RecentFoods,
            SetGoalInput, UpdateLogInput,
        },
    },
    health::ports::HealthCheckRepository,
    library::{
        entities::{Product, ProductConfig},
        ports::{IngredientRepository, ProductRepository},
    },
    nutrition::{Macros, MeasureUnit, derive_calories, intake_for},
    recipe::ports::RecipeRepository,
    stats::ports::StatsRepository,
    tag::ports::TagRepository,
};

struct ComputedIntake {
    amount_g: f64,
    intake: Macros,
    density: Macros,
}

/// Apply the scaling rule once, at save time. The stored intake is a
/// snapshot; nothing downstream ever re-reads the source library item.
fn compute_intake(
    mut density: Macros,
    quantity: f64,
    unit: MeasureUnit,
    unit_weight_g: Option<f64>,
    derive: bool,
) -> Result<ComputedIntake, CoreError> {
    if quantity < 0.0 || !quantity.is_finite() {
        return Err(CoreError::Invalid(
            "quantity must be a non-negative number".to_string(),
        ));
    }

    if derive {
        density.calories = derive_calories(density.protein, density.fat, density.carbs);
    }

    let unit_weight_g = unit_weight_g.unwrap_or_else(|| unit.default_unit_weight_g());

    Ok(ComputedIntake {
        amount_g: quantity * unit_weight_g,
        intake: intake_for(&density, unit, quantity),
        density,
    })
}

impl<I, P, R, D, G, RF, T, ST, H> DiaryService for Service<I, P, R, D, G, RF, T, ST, H>
where
    I: IngredientRepository,
    P: ProductRepository,
    R: RecipeRepository,
    D: DiaryLogRepository,
    G: GoalRepository,
    RF: RecentFoodsRepository,
    T: TagRepository,
    ST: StatsRepository,
    H: HealthCheckRepository,
{
    async fn create_log(
        &self,
        user_id: Uuid,
        input: CreateLogInput,
    ) -> Result<LogEntry, CoreError> {
        if input.food_name.trim().is_empty() {
            return Err(CoreError::Invalid("food name must not be empty".to_string()));
        }

        let computed = compute_intake(
            input.density,
            input.quantity,
            input.unit,
            input.unit_weight_g,
            input.source == LogSource::Custom,
        )?;

        let entry = LogEntry::new(LogEntryConfig {
            user_id,
            log_date: input.log_date,
            meal_slot: input.meal_slot,
            food_name: input.food_name.clone(),
            image_url: input.image_url.clone(),
            amount_g: computed.amount_g,
            intake: computed.intake,
        });

        let created = self.diary_repository.create(entry).await?;

        match input.source {
            LogSource::Custom => {
                // One-off foods become reusable library products.
                self.product_repository
                    .create(Product::new(ProductConfig {
                        user_id,
                        name: input.food_name,
                        image_url: input.image_url,
                        unit: input.unit,
                        unit_weight_g: input.unit_weight_g,
                        protein: computed.density.protein,
                        fat: computed.density.fat,
                        carbs: computed.density.carbs,
                    }))
                    .await?;
            }
            _ => {
                let mut recents = self.recent_foods_repository.get(user_id).await?;
                recents.record(RecentFood {
                    name: input.food_name,
                    image_url: input.image_url,
                    calories: computed.density.calories,
                    source: input.source,
                });
                self.recent_foods_repository.save(user_id, recents).await?;
            }
        }

        Ok(created)
    }

    async fn get_logs(&self, user_id: Uuid, date: NaiveDate) -> Result<Vec<LogEntry>, CoreError> {
        self.diary_repository.get_by_date(user_id, date).await
    }

    async fn day_summary(&self, user_id: Uuid, date: NaiveDate) -> Result<DaySummary, CoreError> {
        let entries = self.diary_repository.get_by_date(user_id, date).await?;
        Ok(DaySummary::build(date, entries))
    }

    async fn update_log(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
        input: UpdateLogInput,
    ) -> Result<LogEntry, CoreError> {
        let mut entry = self
            .diary_repository
            .get_by_id(entry_id, user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let computed = compute_intake(
            input.density,
            input.quantity,
            input.unit,
            input.unit_weight_g,
            false,
        )?;

        if let Some(date) = input.log_date {
            entry.log_date = date;
        }
        if let Some(slot) = input.meal_slot {
            entry.meal_slot = slot;
        }
        if let Some(name) = input.food_name {
            if name.trim().is_empty() {
                return Err(CoreError::Invalid("food name must not be empty".to_string()));
            }
            entry.food_name = name;
        }
        if let Some(url) = input.image_url {
            entry.image_url = Some(url);
        }
        entry.amount_g = computed.amount_g;
        entry.intake = computed.intake;
        let (now, _) = crate::domain::common::generate_timestamp();
        entry.updated_at = now;

        self.diary_repository.update(entry).await
    }

    async fn delete_log(&self, user_id: Uuid, entry_id: Uuid) -> Result<(), CoreError> {
        self.diary_repository.delete(entry_id, user_id).await
    }

    async fn set_goal(&self, user_id: Uuid, input: SetGoalInput) -> Result<DailyGoal, CoreError> {
        if input.target_protein < 0.0 || input.target_fat < 0.0 || input.target_carbs < 0.0 {
            return Err(CoreError::Invalid(
                "goal targets must be non-negative".to_string(),
            ));
        }

        self.goal_repository
            .upsert(DailyGoal::new(
                user_id,
                input.apply_date,
                input.target_protein,
                input.target_fat,
                input.target_carbs,
            ))
            .await
    }

    async fn effective_goal(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<GoalTargets, CoreError> {
        let goal = self.goal_repository.get_effective(user_id, date).await?;

        Ok(match goal {
            Some(goal) => GoalTargets::from_grams(
                goal.target_protein,
                goal.target_fat,
                goal.target_carbs,
            ),
            None => GoalTargets::default_targets(),
        })
    }

    async fn recent_foods(&self, user_id: Uuid) -> Result<RecentFoods, CoreError> {
        self.recent_foods_repository.get(user_id).await
    }

    async fn remove_recent_food(
        &self,
        user_id: Uuid,
        name: String,
    ) -> Result<RecentFoods, CoreError> {
        let mut recents = self.recent_foods_repository.get(user_id).await?;
        recents.remove(&name);
        self.recent_foods_repository
            .save(user_id, recents.clone())
            .await?;
        Ok(recents)
    }

    async fn clear_recent_foods(&self, user_id: Uuid) -> Result<(), CoreError> {
        self.recent_foods_repository.clear(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        diary::entities::MealSlot,
        diary::ports::{MockDiaryLogRepository, MockGoalRepository, MockRecentFoodsRepository},
        health::ports::MockHealthCheckRepository,
        library::ports::{MockIngredientRepository, MockProductRepository},
        recipe::ports::MockRecipeRepository,
        stats::ports::MockStatsRepository,
        tag::ports::MockTagRepository,
    };

    type TestService = Service<
        MockIngredientRepository,
        MockProductRepository,
        MockRecipeRepository,
        MockDiaryLogRepository,
        MockGoalRepository,
        MockRecentFoodsRepository,
        MockTagRepository,
        MockStatsRepository,
        MockHealthCheckRepository,
    >;

    struct Mocks {
        products: MockProductRepository,
        diary: MockDiaryLogRepository,
        goals: MockGoalRepository,
        recents: MockRecentFoodsRepository,
    }

    impl Default for Mocks {
        fn default() -> Self {
            Self {
                products: MockProductRepository::new(),
                diary: MockDiaryLogRepository::new(),
                goals: MockGoalRepository::new(),
                recents: MockRecentFoodsRepository::new(),
            }
        }
    }

    fn service(mocks: Mocks) -> TestService {
        Service::new(
            MockIngredientRepository::new(),
            mocks.products,
            MockRecipeRepository::new(),
            mocks.diary,
            mocks.goals,
            mocks.recents,
            MockTagRepository::new(),
            MockStatsRepository::new(),
            MockHealthCheckRepository::new(),
        )
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn log_input(source: LogSource, unit: MeasureUnit, quantity: f64) -> CreateLogInput {
        CreateLogInput {
            log_date: date(),
            meal_slot: MealSlot::Lunch,
            food_name: "oatmeal".to_string(),
            image_url: None,
            source,
            density: Macros::new(380.0, 13.0, 7.0, 68.0),
            quantity,
            unit,
            unit_weight_g: None,
        }
    }

    #[tokio::test]
    async fn test_weight_unit_intake_scales_by_hundredth() {
        let mut mocks = Mocks::default();
        mocks.diary.expect_create().returning(|x| Box::pin(std::future::ready(Ok(x))));
        mocks.recents.expect_get().returning(|_| Box::pin(std::future::ready(Ok(RecentFoods::default()))));
        mocks.recents.expect_save().returning(|_, _| Box::pin(std::future::ready(Ok(()))));

        let service = service(mocks);
        let entry = service
            .create_log(Uuid::new_v4(), log_input(LogSource::Ingredient, MeasureUnit::G, 150.0))
            .await
            .unwrap();

        assert_eq!(entry.amount_g, 150.0);
        assert!((entry.intake.calories - 380.0 * 1.5).abs() < 1e-9);
        assert!((entry.intake.carbs - 68.0 * 1.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_discrete_unit_intake_scales_by_count() {
        let mut mocks = Mocks::default();
        mocks.diary.expect_create().returning(|x| Box::pin(std::future::ready(Ok(x))));
        mocks.recents.expect_get().returning(|_| Box::pin(std::future::ready(Ok(RecentFoods::default()))));
        mocks.recents.expect_save().returning(|_, _| Box::pin(std::future::ready(Ok(()))));

        let service = service(mocks);
        let entry = service
            .create_log(
                Uuid::new_v4(),
                log_input(LogSource::Product, MeasureUnit::Serving, 2.0),
            )
            .await
            .unwrap();

        // two servings at the default 100 g each
        assert_eq!(entry.amount_g, 200.0);
        assert_eq!(entry.intake.calories, 760.0);
        assert_eq!(entry.intake.protein, 26.0);
    }

    #[tokio::test]
    async fn test_custom_food_derives_calories_and_joins_library() {
        let mut mocks = Mocks::default();
        mocks.diary.expect_create().returning(|x| Box::pin(std::future::ready(Ok(x))));
        mocks
            .products
            .expect_create()
            .withf(|p| p.name == "oatmeal" && p.per_unit.calories == 13.0 * 4.0 + 68.0 * 4.0 + 7.0 * 9.0)
            .returning(|x| Box::pin(std::future::ready(Ok(x))));
        // custom entries do not touch the recent list
        mocks.recents.expect_get().never();

        let service = service(mocks);
        let entry = service
            .create_log(Uuid::new_v4(), log_input(LogSource::Custom, MeasureUnit::G, 100.0))
            .await
            .unwrap();

        // stored intake uses the derived figure, not the submitted 380
        assert_eq!(entry.intake.calories, 13.0 * 4.0 + 68.0 * 4.0 + 7.0 * 9.0);
    }

    #[tokio::test]
    async fn test_create_log_rejects_negative_quantity() {
        let service = service(Mocks::default());
        let result = service
            .create_log(Uuid::new_v4(), log_input(LogSource::Ingredient, MeasureUnit::G, -5.0))
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_update_missing_log_is_not_found() {
        let mut mocks = Mocks::default();
        mocks.diary.expect_get_by_id().returning(|_, _| Box::pin(std::future::ready(Ok(None))));

        let service = service(mocks);
        let result = service
            .update_log(
                Uuid::new_v4(),
                Uuid::new_v4(),
                UpdateLogInput {
                    log_date: None,
                    meal_slot: None,
                    food_name: None,
                    image_url: None,
                    density: Macros::ZERO,
                    quantity: 0.0,
                    unit: MeasureUnit::G,
                    unit_weight_g: None,
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_effective_goal_falls_back_to_default() {
        let mut mocks = Mocks::default();
        mocks.goals.expect_get_effective().returning(|_, _| Box::pin(std::future::ready(Ok(None))));

        let service = service(mocks);
        let goal = service.effective_goal(Uuid::new_v4(), date()).await.unwrap();

        assert_eq!(goal, GoalTargets::default_targets());
        assert_eq!(goal.target_calories, 60.0 * 4.0 + 200.0 * 4.0 + 60.0 * 9.0);
    }

    #[tokio::test]
    async fn test_effective_goal_uses_latest_applicable_row() {
        let user_id = Uuid::new_v4();
        let goal = DailyGoal::new(user_id, date(), 120.0, 50.0, 180.0);

        let mut mocks = Mocks::default();
        mocks
            .goals
            .expect_get_effective()
            .returning(move |_, _| Ok(Some(goal.clone())));

        let service = service(mocks);
        let targets = service.effective_goal(user_id, date()).await.unwrap();

        assert_eq!(targets.target_protein, 120.0);
        assert_eq!(
            targets.target_calories,
            120.0 * 4.0 + 180.0 * 4.0 + 50.0 * 9.0
        );
    }
}
