use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diary::ports::{DiaryLogRepository, GoalRepository, RecentFoodsRepository},
    health::ports::HealthCheckRepository,
    library::ports::{IngredientRepository, ProductRepository},
    nutrition::Macros,
    recipe::ports::RecipeRepository,
    stats::{
        ports::{StatsRepository, StatsService},
        value_objects::{DailyStats, DayBucket},
    },
    tag::ports::TagRepository,
};

impl<I, P, R, D, G, RF, T, ST, H> StatsService for Service<I, P, R, D, G, RF, T, ST, H>
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
    async fn daily_stats(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DailyStats, CoreError> {
        if end < start {
            return Err(CoreError::Invalid(
                "end date must not precede start date".to_string(),
            ));
        }

        let recorded = self
            .stats_repository
            .get_daily_totals(user_id, start, end)
            .await?;

        // Average over days that actually have records.
        let avg_calories = if recorded.is_empty() {
            0.0
        } else {
            recorded.iter().map(|b| b.intake.calories).sum::<f64>() / recorded.len() as f64
        };

        let by_date: HashMap<NaiveDate, Macros> =
            recorded.into_iter().map(|b| (b.date, b.intake)).collect();

        // Zero-fill the range; days in the future stay off the chart.
        let display_end = end.min(Utc::now().date_naive());
        let mut items = Vec::new();
        let mut day = start;
        while day <= display_end {
            items.push(DayBucket {
                date: day,
                intake: by_date.get(&day).copied().unwrap_or(Macros::ZERO),
            });
            day = day.succ_opt().ok_or(CoreError::InternalServerError)?;
        }

        Ok(DailyStats {
            items,
            start,
            end,
            avg_calories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
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

    fn service(stats: MockStatsRepository) -> TestService {
        Service::new(
            MockIngredientRepository::new(),
            MockProductRepository::new(),
            MockRecipeRepository::new(),
            MockDiaryLogRepository::new(),
            MockGoalRepository::new(),
            MockRecentFoodsRepository::new(),
            MockTagRepository::new(),
            stats,
            MockHealthCheckRepository::new(),
        )
    }

    #[tokio::test]
    async fn test_range_is_zero_filled() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let logged = start.succ_opt().unwrap();

        let mut repo = MockStatsRepository::new();
        repo.expect_get_daily_totals().returning(move |_, _, _| {
            Ok(vec![DayBucket {
                date: logged,
                intake: Macros::new(1800.0, 90.0, 60.0, 210.0),
            }])
        });

        let stats = service(repo)
            .daily_stats(Uuid::new_v4(), start, end)
            .await
            .unwrap();

        assert_eq!(stats.items.len(), 3);
        assert_eq!(stats.items[0].intake, Macros::ZERO);
        assert_eq!(stats.items[1].intake.calories, 1800.0);
        assert_eq!(stats.items[2].intake, Macros::ZERO);
        // one logged day, so the average is that day's total
        assert_eq!(stats.avg_calories, 1800.0);
    }

    #[tokio::test]
    async fn test_empty_range_has_zero_average() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        let mut repo = MockStatsRepository::new();
        repo.expect_get_daily_totals()
            .returning(|_, _, _| Ok(Vec::new()));

        let stats = service(repo)
            .daily_stats(Uuid::new_v4(), start, end)
            .await
            .unwrap();

        assert_eq!(stats.avg_calories, 0.0);
        assert!(stats.items.iter().all(|b| b.intake == Macros::ZERO));
    }

    #[tokio::test]
    async fn test_inverted_range_is_rejected() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();

        let result = service(MockStatsRepository::new())
            .daily_stats(Uuid::new_v4(), start, end)
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }
}
