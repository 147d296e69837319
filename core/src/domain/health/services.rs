use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diary::ports::{DiaryLogRepository, GoalRepository, RecentFoodsRepository},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    library::ports::{IngredientRepository, ProductRepository},
    recipe::ports::RecipeRepository,
    stats::ports::StatsRepository,
    tag::ports::TagRepository,
};

impl<I, P, R, D, G, RF, T, ST, H> HealthCheckService for Service<I, P, R, D, G, RF, T, ST, H>
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
    async fn ping(&self) -> Result<u64, CoreError> {
        self.health_check_repository.ping().await
    }

    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}
