use crate::{
    domain::common::{LarderConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        diary::{PostgresDiaryLogRepository, PostgresGoalRepository, PostgresRecentFoodsRepository},
        health::PostgresHealthCheckRepository,
        library::{PostgresIngredientRepository, PostgresProductRepository},
        recipe::PostgresRecipeRepository,
        stats::PostgresStatsRepository,
        tag::PostgresTagRepository,
    },
};

pub type LarderService = Service<
    PostgresIngredientRepository,
    PostgresProductRepository,
    PostgresRecipeRepository,
    PostgresDiaryLogRepository,
    PostgresGoalRepository,
    PostgresRecentFoodsRepository,
    PostgresTagRepository,
    PostgresStatsRepository,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: LarderConfig) -> Result<LarderService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    let db = postgres.get_db();

    Ok(Service::new(
        PostgresIngredientRepository::new(db.clone()),
        PostgresProductRepository::new(db.clone()),
        PostgresRecipeRepository::new(db.clone()),
        PostgresDiaryLogRepository::new(db.clone()),
        PostgresGoalRepository::new(db.clone()),
        PostgresRecentFoodsRepository::new(db.clone()),
        PostgresTagRepository::new(db.clone()),
        PostgresStatsRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
    ))
}
