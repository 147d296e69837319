use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::Macros,
    stats::{ports::StatsRepository, value_objects::DayBucket},
};

#[derive(Debug, Clone)]
pub struct PostgresStatsRepository {
    pub db: DatabaseConnection,
}

impl PostgresStatsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl StatsRepository for PostgresStatsRepository {
    async fn get_daily_totals(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DayBucket>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            r#"
            SELECT
              log_date,
              SUM(intake_calories) AS calories,
              SUM(intake_protein) AS protein,
              SUM(intake_fat) AS fat,
              SUM(intake_carbs) AS carbs
            FROM daily_logs
            WHERE user_id = $1
              AND log_date >= $2
              AND log_date <= $3
            GROUP BY log_date
            ORDER BY log_date
            "#,
            [user_id.into(), start.into(), end.into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to get daily totals: {}", e);
            CoreError::InternalServerError
        })?;

        let mut buckets = Vec::with_capacity(rows.len());
        for row in rows {
            let date: NaiveDate = row.try_get("", "log_date").map_err(|e| {
                error!("Failed to read daily total row: {}", e);
                CoreError::InternalServerError
            })?;
            let calories: f64 = row.try_get("", "calories").unwrap_or(0.0);
            let protein: f64 = row.try_get("", "protein").unwrap_or(0.0);
            let fat: f64 = row.try_get("", "fat").unwrap_or(0.0);
            let carbs: f64 = row.try_get("", "carbs").unwrap_or(0.0);

            buckets.push(DayBucket {
                date,
                intake: Macros::new(calories, protein, fat, carbs),
            });
        }

        Ok(buckets)
    }
}
