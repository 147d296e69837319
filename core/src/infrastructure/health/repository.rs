use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use std::time::Instant;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn timed_ping(&self) -> Result<u64, CoreError> {
        let stmt = Statement::from_string(sea_orm::DatabaseBackend::Postgres, "SELECT 1");

        let started = Instant::now();
        self.db.execute(stmt).await.map_err(|e| {
            error!("Database ping failed: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(started.elapsed().as_millis() as u64)
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn ping(&self) -> Result<u64, CoreError> {
        self.timed_ping().await
    }

    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let latency_ms = self.timed_ping().await?;

        Ok(DatabaseHealthStatus {
            connected: true,
            latency_ms,
        })
    }
}
