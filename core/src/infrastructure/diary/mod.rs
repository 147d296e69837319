pub mod mappers;
pub mod repositories;

pub use repositories::diary_log_repository::PostgresDiaryLogRepository;
pub use repositories::goal_repository::PostgresGoalRepository;
pub use repositories::recent_foods_repository::PostgresRecentFoodsRepository;
