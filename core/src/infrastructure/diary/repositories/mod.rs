pub mod diary_log_repository;
pub mod goal_repository;
pub mod recent_foods_repository;
