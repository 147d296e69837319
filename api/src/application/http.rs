pub mod diary;
pub mod health;
pub mod library;
pub mod query_extractor;
pub mod query_params;
pub mod recipe;
pub mod server;
pub mod stats;
pub mod tag;
