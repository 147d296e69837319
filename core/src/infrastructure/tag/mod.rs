pub mod mappers;
pub mod repositories;

pub use repositories::tag_repository::PostgresTagRepository;
