use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// A user-defined classification tag. Display order is fully manual:
/// categories sort by `category_rank`, tags within a category by `tag_rank`,
/// with the row id as the final tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Tag {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub name: String,
    pub category_rank: i32,
    pub tag_rank: i32,
    pub created_at: DateTime<Utc>,
}

impl Tag {
    pub fn new(
        user_id: Uuid,
        category: String,
        name: String,
        category_rank: i32,
        tag_rank: i32,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            category,
            name,
            category_rank,
            tag_rank,
            created_at: now,
        }
    }
}
