use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::tag::entities::Tag;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTagInput {
    pub category: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// What a move targets: the tag within its category, or the whole category
/// relative to its neighbor categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MoveScope {
    Tag,
    Category,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MoveTagInput {
    pub direction: MoveDirection,
    pub scope: MoveScope,
}

/// Tags of one category, already in display order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagGroup {
    pub category: String,
    pub tags: Vec<Tag>,
}

/// Resolve the two ranks of a swap. The item moving toward the front takes
/// the smaller rank; colliding ranks are split by bumping the back one.
pub fn swap_ranks(moving: i32, neighbor: i32) -> (i32, i32) {
    let lo = moving.min(neighbor);
    let mut hi = moving.max(neighbor);
    if lo == hi {
        hi = lo + 1;
    }
    (lo, hi)
}

/// Group an ordered tag list by category, preserving encounter order.
pub fn group_by_category(tags: Vec<Tag>) -> Vec<TagGroup> {
    let mut groups: Vec<TagGroup> = Vec::new();
    for tag in tags {
        match groups.last_mut() {
            Some(group) if group.category == tag.category => group.tags.push(tag),
            _ => groups.push(TagGroup {
                category: tag.category.clone(),
                tags: vec![tag],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_swap_ranks_distinct() {
        assert_eq!(swap_ranks(3, 1), (1, 3));
        assert_eq!(swap_ranks(1, 3), (1, 3));
    }

    #[test]
    fn test_swap_ranks_collision_bumps_back() {
        assert_eq!(swap_ranks(2, 2), (2, 3));
    }

    #[test]
    fn test_group_by_category_keeps_order() {
        let user_id = Uuid::new_v4();
        let tags = vec![
            Tag::new(user_id, "cuisine".into(), "sichuan".into(), 0, 0),
            Tag::new(user_id, "cuisine".into(), "cantonese".into(), 0, 1),
            Tag::new(user_id, "occasion".into(), "weeknight".into(), 1, 0),
        ];
        let groups = group_by_category(tags);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "cuisine");
        assert_eq!(groups[0].tags.len(), 2);
        assert_eq!(groups[1].category, "occasion");
    }
}
