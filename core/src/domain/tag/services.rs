use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diary::ports::{DiaryLogRepository, GoalRepository, RecentFoodsRepository},
    health::ports::HealthCheckRepository,
    library::ports::{IngredientRepository, ProductRepository},
    recipe::ports::RecipeRepository,
    stats::ports::StatsRepository,
    tag::{
        entities::Tag,
        ports::{TagRepository, TagService},
        value_objects::{
            CreateTagInput, MoveDirection, MoveScope, MoveTagInput, TagGroup, group_by_category,
            swap_ranks,
        },
    },
};

const DEFAULT_CATEGORY: &str = "uncategorized";

impl<I, P, R, D, G, RF, T, ST, H> TagService for Service<I, P, R, D, G, RF, T, ST, H>
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
    async fn create_tag(&self, user_id: Uuid, input: CreateTagInput) -> Result<Tag, CoreError> {
        if input.name.trim().is_empty() {
            return Err(CoreError::Invalid("tag name must not be empty".to_string()));
        }

        let category = {
            let trimmed = input.category.trim();
            if trimmed.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                trimmed.to_string()
            }
        };

        // New tags append to their category; a new category appends to the
        // category list, so creation order matches display order.
        let existing = self.tag_repository.get_by_user(user_id).await?;
        let siblings: Vec<&Tag> = existing.iter().filter(|t| t.category == category).collect();

        let (category_rank, tag_rank) = if let Some(first) = siblings.first() {
            let max_tag_rank = siblings.iter().map(|t| t.tag_rank).max().unwrap_or(0);
            (first.category_rank, max_tag_rank + 1)
        } else {
            let max_category_rank = existing.iter().map(|t| t.category_rank).max();
            (max_category_rank.map_or(0, |r| r + 1), 0)
        };

        self.tag_repository
            .create(Tag::new(user_id, category, input.name, category_rank, tag_rank))
            .await
    }

    async fn get_tags(&self, user_id: Uuid) -> Result<Vec<Tag>, CoreError> {
        self.tag_repository.get_by_user(user_id).await
    }

    async fn get_tag_groups(&self, user_id: Uuid) -> Result<Vec<TagGroup>, CoreError> {
        let tags = self.tag_repository.get_by_user(user_id).await?;
        Ok(group_by_category(tags))
    }

    async fn move_tag(
        &self,
        user_id: Uuid,
        tag_id: Uuid,
        input: MoveTagInput,
    ) -> Result<Vec<Tag>, CoreError> {
        let tags = self.tag_repository.get_by_user(user_id).await?;
        let moving = tags
            .iter()
            .find(|t| t.id == tag_id)
            .ok_or(CoreError::NotFound)?
            .clone();

        match input.scope {
            MoveScope::Tag => {
                let siblings: Vec<&Tag> =
                    tags.iter().filter(|t| t.category == moving.category).collect();
                let position = siblings
                    .iter()
                    .position(|t| t.id == moving.id)
                    .ok_or(CoreError::InternalServerError)?;

                let neighbor = match input.direction {
                    MoveDirection::Up => position.checked_sub(1).map(|i| siblings[i]),
                    MoveDirection::Down => siblings.get(position + 1).copied(),
                };
                let Some(neighbor) = neighbor else {
                    // Already at the edge of its category.
                    return Ok(Vec::new());
                };
                let neighbor = neighbor.clone();

                let (lo, hi) = swap_ranks(moving.tag_rank, neighbor.tag_rank);
                let (moving_rank, neighbor_rank) = match input.direction {
                    MoveDirection::Up => (lo, hi),
                    MoveDirection::Down => (hi, lo),
                };

                self.tag_repository
                    .set_tag_ranks(vec![(moving.id, moving_rank), (neighbor.id, neighbor_rank)])
                    .await?;

                let mut updated_moving = moving;
                updated_moving.tag_rank = moving_rank;
                let mut updated_neighbor = neighbor;
                updated_neighbor.tag_rank = neighbor_rank;
                Ok(vec![updated_moving, updated_neighbor])
            }
            MoveScope::Category => {
                // Categories in display order, each with its rank.
                let mut categories: Vec<(String, i32)> = Vec::new();
                for tag in &tags {
                    if !categories.iter().any(|(c, _)| c == &tag.category) {
                        categories.push((tag.category.clone(), tag.category_rank));
                    }
                }

                let position = categories
                    .iter()
                    .position(|(c, _)| c == &moving.category)
                    .ok_or(CoreError::InternalServerError)?;

                let neighbor = match input.direction {
                    MoveDirection::Up => position.checked_sub(1).map(|i| categories[i].clone()),
                    MoveDirection::Down => categories.get(position + 1).cloned(),
                };
                let Some((neighbor_category, neighbor_rank)) = neighbor else {
                    return Ok(Vec::new());
                };

                let (lo, hi) = swap_ranks(moving.category_rank, neighbor_rank);
                let (moving_rank, neighbor_rank) = match input.direction {
                    MoveDirection::Up => (lo, hi),
                    MoveDirection::Down => (hi, lo),
                };

                self.tag_repository
                    .set_category_rank(user_id, moving.category.clone(), moving_rank)
                    .await?;
                self.tag_repository
                    .set_category_rank(user_id, neighbor_category.clone(), neighbor_rank)
                    .await?;

                let updated = tags
                    .into_iter()
                    .filter(|t| t.category == moving.category || t.category == neighbor_category)
                    .map(|mut t| {
                        t.category_rank = if t.category == moving.category {
                            moving_rank
                        } else {
                            neighbor_rank
                        };
                        t
                    })
                    .collect();
                Ok(updated)
            }
        }
    }

    async fn delete_tag(&self, user_id: Uuid, tag_id: Uuid) -> Result<(), CoreError> {
        self.tag_repository.delete(tag_id, user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        diary::ports::{MockDiaryLogRepository, MockGoalRepository, MockRecentFoodsRepository},
        health::ports::MockHealthCheckRepository,
        library::ports::{MockIngredientRepository, MockProductRepository},
        recipe::ports::MockRecipeRepository,
        stats::ports::MockStatsRepository,
        tag::ports::MockTagRepository,
    };
    use mockall::predicate::eq;

    type TestService = Service<
        MockIngredientRepository,
        MockProductRepository,
        MockRecipeRepository,
        MockDiaryLogRepository,
        MockGoalRepository,
        MockRecentFoodsRepository,
        MockTagRepository,
        MockStatsRepository,
        MockHealthCheckRepository,
    >;

    fn service(tags: MockTagRepository) -> TestService {
        Service::new(
            MockIngredientRepository::new(),
            MockProductRepository::new(),
            MockRecipeRepository::new(),
            MockDiaryLogRepository::new(),
            MockGoalRepository::new(),
            MockRecentFoodsRepository::new(),
            tags,
            MockStatsRepository::new(),
            MockHealthCheckRepository::new(),
        )
    }

    fn tag(user_id: Uuid, category: &str, name: &str, category_rank: i32, tag_rank: i32) -> Tag {
        Tag::new(
            user_id,
            category.to_string(),
            name.to_string(),
            category_rank,
            tag_rank,
        )
    }

    #[tokio::test]
    async fn test_move_up_swaps_with_previous_sibling() {
        let user_id = Uuid::new_v4();
        let first = tag(user_id, "cuisine", "sichuan", 0, 1);
        let second = tag(user_id, "cuisine", "cantonese", 0, 4);
        let second_id = second.id;
        let first_id = first.id;

        let listing = vec![first, second];
        let mut repo = MockTagRepository::new();
        repo.expect_get_by_user()
            .returning(move |_| Ok(listing.clone()));
        repo.expect_set_tag_ranks()
            .with(eq(vec![(second_id, 1), (first_id, 4)]))
            .returning(|_| Ok(()));

        let updated = service(repo)
            .move_tag(
                user_id,
                second_id,
                MoveTagInput {
                    direction: MoveDirection::Up,
                    scope: MoveScope::Tag,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.len(), 2);
        assert_eq!(updated[0].tag_rank, 1);
        assert_eq!(updated[1].tag_rank, 4);
    }

    #[tokio::test]
    async fn test_move_with_colliding_ranks_bumps_neighbor() {
        let user_id = Uuid::new_v4();
        let first = tag(user_id, "cuisine", "a", 0, 2);
        let second = tag(user_id, "cuisine", "b", 0, 2);
        let second_id = second.id;
        let first_id = first.id;

        let listing = vec![first, second];
        let mut repo = MockTagRepository::new();
        repo.expect_get_by_user()
            .returning(move |_| Ok(listing.clone()));
        repo.expect_set_tag_ranks()
            .with(eq(vec![(second_id, 2), (first_id, 3)]))
            .returning(|_| Ok(()));

        let updated = service(repo)
            .move_tag(
                user_id,
                second_id,
                MoveTagInput {
                    direction: MoveDirection::Up,
                    scope: MoveScope::Tag,
                },
            )
            .await
            .unwrap();

        // the moved tag ends up strictly ahead of its old neighbor
        assert!(updated[0].tag_rank < updated[1].tag_rank);
    }

    #[tokio::test]
    async fn test_move_at_edge_is_noop() {
        let user_id = Uuid::new_v4();
        let only = tag(user_id, "cuisine", "solo", 0, 0);
        let only_id = only.id;

        let listing = vec![only];
        let mut repo = MockTagRepository::new();
        repo.expect_get_by_user()
            .returning(move |_| Ok(listing.clone()));
        repo.expect_set_tag_ranks().never();

        let updated = service(repo)
            .move_tag(
                user_id,
                only_id,
                MoveTagInput {
                    direction: MoveDirection::Up,
                    scope: MoveScope::Tag,
                },
            )
            .await
            .unwrap();

        assert!(updated.is_empty());
    }

    #[tokio::test]
    async fn test_category_move_rewrites_both_categories() {
        let user_id = Uuid::new_v4();
        let listing = vec![
            tag(user_id, "cuisine", "a", 0, 0),
            tag(user_id, "cuisine", "b", 0, 1),
            tag(user_id, "occasion", "c", 1, 0),
        ];
        let moving_id = listing[2].id;

        let cloned = listing.clone();
        let mut repo = MockTagRepository::new();
        repo.expect_get_by_user()
            .returning(move |_| Ok(cloned.clone()));
        repo.expect_set_category_rank()
            .with(eq(user_id), eq("occasion".to_string()), eq(0))
            .returning(|_, _, _| Ok(()));
        repo.expect_set_category_rank()
            .with(eq(user_id), eq("cuisine".to_string()), eq(1))
            .returning(|_, _, _| Ok(()));

        let updated = service(repo)
            .move_tag(
                user_id,
                moving_id,
                MoveTagInput {
                    direction: MoveDirection::Up,
                    scope: MoveScope::Category,
                },
            )
            .await
            .unwrap();

        // all rows of both categories come back with their new rank
        assert_eq!(updated.len(), 3);
        for t in &updated {
            match t.category.as_str() {
                "occasion" => assert_eq!(t.category_rank, 0),
                "cuisine" => assert_eq!(t.category_rank, 1),
                other => panic!("unexpected category {other}"),
            }
        }
    }

    #[tokio::test]
    async fn test_create_tag_appends_to_existing_category() {
        let user_id = Uuid::new_v4();
        let listing = vec![
            tag(user_id, "cuisine", "a", 3, 0),
            tag(user_id, "cuisine", "b", 3, 5),
        ];

        let mut repo = MockTagRepository::new();
        repo.expect_get_by_user()
            .returning(move |_| Ok(listing.clone()));
        repo.expect_create().returning(Ok);

        let created = service(repo)
            .create_tag(
                user_id,
                CreateTagInput {
                    category: "cuisine".to_string(),
                    name: "hunan".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(created.category_rank, 3);
        assert_eq!(created.tag_rank, 6);
    }

    #[tokio::test]
    async fn test_create_tag_defaults_blank_category() {
        let mut repo = MockTagRepository::new();
        repo.expect_get_by_user().returning(|_| Ok(Vec::new()));
        repo.expect_create().returning(Ok);

        let created = service(repo)
            .create_tag(
                Uuid::new_v4(),
                CreateTagInput {
                    category: "  ".to_string(),
                    name: "quick".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(created.category, DEFAULT_CATEGORY);
        assert_eq!(created.category_rank, 0);
        assert_eq!(created.tag_rank, 0);
    }
}
