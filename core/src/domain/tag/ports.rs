use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    tag::{
        entities::Tag,
        value_objects::{CreateTagInput, MoveTagInput, TagGroup},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait TagRepository: Send + Sync {
    fn create(&self, tag: Tag) -> impl Future<Output = Result<Tag, CoreError>> + Send;

    fn get_by_id(
        &self,
        tag_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Tag>, CoreError>> + Send;

    /// All tags of the user, ordered by `(category_rank, tag_rank, id)`.
    fn get_by_user(&self, user_id: Uuid) -> impl Future<Output = Result<Vec<Tag>, CoreError>> + Send;

    /// Persist a new `tag_rank` for single rows.
    fn set_tag_ranks(
        &self,
        updates: Vec<(Uuid, i32)>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Persist a new `category_rank` on every row of a category.
    fn set_category_rank(
        &self,
        user_id: Uuid,
        category: String,
        rank: i32,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete(
        &self,
        tag_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait TagService: Send + Sync {
    fn create_tag(
        &self,
        user_id: Uuid,
        input: CreateTagInput,
    ) -> impl Future<Output = Result<Tag, CoreError>> + Send;

    fn get_tags(&self, user_id: Uuid) -> impl Future<Output = Result<Vec<Tag>, CoreError>> + Send;

    fn get_tag_groups(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<TagGroup>, CoreError>> + Send;

    /// Swap the tag (or its whole category) with the neighbor in the given
    /// direction. A move with no neighbor is a no-op.
    fn move_tag(
        &self,
        user_id: Uuid,
        tag_id: Uuid,
        input: MoveTagInput,
    ) -> impl Future<Output = Result<Vec<Tag>, CoreError>> + Send;

    fn delete_tag(
        &self,
        user_id: Uuid,
        tag_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
