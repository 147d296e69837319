use larder_core::domain::tag::value_objects::{MoveDirection, MoveScope};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTagValidator {
    /// Blank categories fall back to a default bucket.
    #[serde(default)]
    pub category: String,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MoveTagValidator {
    pub direction: MoveDirection,

    /// Move the tag within its category, or the whole category.
    #[serde(default = "default_scope")]
    pub scope: MoveScope,
}

fn default_scope() -> MoveScope {
    MoveScope::Tag
}
