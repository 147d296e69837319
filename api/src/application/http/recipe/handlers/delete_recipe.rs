use axum::{
    Extension,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_middleware::UserContext,
};
use larder_core::domain::recipe::ports::RecipeService;

#[utoipa::path(
    delete,
    path = "/recipes/{recipe_id}",
    tag = "recipe",
    summary = "Delete recipe",
    description = "Delete a recipe and its ingredient lines",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 204, description = "Deleted")
    )
)]
pub async fn delete_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<()>, ApiError> {
    state.service.delete_recipe(user.user_id, recipe_id).await?;

    Ok(Response::NoContent)
}
