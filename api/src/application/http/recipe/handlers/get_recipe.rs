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
use larder_core::domain::recipe::{entities::RecipeDetail, ports::RecipeService};

#[utoipa::path(
    get,
    path = "/recipes/{recipe_id}",
    tag = "recipe",
    summary = "Get recipe",
    description = "Recipe with its resolved ingredient lines",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 200, body = RecipeDetail),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<RecipeDetail>, ApiError> {
    let recipe = state
        .service
        .get_recipe(user.user_id, recipe_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Recipe '{recipe_id}' not found")))?;

    Ok(Response::OK(recipe))
}
