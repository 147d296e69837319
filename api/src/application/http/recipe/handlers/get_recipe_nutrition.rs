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
use larder_core::domain::recipe::{entities::RecipeNutrition, ports::RecipeService};

#[utoipa::path(
    get,
    path = "/recipes/{recipe_id}/nutrition",
    tag = "recipe",
    summary = "Get recipe nutrition",
    description = "Aggregate of the main ingredient lines: absolute totals plus the per-100g density used when logging the whole dish",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 200, body = RecipeNutrition),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_recipe_nutrition(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<RecipeNutrition>, ApiError> {
    let nutrition = state
        .service
        .recipe_nutrition(user.user_id, recipe_id)
        .await?;

    Ok(Response::OK(nutrition))
}
