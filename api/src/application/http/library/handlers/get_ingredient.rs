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
use larder_core::domain::library::{entities::Ingredient, ports::LibraryService};

#[utoipa::path(
    get,
    path = "/ingredients/{ingredient_id}",
    tag = "library",
    summary = "Get ingredient",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient id"),
    ),
    responses(
        (status = 200, body = Ingredient),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_ingredient(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<Ingredient>, ApiError> {
    let ingredient = state
        .service
        .get_ingredient(user.user_id, ingredient_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Ingredient '{ingredient_id}' not found")))?;

    Ok(Response::OK(ingredient))
}
