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
use larder_core::domain::library::ports::LibraryService;

#[utoipa::path(
    delete,
    path = "/ingredients/{ingredient_id}",
    tag = "library",
    summary = "Delete ingredient",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient id"),
    ),
    responses(
        (status = 204, description = "Deleted")
    )
)]
pub async fn delete_ingredient(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_ingredient(user.user_id, ingredient_id)
        .await?;

    Ok(Response::NoContent)
}
