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
use larder_core::domain::tag::ports::TagService;

#[utoipa::path(
    delete,
    path = "/tags/{tag_id}",
    tag = "tag",
    summary = "Delete tag",
    params(
        ("tag_id" = Uuid, Path, description = "Tag id"),
    ),
    responses(
        (status = 204, description = "Deleted")
    )
)]
pub async fn delete_tag(
    Path(tag_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<()>, ApiError> {
    state.service.delete_tag(user.user_id, tag_id).await?;

    Ok(Response::NoContent)
}
