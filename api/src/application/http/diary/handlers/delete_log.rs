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
use larder_core::domain::diary::ports::DiaryService;

#[utoipa::path(
    delete,
    path = "/diary/logs/{entry_id}",
    tag = "diary",
    summary = "Delete a log entry",
    params(
        ("entry_id" = Uuid, Path, description = "Log entry id"),
    ),
    responses(
        (status = 204, description = "Deleted")
    )
)]
pub async fn delete_log(
    Path(entry_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<()>, ApiError> {
    state.service.delete_log(user.user_id, entry_id).await?;

    Ok(Response::NoContent)
}
