use axum::{Extension, extract::State};

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
    path = "/diary/history",
    tag = "diary",
    summary = "Clear the recent foods list",
    responses(
        (status = 204, description = "Cleared")
    )
)]
pub async fn clear_history(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<()>, ApiError> {
    state.service.clear_recent_foods(user.user_id).await?;

    Ok(Response::NoContent)
}
