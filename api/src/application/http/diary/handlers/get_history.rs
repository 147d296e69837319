use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_middleware::UserContext,
};
use larder_core::domain::diary::{ports::DiaryService, value_objects::RecentFood};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetHistoryResponse {
    pub items: Vec<RecentFood>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/diary/history",
    tag = "diary",
    summary = "Recently logged foods",
    description = "At most 20 entries, newest first, unique by name",
    responses(
        (status = 200, body = GetHistoryResponse)
    )
)]
pub async fn get_history(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<GetHistoryResponse>, ApiError> {
    let recents = state.service.recent_foods(user.user_id).await?;
    let items = recents.into_inner();

    Ok(Response::OK(GetHistoryResponse {
        count: items.len(),
        items,
    }))
}
