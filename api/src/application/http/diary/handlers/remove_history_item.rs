use axum::{
    Extension,
    extract::{Path, State},
};
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
pub struct RemoveHistoryItemResponse {
    pub items: Vec<RecentFood>,
    pub count: usize,
}

#[utoipa::path(
    delete,
    path = "/diary/history/{name}",
    tag = "diary",
    summary = "Remove one recent food",
    params(
        ("name" = String, Path, description = "Food name to drop from the list"),
    ),
    responses(
        (status = 200, body = RemoveHistoryItemResponse)
    )
)]
pub async fn remove_history_item(
    Path(name): Path<String>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<RemoveHistoryItemResponse>, ApiError> {
    let recents = state
        .service
        .remove_recent_food(user.user_id, name)
        .await?;
    let items = recents.into_inner();

    Ok(Response::OK(RemoveHistoryItemResponse {
        count: items.len(),
        items,
    }))
}
