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
use larder_core::domain::tag::{entities::Tag, ports::TagService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetTagsResponse {
    pub items: Vec<Tag>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/tags",
    tag = "tag",
    summary = "List tags",
    description = "All tags in display order: category rank, then tag rank, then id",
    responses(
        (status = 200, body = GetTagsResponse)
    )
)]
pub async fn get_tags(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<GetTagsResponse>, ApiError> {
    let tags = state.service.get_tags(user.user_id).await?;

    Ok(Response::OK(GetTagsResponse {
        count: tags.len(),
        items: tags,
    }))
}
