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
use larder_core::domain::tag::{ports::TagService, value_objects::TagGroup};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetTagGroupsResponse {
    pub groups: Vec<TagGroup>,
}

#[utoipa::path(
    get,
    path = "/tags/groups",
    tag = "tag",
    summary = "List tags grouped by category",
    responses(
        (status = 200, body = GetTagGroupsResponse)
    )
)]
pub async fn get_tag_groups(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<GetTagGroupsResponse>, ApiError> {
    let groups = state.service.get_tag_groups(user.user_id).await?;

    Ok(Response::OK(GetTagGroupsResponse { groups }))
}
