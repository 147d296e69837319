use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        tag::validators::MoveTagValidator,
    },
    user_middleware::UserContext,
};
use larder_core::domain::tag::{
    entities::Tag, ports::TagService, value_objects::MoveTagInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MoveTagResponse {
    /// Rows whose ranks changed; empty when the move hit the edge.
    pub updated: Vec<Tag>,
}

#[utoipa::path(
    post,
    path = "/tags/{tag_id}/move",
    tag = "tag",
    summary = "Move a tag or its category",
    description = "Swaps ranks with the neighbor in the given direction; colliding ranks are \
                   split by bumping the one that lands behind",
    params(
        ("tag_id" = Uuid, Path, description = "Tag id"),
    ),
    request_body = MoveTagValidator,
    responses(
        (status = 200, body = MoveTagResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn move_tag(
    Path(tag_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Json(payload): Json<MoveTagValidator>,
) -> Result<Response<MoveTagResponse>, ApiError> {
    let updated = state
        .service
        .move_tag(
            user.user_id,
            tag_id,
            MoveTagInput {
                direction: payload.direction,
                scope: payload.scope,
            },
        )
        .await?;

    Ok(Response::OK(MoveTagResponse { updated }))
}
