use axum::{Extension, Json, extract::State};

use crate::application::{
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, validate_payload},
                response::Response,
            },
            app_state::AppState,
        },
        tag::validators::CreateTagValidator,
    },
    user_middleware::UserContext,
};
use larder_core::domain::tag::{
    entities::Tag, ports::TagService, value_objects::CreateTagInput,
};

#[utoipa::path(
    post,
    path = "/tags",
    tag = "tag",
    summary = "Create tag",
    description = "New tags append to their category; a new category appends to the category list",
    request_body = CreateTagValidator,
    responses(
        (status = 201, body = Tag),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_tag(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Json(payload): Json<CreateTagValidator>,
) -> Result<Response<Tag>, ApiError> {
    validate_payload(&payload)?;

    let created = state
        .service
        .create_tag(
            user.user_id,
            CreateTagInput {
                category: payload.category,
                name: payload.name,
            },
        )
        .await?;

    Ok(Response::Created(created))
}
