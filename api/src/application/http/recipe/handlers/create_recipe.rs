use axum::{Extension, Json, extract::State};

use crate::application::{
    http::{
        recipe::validators::CreateRecipeValidator,
        server::{
            api_entities::{
                api_error::{ApiError, validate_payload},
                response::Response,
            },
            app_state::AppState,
        },
    },
    user_middleware::UserContext,
};
use larder_core::domain::recipe::{
    entities::RecipeDetail, ports::RecipeService, value_objects::CreateRecipeInput,
};

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipe",
    summary = "Create recipe",
    description = "Create a recipe with its ingredient lines; unknown ingredient names are added to the library",
    request_body = CreateRecipeValidator,
    responses(
        (status = 201, body = RecipeDetail),
        (status = 400, description = "Bad request"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Json(payload): Json<CreateRecipeValidator>,
) -> Result<Response<RecipeDetail>, ApiError> {
    validate_payload(&payload)?;

    let created = state
        .service
        .create_recipe(
            user.user_id,
            CreateRecipeInput {
                title: payload.title,
                description: payload.description,
                cover_image: payload.cover_image,
                tags: payload.tags,
                steps: payload.steps,
                items: payload.items.into_iter().map(Into::into).collect(),
            },
        )
        .await?;

    Ok(Response::Created(created))
}
