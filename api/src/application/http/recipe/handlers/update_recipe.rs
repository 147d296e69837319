use axum::{
    Extension, Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::application::{
    http::{
        recipe::validators::UpdateRecipeValidator,
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
    entities::RecipeDetail, ports::RecipeService, value_objects::UpdateRecipeInput,
};

#[utoipa::path(
    put,
    path = "/recipes/{recipe_id}",
    tag = "recipe",
    summary = "Update recipe",
    description = "Update recipe fields; a present item list replaces the lines wholesale",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    request_body = UpdateRecipeValidator,
    responses(
        (status = 200, body = RecipeDetail),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Json(payload): Json<UpdateRecipeValidator>,
) -> Result<Response<RecipeDetail>, ApiError> {
    validate_payload(&payload)?;

    let updated = state
        .service
        .update_recipe(
            user.user_id,
            recipe_id,
            UpdateRecipeInput {
                title: payload.title,
                description: payload.description,
                cover_image: payload.cover_image,
                tags: payload.tags,
                steps: payload.steps,
                items: payload
                    .items
                    .map(|items| items.into_iter().map(Into::into).collect()),
            },
        )
        .await?;

    Ok(Response::OK(updated))
}
