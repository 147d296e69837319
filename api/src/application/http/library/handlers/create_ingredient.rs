use axum::{Extension, Json, extract::State};

use crate::application::{
    http::{
        library::validators::CreateIngredientValidator,
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
use larder_core::domain::library::{
    entities::Ingredient, ports::LibraryService, value_objects::CreateIngredientInput,
};

#[utoipa::path(
    post,
    path = "/ingredients",
    tag = "library",
    summary = "Create ingredient",
    description = "Add a basic ingredient with per-100g macros; calories are derived",
    request_body = CreateIngredientValidator,
    responses(
        (status = 201, body = Ingredient),
        (status = 400, description = "Bad request"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Json(payload): Json<CreateIngredientValidator>,
) -> Result<Response<Ingredient>, ApiError> {
    validate_payload(&payload)?;

    let created = state
        .service
        .create_ingredient(
            user.user_id,
            CreateIngredientInput {
                name: payload.name,
                image_url: payload.image_url,
                protein: payload.protein,
                fat: payload.fat,
                carbs: payload.carbs,
            },
        )
        .await?;

    Ok(Response::Created(created))
}
