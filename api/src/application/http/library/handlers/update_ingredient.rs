use axum::{
    Extension, Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::application::{
    http::{
        library::validators::UpdateIngredientValidator,
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
    entities::Ingredient, ports::LibraryService, value_objects::UpdateIngredientInput,
};

#[utoipa::path(
    put,
    path = "/ingredients/{ingredient_id}",
    tag = "library",
    summary = "Update ingredient",
    description = "Change name, image, or macros; calories are re-derived",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient id"),
    ),
    request_body = UpdateIngredientValidator,
    responses(
        (status = 200, body = Ingredient),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_ingredient(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Json(payload): Json<UpdateIngredientValidator>,
) -> Result<Response<Ingredient>, ApiError> {
    validate_payload(&payload)?;

    let updated = state
        .service
        .update_ingredient(
            user.user_id,
            ingredient_id,
            UpdateIngredientInput {
                name: payload.name,
                image_url: payload.image_url,
                protein: payload.protein,
                fat: payload.fat,
                carbs: payload.carbs,
            },
        )
        .await?;

    Ok(Response::OK(updated))
}
