use axum::{Extension, Json, extract::State};

use crate::application::{
    http::{
        library::validators::CreateProductValidator,
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
    entities::Product, ports::LibraryService, value_objects::CreateProductInput,
};

#[utoipa::path(
    post,
    path = "/products",
    tag = "library",
    summary = "Create product",
    description = "Add a packaged food with its measurement unit; calories are derived",
    request_body = CreateProductValidator,
    responses(
        (status = 201, body = Product),
        (status = 400, description = "Bad request"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Json(payload): Json<CreateProductValidator>,
) -> Result<Response<Product>, ApiError> {
    validate_payload(&payload)?;

    let created = state
        .service
        .create_product(
            user.user_id,
            CreateProductInput {
                name: payload.name,
                image_url: payload.image_url,
                unit: payload.unit,
                unit_weight_g: payload.unit_weight_g,
                protein: payload.protein,
                fat: payload.fat,
                carbs: payload.carbs,
            },
        )
        .await?;

    Ok(Response::Created(created))
}
