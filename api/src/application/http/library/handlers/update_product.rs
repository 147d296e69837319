use axum::{
    Extension, Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::application::{
    http::{
        library::validators::UpdateProductValidator,
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
    entities::Product, ports::LibraryService, value_objects::UpdateProductInput,
};

#[utoipa::path(
    put,
    path = "/products/{product_id}",
    tag = "library",
    summary = "Update product",
    params(
        ("product_id" = Uuid, Path, description = "Product id"),
    ),
    request_body = UpdateProductValidator,
    responses(
        (status = 200, body = Product),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_product(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Json(payload): Json<UpdateProductValidator>,
) -> Result<Response<Product>, ApiError> {
    validate_payload(&payload)?;

    let updated = state
        .service
        .update_product(
            user.user_id,
            product_id,
            UpdateProductInput {
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

    Ok(Response::OK(updated))
}
