use axum::{
    Extension,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_middleware::UserContext,
};
use larder_core::domain::library::{entities::Product, ports::LibraryService};

#[utoipa::path(
    get,
    path = "/products/{product_id}",
    tag = "library",
    summary = "Get product",
    params(
        ("product_id" = Uuid, Path, description = "Product id"),
    ),
    responses(
        (status = 200, body = Product),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_product(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<Product>, ApiError> {
    let product = state
        .service
        .get_product(user.user_id, product_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Product '{product_id}' not found")))?;

    Ok(Response::OK(product))
}
