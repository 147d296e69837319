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
use larder_core::domain::library::ports::LibraryService;

#[utoipa::path(
    delete,
    path = "/products/{product_id}",
    tag = "library",
    summary = "Delete product",
    params(
        ("product_id" = Uuid, Path, description = "Product id"),
    ),
    responses(
        (status = 204, description = "Deleted")
    )
)]
pub async fn delete_product(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_product(user.user_id, product_id)
        .await?;

    Ok(Response::NoContent)
}
