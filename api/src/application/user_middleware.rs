use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::error;
use uuid::Uuid;

use larder_core::domain::profile::services::get_or_create_profile;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Resolved caller identity stored in request extensions.
#[derive(Clone, Debug)]
pub struct UserContext {
    pub user_id: Uuid,
}

/// Maps the `X-Device-Id` header to a stable user profile, creating one the
/// first time a device shows up. Every data route sits behind this.
pub async fn user_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let device_id = req
        .headers()
        .get("x-device-id")
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("X-Device-Id header is required".to_string()))?
        .to_string();

    let profile = get_or_create_profile(state.profile_repository.as_ref(), &device_id)
        .await
        .map_err(|e| {
            error!("Failed to resolve device profile: {}", e);
            ApiError::InternalServerError("Failed to resolve device profile".to_string())
        })?;

    req.extensions_mut().insert(UserContext {
        user_id: profile.id,
    });

    Ok(next.run(req).await)
}
