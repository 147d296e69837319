use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AppConfigResponse {
    pub name: String,
    pub version: String,
    pub root_path: String,
}

/// Public configuration clients need before talking to the API.
pub async fn get_config(State(state): State<AppState>) -> Json<AppConfigResponse> {
    Json(AppConfigResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        root_path: state.args.server.root_path.clone(),
    })
}
