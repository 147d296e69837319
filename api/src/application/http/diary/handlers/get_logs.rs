use axum::{Extension, extract::{Query, State}};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_middleware::UserContext,
};
use larder_core::domain::diary::{entities::LogEntry, ports::DiaryService};

#[derive(Debug, Deserialize, ToSchema)]
pub struct GetLogsQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetLogsResponse {
    pub items: Vec<LogEntry>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/diary/logs",
    tag = "diary",
    summary = "List logs for a date",
    params(
        ("date" = NaiveDate, Query, description = "Diary date (YYYY-MM-DD)"),
    ),
    responses(
        (status = 200, body = GetLogsResponse)
    )
)]
pub async fn get_logs(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Query(query): Query<GetLogsQuery>,
) -> Result<Response<GetLogsResponse>, ApiError> {
    let entries = state.service.get_logs(user.user_id, query.date).await?;

    Ok(Response::OK(GetLogsResponse {
        count: entries.len(),
        items: entries,
    }))
}
