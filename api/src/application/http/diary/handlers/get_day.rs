use axum::{
    Extension,
    extract::{Path, State},
};
use chrono::NaiveDate;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_middleware::UserContext,
};
use larder_core::domain::diary::{ports::DiaryService, value_objects::DaySummary};

#[utoipa::path(
    get,
    path = "/diary/days/{date}",
    tag = "diary",
    summary = "Get a diary day",
    description = "Entries for the date grouped per meal slot, with per-slot and day totals",
    params(
        ("date" = NaiveDate, Path, description = "Diary date (YYYY-MM-DD)"),
    ),
    responses(
        (status = 200, body = DaySummary)
    )
)]
pub async fn get_day(
    Path(date): Path<NaiveDate>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Response<DaySummary>, ApiError> {
    let summary = state.service.day_summary(user.user_id, date).await?;

    Ok(Response::OK(summary))
}
