use axum::{Extension, extract::{Query, State}};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_middleware::UserContext,
};
use larder_core::domain::stats::{ports::StatsService, value_objects::DailyStats};

#[derive(Debug, Deserialize, ToSchema)]
pub struct DailyStatsQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[utoipa::path(
    get,
    path = "/stats/daily",
    tag = "stats",
    summary = "Day-bucketed intake sums",
    description = "One bucket per day of the range (zero-filled, future days excluded) plus the \
                   average calories over days with records",
    params(
        ("start" = NaiveDate, Query, description = "Range start (YYYY-MM-DD)"),
        ("end" = NaiveDate, Query, description = "Range end, inclusive"),
    ),
    responses(
        (status = 200, body = DailyStats),
        (status = 400, description = "Bad request")
    )
)]
pub async fn get_daily_stats(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Query(query): Query<DailyStatsQuery>,
) -> Result<Response<DailyStats>, ApiError> {
    let stats = state
        .service
        .daily_stats(user.user_id, query.start, query.end)
        .await?;

    Ok(Response::OK(stats))
}
