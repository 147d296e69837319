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
use larder_core::domain::diary::{ports::DiaryService, value_objects::GoalTargets};

#[derive(Debug, Deserialize, ToSchema)]
pub struct EffectiveGoalQuery {
    pub date: NaiveDate,
}

#[utoipa::path(
    get,
    path = "/diary/goals/effective",
    tag = "diary",
    summary = "Get the goal in force for a date",
    description = "Latest goal whose apply date is on or before the given date; built-in defaults \
                   when none has been set",
    params(
        ("date" = NaiveDate, Query, description = "Date the goal should apply to"),
    ),
    responses(
        (status = 200, body = GoalTargets)
    )
)]
pub async fn get_effective_goal(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Query(query): Query<EffectiveGoalQuery>,
) -> Result<Response<GoalTargets>, ApiError> {
    let targets = state.service.effective_goal(user.user_id, query.date).await?;

    Ok(Response::OK(targets))
}
