use axum::{Extension, Json, extract::State};

use crate::application::{
    http::{
        diary::validators::SetGoalValidator,
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
use larder_core::domain::diary::{
    entities::DailyGoal, ports::DiaryService, value_objects::SetGoalInput,
};

#[utoipa::path(
    put,
    path = "/diary/goals",
    tag = "diary",
    summary = "Set a daily goal",
    description = "Upserts the macro targets effective from the given date forward",
    request_body = SetGoalValidator,
    responses(
        (status = 200, body = DailyGoal),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn set_goal(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Json(payload): Json<SetGoalValidator>,
) -> Result<Response<DailyGoal>, ApiError> {
    validate_payload(&payload)?;

    let goal = state
        .service
        .set_goal(
            user.user_id,
            SetGoalInput {
                apply_date: payload.apply_date,
                target_protein: payload.target_protein,
                target_fat: payload.target_fat,
                target_carbs: payload.target_carbs,
            },
        )
        .await?;

    Ok(Response::OK(goal))
}
