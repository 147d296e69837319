use axum::{Extension, Json, extract::State};

use crate::application::{
    http::{
        diary::validators::CreateLogValidator,
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
    entities::LogEntry, ports::DiaryService, value_objects::CreateLogInput,
};

#[utoipa::path(
    post,
    path = "/diary/logs",
    tag = "diary",
    summary = "Log a food",
    description = "Record a food against a date and meal slot. Intake values are computed from the \
                   submitted density and quantity once, at save time.",
    request_body = CreateLogValidator,
    responses(
        (status = 201, body = LogEntry),
        (status = 400, description = "Bad request"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_log(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Json(payload): Json<CreateLogValidator>,
) -> Result<Response<LogEntry>, ApiError> {
    validate_payload(&payload)?;

    let created = state
        .service
        .create_log(
            user.user_id,
            CreateLogInput {
                log_date: payload.log_date,
                meal_slot: payload.meal_slot,
                food_name: payload.food_name,
                image_url: payload.image_url,
                source: payload.source,
                density: payload.density,
                quantity: payload.quantity,
                unit: payload.unit,
                unit_weight_g: payload.unit_weight_g,
            },
        )
        .await?;

    Ok(Response::Created(created))
}
