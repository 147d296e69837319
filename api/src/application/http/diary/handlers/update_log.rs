use axum::{
    Extension, Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::application::{
    http::{
        diary::validators::UpdateLogValidator,
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
    entities::LogEntry, ports::DiaryService, value_objects::UpdateLogInput,
};

#[utoipa::path(
    put,
    path = "/diary/logs/{entry_id}",
    tag = "diary",
    summary = "Update a log entry",
    description = "Recomputes the stored intake from the resubmitted density and quantity; the \
                   source library item is never consulted",
    params(
        ("entry_id" = Uuid, Path, description = "Log entry id"),
    ),
    request_body = UpdateLogValidator,
    responses(
        (status = 200, body = LogEntry),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_log(
    Path(entry_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Json(payload): Json<UpdateLogValidator>,
) -> Result<Response<LogEntry>, ApiError> {
    validate_payload(&payload)?;

    let updated = state
        .service
        .update_log(
            user.user_id,
            entry_id,
            UpdateLogInput {
                log_date: payload.log_date,
                meal_slot: payload.meal_slot,
                food_name: payload.food_name,
                image_url: payload.image_url,
                density: payload.density,
                quantity: payload.quantity,
                unit: payload.unit,
                unit_weight_g: payload.unit_weight_g,
            },
        )
        .await?;

    Ok(Response::OK(updated))
}
