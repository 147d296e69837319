use super::handlers::{
    clear_history::{__path_clear_history, clear_history},
    create_log::{__path_create_log, create_log},
    delete_log::{__path_delete_log, delete_log},
    get_day::{__path_get_day, get_day},
    get_effective_goal::{__path_get_effective_goal, get_effective_goal},
    get_history::{__path_get_history, get_history},
    get_logs::{__path_get_logs, get_logs},
    remove_history_item::{__path_remove_history_item, remove_history_item},
    set_goal::{__path_set_goal, set_goal},
    update_log::{__path_update_log, update_log},
};
use crate::application::{
    http::server::app_state::AppState, user_middleware::user_middleware,
};
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_log,
    get_logs,
    get_day,
    update_log,
    delete_log,
    set_goal,
    get_effective_goal,
    get_history,
    remove_history_item,
    clear_history
))]
pub struct DiaryApiDoc;

pub fn diary_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/diary/logs"),
            post(create_log).get(get_logs),
        )
        .route(
            &format!("{root_path}/diary/logs/{{entry_id}}"),
            put(update_log).delete(delete_log),
        )
        .route(&format!("{root_path}/diary/days/{{date}}"), get(get_day))
        .route(&format!("{root_path}/diary/goals"), put(set_goal))
        .route(
            &format!("{root_path}/diary/goals/effective"),
            get(get_effective_goal),
        )
        .route(
            &format!("{root_path}/diary/history"),
            get(get_history).delete(clear_history),
        )
        .route(
            &format!("{root_path}/diary/history/{{name}}"),
            delete(remove_history_item),
        )
        .layer(middleware::from_fn_with_state(state.clone(), user_middleware))
}
