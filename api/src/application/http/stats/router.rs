use super::handlers::get_daily_stats::{__path_get_daily_stats, get_daily_stats};
use crate::application::{
    http::server::app_state::AppState, user_middleware::user_middleware,
};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_daily_stats))]
pub struct StatsApiDoc;

pub fn stats_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/stats/daily", state.args.server.root_path),
            get(get_daily_stats),
        )
        .layer(middleware::from_fn_with_state(state.clone(), user_middleware))
}
