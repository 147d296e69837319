use super::handlers::{
    create_tag::{__path_create_tag, create_tag},
    delete_tag::{__path_delete_tag, delete_tag},
    get_tag_groups::{__path_get_tag_groups, get_tag_groups},
    get_tags::{__path_get_tags, get_tags},
    move_tag::{__path_move_tag, move_tag},
};
use crate::application::{
    http::server::app_state::AppState, user_middleware::user_middleware,
};
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_tag, get_tags, get_tag_groups, move_tag, delete_tag))]
pub struct TagApiDoc;

pub fn tag_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/tags"),
            post(create_tag).get(get_tags),
        )
        .route(&format!("{root_path}/tags/groups"), get(get_tag_groups))
        .route(&format!("{root_path}/tags/{{tag_id}}"), delete(delete_tag))
        .route(&format!("{root_path}/tags/{{tag_id}}/move"), post(move_tag))
        .layer(middleware::from_fn_with_state(state.clone(), user_middleware))
}
