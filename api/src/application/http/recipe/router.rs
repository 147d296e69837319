use super::handlers::{
    create_recipe::{__path_create_recipe, create_recipe},
    delete_recipe::{__path_delete_recipe, delete_recipe},
    get_recipe::{__path_get_recipe, get_recipe},
    get_recipe_nutrition::{__path_get_recipe_nutrition, get_recipe_nutrition},
    get_recipes::{__path_get_recipes, get_recipes},
    update_recipe::{__path_update_recipe, update_recipe},
};
use crate::application::{
    http::server::app_state::AppState, user_middleware::user_middleware,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_recipe,
    get_recipes,
    get_recipe,
    update_recipe,
    delete_recipe,
    get_recipe_nutrition
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes", state.args.server.root_path),
            post(create_recipe).get(get_recipes),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", state.args.server.root_path),
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route(
            &format!(
                "{}/recipes/{{recipe_id}}/nutrition",
                state.args.server.root_path
            ),
            get(get_recipe_nutrition),
        )
        .layer(middleware::from_fn_with_state(state.clone(), user_middleware))
}
