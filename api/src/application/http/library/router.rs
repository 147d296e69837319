use super::handlers::{
    create_ingredient::{__path_create_ingredient, create_ingredient},
    create_product::{__path_create_product, create_product},
    delete_ingredient::{__path_delete_ingredient, delete_ingredient},
    delete_product::{__path_delete_product, delete_product},
    get_ingredient::{__path_get_ingredient, get_ingredient},
    get_ingredients::{__path_get_ingredients, get_ingredients},
    get_product::{__path_get_product, get_product},
    get_products::{__path_get_products, get_products},
    update_ingredient::{__path_update_ingredient, update_ingredient},
    update_product::{__path_update_product, update_product},
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
    create_ingredient,
    get_ingredients,
    get_ingredient,
    update_ingredient,
    delete_ingredient,
    create_product,
    get_products,
    get_product,
    update_product,
    delete_product
))]
pub struct LibraryApiDoc;

pub fn library_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ingredients", state.args.server.root_path),
            post(create_ingredient).get(get_ingredients),
        )
        .route(
            &format!("{}/ingredients/{{ingredient_id}}", state.args.server.root_path),
            get(get_ingredient)
                .put(update_ingredient)
                .delete(delete_ingredient),
        )
        .route(
            &format!("{}/products", state.args.server.root_path),
            post(create_product).get(get_products),
        )
        .route(
            &format!("{}/products/{{product_id}}", state.args.server.root_path),
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(middleware::from_fn_with_state(state.clone(), user_middleware))
}
