use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        query_extractor::QueryParamsExtractor,
        query_params::FilterOperator,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
    user_middleware::UserContext,
};
use larder_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::GetRecipesFilter,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetRecipesResponse {
    pub items: Vec<Recipe>,
    pub offset: i64,
    pub limit: i64,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipe",
    summary = "List recipes",
    description = "List recipes with title search, sorting, and pagination",
    responses(
        (status = 200, body = GetRecipesResponse)
    )
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<GetRecipesResponse>, ApiError> {
    let mut filter = GetRecipesFilter {
        offset: Some(query_params.pagination.offset as u32),
        limit: Some(query_params.pagination.limit as u32),
        ..Default::default()
    };

    if !query_params.sort.is_empty() {
        filter.sort = Some(query_params.sort.to_sort_string());
    }

    for cond in &query_params.filter.conditions {
        if cond.field == "title"
            && matches!(cond.operator, FilterOperator::Eq | FilterOperator::Ilike)
        {
            filter.title = Some(cond.value.clone());
        }
    }

    let recipes = state.service.get_recipes(user.user_id, filter).await?;

    Ok(Response::OK(GetRecipesResponse {
        offset: query_params.pagination.offset,
        limit: query_params.pagination.limit,
        count: recipes.len(),
        items: recipes,
    }))
}
