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
use larder_core::domain::library::{
    entities::Product, ports::LibraryService, value_objects::GetLibraryFilter,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetProductsResponse {
    pub items: Vec<Product>,
    pub offset: i64,
    pub limit: i64,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "library",
    summary = "List products",
    description = "List the product library with name search, sorting, and pagination",
    responses(
        (status = 200, body = GetProductsResponse)
    )
)]
pub async fn get_products(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<GetProductsResponse>, ApiError> {
    let mut filter = GetLibraryFilter {
        offset: Some(query_params.pagination.offset as u32),
        limit: Some(query_params.pagination.limit as u32),
        ..Default::default()
    };

    if !query_params.sort.is_empty() {
        filter.sort = Some(query_params.sort.to_sort_string());
    }

    for cond in &query_params.filter.conditions {
        if cond.field == "name"
            && matches!(cond.operator, FilterOperator::Eq | FilterOperator::Ilike)
        {
            filter.name = Some(cond.value.clone());
        }
    }

    let products = state.service.get_products(user.user_id, filter).await?;

    Ok(Response::OK(GetProductsResponse {
        offset: query_params.pagination.offset,
        limit: query_params.pagination.limit,
        count: products.len(),
        items: products,
    }))
}
