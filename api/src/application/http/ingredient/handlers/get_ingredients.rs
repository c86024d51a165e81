use aircook_core::domain::ingredient::{
    entities::Ingredient, ports::IngredientService, value_objects::GetIngredientsFilter,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    query_extractor::QueryParamsExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetIngredientsResponse {
    pub data: Vec<Ingredient>,
    pub offset: u32,
    pub limit: u32,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "",
    tag = "ingredient",
    summary = "Get ingredients",
    description = "Lists catalog ingredients. Supports `search` (or `filter[name][ilike]`), `filter[allergens]`, `sort`, `offset` and `limit`.",
    responses(
        (status = 200, body = GetIngredientsResponse)
    )
)]
pub async fn get_ingredients(
    State(state): State<AppState>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<GetIngredientsResponse>, ApiError> {
    let pagination = query_params.pagination.clone();

    let ingredients = state
        .service
        .get_ingredients(GetIngredientsFilter {
            search: query_params.search_on("name"),
            allergen: query_params.filter.eq("allergens").map(str::to_string),
            sort: query_params.sort.sorts,
            offset: Some(pagination.offset),
            limit: Some(pagination.limit),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetIngredientsResponse {
        count: ingredients.len(),
        data: ingredients,
        offset: pagination.offset,
        limit: pagination.limit,
    }))
}
