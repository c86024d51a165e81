use aircook_core::domain::recipe::{
    entities::{Difficulty, Recipe},
    ports::RecipeService,
    value_objects::GetRecipesFilter,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    query_extractor::QueryParamsExtractor,
    query_params::QueryParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipesResponse {
    pub data: Vec<Recipe>,
    pub offset: u32,
    pub limit: u32,
    pub count: usize,
}

fn recipes_filter(query_params: QueryParams) -> Result<GetRecipesFilter, ApiError> {
    let difficulty = query_params
        .filter
        .eq("difficulty")
        .map(|label| {
            Difficulty::from_label(label)
                .ok_or_else(|| ApiError::BadRequest(format!("difficulté inconnue : {label}")))
        })
        .transpose()?;

    let is_public = query_params
        .filter
        .eq("isPublic")
        .map(|value| {
            value
                .parse::<bool>()
                .map_err(|_| ApiError::BadRequest(format!("isPublic invalide : {value}")))
        })
        .transpose()?;

    Ok(GetRecipesFilter {
        category: query_params.filter.eq("category").map(str::to_string),
        difficulty,
        search: query_params.search_on("name"),
        is_public,
        sort: query_params.sort.sorts,
        offset: Some(query_params.pagination.offset),
        limit: Some(query_params.pagination.limit),
    })
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "Get recipes",
    description = "Lists recipes. Supports `filter[category]`, `filter[difficulty]`, `filter[isPublic]`, `search` (or `filter[name][ilike]`), `sort=-createdAt,name`, `offset` and `limit`.",
    responses(
        (status = 200, body = GetRecipesResponse),
        (status = 400, description = "Unknown filter value or sort field")
    )
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<GetRecipesResponse>, ApiError> {
    let pagination = query_params.pagination.clone();
    let filter = recipes_filter(query_params)?;

    let recipes = state
        .service
        .get_recipes(filter)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipesResponse {
        count: recipes.len(),
        data: recipes,
        offset: pagination.offset,
        limit: pagination.limit,
    }))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use aircook_core::domain::common::SortOrder;

    use super::*;

    fn query(pairs: &[(&str, &str)]) -> QueryParams {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        QueryParams::from_query_map(&map)
    }

    #[test]
    fn test_recipes_filter_from_query() {
        let filter = recipes_filter(query(&[
            ("filter[category]", "Dessert"),
            ("filter[difficulty]", "facile"),
            ("filter[isPublic]", "true"),
            ("search", "tarte"),
            ("sort", "-likes"),
            ("limit", "5"),
        ]))
        .unwrap();

        assert_eq!(filter.category.as_deref(), Some("Dessert"));
        assert_eq!(filter.difficulty, Some(Difficulty::Facile));
        assert_eq!(filter.is_public, Some(true));
        assert_eq!(filter.search.as_deref(), Some("tarte"));
        assert_eq!(filter.sort, vec![SortOrder::desc("likes")]);
        assert_eq!((filter.offset, filter.limit), (Some(0), Some(5)));
    }

    #[test]
    fn test_recipes_filter_rejects_unknown_difficulty() {
        let result = recipes_filter(query(&[("filter[difficulty]", "Expert")]));
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
