use aircook_core::domain::recipe::{entities::Recipe, ports::RecipeService};
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::recipe::validators::UpdateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    put,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Update recipe",
    description = "Partially updates a recipe. Omitted fields are left untouched and `updatedAt` is refreshed.",
    params(
        ("recipe_id" = String, Path, description = "Airtable record id of the recipe"),
    ),
    request_body = UpdateRecipeValidator,
    responses(
        (status = 200, body = UpdateRecipeResponse),
        (status = 404, description = "Recipe not found")
    ),
    security(("bearer" = []))
)]
pub async fn update_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateRecipeValidator>,
) -> Result<Response<UpdateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .update_recipe(identity, recipe_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateRecipeResponse { data: recipe }))
}
