use aircook_core::domain::allergy::{entities::AllergyCheck, ports::AllergyService};
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipeAllergiesResponse {
    pub data: AllergyCheck,
}

#[utoipa::path(
    get,
    path = "/{recipe_id}/allergies",
    tag = "recipe",
    summary = "Check recipe against my allergies",
    description = "Returns the caller's allergies that match an ingredient of the recipe.",
    params(
        ("recipe_id" = String, Path, description = "Airtable record id of the recipe"),
    ),
    responses(
        (status = 200, body = GetRecipeAllergiesResponse),
        (status = 404, description = "Recipe not found")
    ),
    security(("bearer" = []))
)]
pub async fn get_recipe_allergies(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetRecipeAllergiesResponse>, ApiError> {
    let check = state
        .service
        .check_recipe_allergies(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipeAllergiesResponse { data: check }))
}
