use aircook_core::domain::ingredient::{entities::Ingredient, ports::IngredientService};
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::ingredient::validators::UpdateIngredientValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    put,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Update ingredient",
    description = "Administrators only.",
    params(
        ("ingredient_id" = String, Path, description = "Airtable record id of the ingredient"),
    ),
    request_body = UpdateIngredientValidator,
    responses(
        (status = 200, body = UpdateIngredientResponse),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "Ingredient not found")
    ),
    security(("bearer" = []))
)]
pub async fn update_ingredient(
    Path(ingredient_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateIngredientValidator>,
) -> Result<Response<UpdateIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .update_ingredient(identity, ingredient_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateIngredientResponse { data: ingredient }))
}
