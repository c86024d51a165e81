use aircook_core::domain::ingredient::ports::IngredientService;
use axum::extract::{Path, State};

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Delete ingredient",
    description = "Administrators only.",
    params(
        ("ingredient_id" = String, Path, description = "Airtable record id of the ingredient"),
    ),
    responses(
        (status = 204, description = "Ingredient deleted"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "Ingredient not found")
    ),
    security(("bearer" = []))
)]
pub async fn delete_ingredient(
    Path(ingredient_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_ingredient(identity, ingredient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
