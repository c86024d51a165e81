use aircook_core::domain::recipe::ports::RecipeService;
use axum::extract::{Path, State};

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Delete recipe",
    params(
        ("recipe_id" = String, Path, description = "Airtable record id of the recipe"),
    ),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 404, description = "Recipe not found")
    ),
    security(("bearer" = []))
)]
pub async fn delete_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_recipe(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
