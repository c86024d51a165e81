use aircook_core::domain::recipe::{ports::RecipeService, value_objects::LikeOutcome};
use axum::extract::{Path, State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct ToggleLikeResponse {
    pub data: LikeOutcome,
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/like",
    tag = "recipe",
    summary = "Like or unlike a recipe",
    description = "Toggles the caller's like on the recipe and returns the new like count.",
    params(
        ("recipe_id" = String, Path, description = "Airtable record id of the recipe"),
    ),
    responses(
        (status = 200, body = ToggleLikeResponse),
        (status = 404, description = "Recipe not found")
    ),
    security(("bearer" = []))
)]
pub async fn toggle_like(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ToggleLikeResponse>, ApiError> {
    let outcome = state
        .service
        .toggle_like(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ToggleLikeResponse { data: outcome }))
}
